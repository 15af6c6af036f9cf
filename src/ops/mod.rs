mod content;
mod rename;
mod walk;

pub use content::{FileResult, rebrand_file};
pub use rename::{RenameFailure, RenameOutcome, RenameRecord, rename_paths};
pub use walk::find_files_to_process;
