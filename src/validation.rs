use crate::command::rebrand::RebrandArgs;
use crate::error::{RebrandError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Resolves the repository root, failing if it is missing or not a directory.
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(RebrandError::PathNotFound(path.to_path_buf()));
    }

    let root = path.canonicalize()?;
    if !root.is_dir() {
        return Err(RebrandError::NotADirectory(root));
    }

    Ok(root)
}

/// Rejects extra skip-directory names that could never match a single
/// path component.
pub fn validate_skip_dirs(names: &[String]) -> Result<()> {
    for name in names {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(RebrandError::Other(anyhow::anyhow!(
                "Invalid skip directory '{}': must be a single directory name",
                name
            )));
        }
    }

    Ok(())
}

/// Asks the user to confirm a live run. Dry runs and `--yes` skip the prompt.
pub fn confirm_operation(args: &RebrandArgs) -> Result<bool> {
    if args.yes || args.dry_run {
        return Ok(true);
    }

    let stdin = io::stdin();
    confirm_with(&mut stdin.lock(), &mut io::stdout())
}

fn confirm_with<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(
        output,
        "\n{} {} ",
        "This will modify files in your repository. Continue?".bold(),
        "[y/N]:".dimmed()
    )?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;

    let confirmed = response
        .trim_end_matches(['\r', '\n'])
        .eq_ignore_ascii_case("y");
    if !confirmed {
        log::info!("Rebrand cancelled by user");
    }

    Ok(confirmed)
}
