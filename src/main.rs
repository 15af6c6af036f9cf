//! Binary entry point for `junita-rebrand`.

use std::process;

fn main() {
    if let Err(e) = junita_rebrand::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
