mod cli;

use base_rc::{DecodeError, DictionaryNotFoundError};

fn main() {
    if let Err(e) = cli::run() {
        // These render their own "error:" header and hints.
        if e.is::<DecodeError>() || e.is::<DictionaryNotFoundError>() {
            eprintln!("{}", e);
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
