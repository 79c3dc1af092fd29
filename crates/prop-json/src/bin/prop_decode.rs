//! `prop-decode` — apply a wire payload to a declared property collection.
//!
//! Usage:
//!   prop-decode '<payload>'
//!
//! The collection is read from stdin as an array of declarations; the
//! updated wire object is printed on success. A rejected payload exits with
//! status 2.

use prop_json::cli::{decode, init_logging, CliError};
use std::io::{self, Read, Write};

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let payload = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a JSON object.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match decode(&buf, &payload) {
        Ok(result) => {
            let mut out = io::stdout();
            if let Err(e) = out.write_all(result.as_bytes()).and_then(|_| out.write_all(b"\n")) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e @ CliError::Decode(_)) => {
            eprintln!("Invalid params: {e}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
