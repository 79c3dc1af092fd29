//! `prop-encode` — print the wire object of a declared property collection.
//!
//! Usage:
//!   prop-encode
//!
//! The collection is read from stdin as an array of declarations.

use prop_json::cli::{encode, init_logging};
use std::io::{self, Read, Write};

fn main() {
    init_logging();
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match encode(&buf) {
        Ok(result) => {
            let mut out = io::stdout();
            if let Err(e) = out.write_all(result.as_bytes()).and_then(|_| out.write_all(b"\n")) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
