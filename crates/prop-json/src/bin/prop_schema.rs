//! `prop-schema` — print a schema for declared property collections.
//!
//! Usage:
//!   prop-schema <get|set|object> <title> [description]
//!
//! The named collections are read from stdin as an object of declaration
//! arrays, e.g. `{"sphere": [{"name": "radius", "type": "float"}]}`.

use prop_json::cli::{init_logging, schema};
use std::io::{self, Read, Write};

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let (mode, title) = match (args.get(1), args.get(2)) {
        (Some(mode), Some(title)) => (mode.clone(), title.clone()),
        _ => {
            eprintln!("Usage: prop-schema <get|set|object> <title> [description]");
            std::process::exit(1);
        }
    };
    let description = args.get(3).cloned().unwrap_or_default();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match schema(&mode, &title, &description, &buf) {
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
