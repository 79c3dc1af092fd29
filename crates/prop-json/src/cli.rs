//! Logic behind the command-line tools.
//!
//! - `prop-schema` — print a method or object schema for declared collections
//! - `prop-encode` — print the wire object of a declared collection
//! - `prop-decode` — apply a wire payload to a declared collection
//!
//! Declarations use the format of [`prop_json_property_map::declaration`].

use prop_json_property_map::{parse_collection, parse_collections, PropertyError};
use tracing_subscriber::EnvFilter;

use crate::codec::{from_json, to_json};
use crate::error::DecodeError;
use crate::schema::{
    get_properties_schema_json, object_schema_one_of_json, set_properties_schema_json,
};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Declaration(PropertyError),
    Decode(DecodeError),
    UnknownMode(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Declaration(e) => write!(f, "{e}"),
            CliError::Decode(e)      => write!(f, "{e}"),
            CliError::UnknownMode(m) => write!(f, "Unknown mode: {m} (expected get, set or object)"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<PropertyError> for CliError {
    fn from(e: PropertyError) -> Self { CliError::Declaration(e) }
}

impl From<DecodeError> for CliError {
    fn from(e: DecodeError) -> Self { CliError::Decode(e) }
}

/// Installs the stderr log subscriber used by the binaries. The filter is
/// read from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ── prop-schema ───────────────────────────────────────────────────────────

/// Builds the schema selected by `mode` (`get`, `set` or `object`) for
/// named collections declared in `decls`.
pub fn schema(mode: &str, title: &str, description: &str, decls: &str) -> Result<String, CliError> {
    let objs = parse_collections(decls)?;
    match mode {
        "get"    => Ok(get_properties_schema_json(title, description, &objs)),
        "set"    => Ok(set_properties_schema_json(title, description, &objs)),
        "object" => Ok(object_schema_one_of_json(title, &objs)),
        other    => Err(CliError::UnknownMode(other.to_string())),
    }
}

// ── prop-encode ───────────────────────────────────────────────────────────

/// Wire object of the collection declared in `decls`.
pub fn encode(decls: &str) -> Result<String, CliError> {
    let map = parse_collection(decls)?;
    Ok(to_json(&map))
}

// ── prop-decode ───────────────────────────────────────────────────────────

/// Applies `payload` to the collection declared in `decls` and returns the
/// resulting wire object.
pub fn decode(decls: &str, payload: &str) -> Result<String, CliError> {
    let mut map = parse_collection(decls)?;
    from_json(&mut map, payload)?;
    Ok(to_json(&map))
}
