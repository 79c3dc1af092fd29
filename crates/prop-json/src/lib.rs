//! `prop-json` — JSON Schema generation and wire JSON codec for typed
//! property collections.
//!
//! - [`case`] maps internal camelCase names to wire snake_case names and back.
//! - [`schema`] describes collections as JSON Schema fragments and JSON-RPC
//!   method descriptions, including `oneOf` documents over several named
//!   collections.
//! - [`codec`] encodes a collection to a flat wire object and applies wire
//!   objects to an existing collection in place.
//!
//! Collections are anything implementing
//! [`PropertyCollection`](prop_json_property_map::PropertyCollection).

pub mod case;
pub mod cli;
pub mod codec;
pub mod error;
pub mod schema;

pub use case::{to_internal_case, to_wire_case};
pub use codec::{decode, encode, from_json, to_json};
pub use error::DecodeError;
pub use schema::{
    build_method_schema, get_properties_schema, object_schema, object_schema_one_of,
    one_of_schema, primitive_schema, property_schema, set_properties_schema, MethodKind,
};
