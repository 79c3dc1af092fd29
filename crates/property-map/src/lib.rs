//! `prop-json-property-map` — ordered collections of named, typed, bounded
//! properties.
//!
//! A [`PropertyMap`] holds [`Property`] values in insertion order. Each
//! property has a fixed [`ValueKind`] taken from a closed set of scalars and
//! fixed-arity numeric vectors; `Float` and `Int` properties may also carry
//! [`Bounds`].
//!
//! # Example
//!
//! ```
//! use prop_json_property_map::{Bounds, Property, PropertyCollection, PropertyMap, PropertyValue};
//!
//! let mut map = PropertyMap::new();
//! map.add(Property::new("radius", "Radius", 1.0)
//!     .with_bounds(Bounds::Float { min: 0.0, max: 10.0 })
//!     .unwrap())
//!     .unwrap();
//! map.add(Property::new("center", "Center", [0.0, 0.0, 0.0])).unwrap();
//!
//! map.update_property("radius", PropertyValue::Float(2.5)).unwrap();
//! assert_eq!(map.property_value("radius"), Some(&PropertyValue::Float(2.5)));
//! ```

pub mod declaration;
pub mod error;
pub mod kind;
pub mod map;
pub mod property;
pub mod value;

pub use declaration::{collection_from_decls, parse_collection, parse_collections, PropertyDecl};
pub use error::PropertyError;
pub use kind::{ElementType, ValueKind, WireShape};
pub use map::{PropertyCollection, PropertyMap};
pub use property::{Bounds, Property};
pub use value::PropertyValue;
