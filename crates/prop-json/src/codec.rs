//! Wire JSON encoding and decoding of property collections.
//!
//! The wire form is a flat object keyed by wire-cased property names.
//! Scalars are JSON numbers, strings and booleans; vectors are arrays of
//! numbers in index order.
//!
//! # Example
//!
//! ```
//! use prop_json::codec::{decode, encode};
//! use prop_json_property_map::{Property, PropertyCollection, PropertyMap, PropertyValue};
//! use serde_json::json;
//!
//! let mut map = PropertyMap::new()
//!     .with(Property::new("aoDistance", "AO distance", 1.0)).unwrap();
//! assert_eq!(serde_json::Value::Object(encode(&map)), json!({"ao_distance": 1.0}));
//!
//! let payload = json!({"ao_distance": 2.5});
//! decode(&mut map, payload.as_object().unwrap()).unwrap();
//! assert_eq!(map.property_value("aoDistance"), Some(&PropertyValue::Float(2.5)));
//! ```

use prop_json_property_map::{PropertyCollection, PropertyValue, ValueKind};
use serde_json::{json, Map, Value};
use tracing::{debug, trace};

use crate::case::{to_internal_case, to_wire_case};
use crate::error::DecodeError;

fn value_to_json(value: &PropertyValue) -> Value {
    match value {
        PropertyValue::Float(v) => json!(v),
        PropertyValue::Int(v) => json!(v),
        PropertyValue::String(v) => json!(v),
        PropertyValue::Bool(v) => json!(v),
        PropertyValue::Vec2f(v) => json!(v),
        PropertyValue::Vec2i(v) => json!(v),
        PropertyValue::Vec3f(v) => json!(v),
        PropertyValue::Vec3i(v) => json!(v),
        PropertyValue::Vec4f(v) => json!(v),
    }
}

/// Encodes every property, in collection order.
pub fn encode<C: PropertyCollection>(collection: &C) -> Map<String, Value> {
    collection
        .properties()
        .map(|prop| (to_wire_case(&prop.name), value_to_json(prop.value())))
        .collect()
}

/// [`encode`] as JSON text.
pub fn to_json<C: PropertyCollection>(collection: &C) -> String {
    Value::Object(encode(collection)).to_string()
}

fn read_float(json: &Value) -> Option<f64> {
    json.as_f64()
}

fn read_int(json: &Value) -> Option<i32> {
    json.as_i64().and_then(|v| i32::try_from(v).ok())
}

/// Overwrites the leading elements of `current` with the elements of
/// `json`. Every element is checked, but only the first `N` are kept;
/// missing ones keep their value.
fn read_vector<T: Copy, const N: usize>(
    name: &str,
    kind: ValueKind,
    json: &Value,
    mut current: [T; N],
    read: fn(&Value) -> Option<T>,
) -> Result<[T; N], DecodeError> {
    let items = json.as_array().ok_or_else(|| DecodeError::TypeMismatch {
        name: name.to_string(),
        expected: kind,
    })?;
    for (index, item) in items.iter().enumerate() {
        let value = read(item).ok_or_else(|| DecodeError::InvalidElement {
            name: name.to_string(),
            index,
        })?;
        if let Some(slot) = current.get_mut(index) {
            *slot = value;
        }
    }
    Ok(current)
}

/// Converts a wire value to a value of `current`'s kind. Vector elements
/// not present on the wire are taken from `current`.
fn value_from_json(
    name: &str,
    current: &PropertyValue,
    json: &Value,
) -> Result<PropertyValue, DecodeError> {
    let kind = current.kind();
    let mismatch = || DecodeError::TypeMismatch {
        name: name.to_string(),
        expected: kind,
    };
    Ok(match current {
        PropertyValue::Float(_) => PropertyValue::Float(read_float(json).ok_or_else(mismatch)?),
        PropertyValue::Int(_) => PropertyValue::Int(read_int(json).ok_or_else(mismatch)?),
        PropertyValue::String(_) => {
            PropertyValue::String(json.as_str().ok_or_else(mismatch)?.to_string())
        }
        PropertyValue::Bool(_) => PropertyValue::Bool(json.as_bool().ok_or_else(mismatch)?),
        PropertyValue::Vec2f(v) => PropertyValue::Vec2f(read_vector(name, kind, json, *v, read_float)?),
        PropertyValue::Vec2i(v) => PropertyValue::Vec2i(read_vector(name, kind, json, *v, read_int)?),
        PropertyValue::Vec3f(v) => PropertyValue::Vec3f(read_vector(name, kind, json, *v, read_float)?),
        PropertyValue::Vec3i(v) => PropertyValue::Vec3i(read_vector(name, kind, json, *v, read_int)?),
        PropertyValue::Vec4f(v) => PropertyValue::Vec4f(read_vector(name, kind, json, *v, read_float)?),
    })
}

/// Applies a wire object to `collection` in place, member by member in
/// payload order.
///
/// # Errors
///
/// Stops at the first member whose name is unknown or whose value does not
/// fit the property's kind. Members applied before the failure are not
/// rolled back.
pub fn decode<C: PropertyCollection>(
    collection: &mut C,
    object: &Map<String, Value>,
) -> Result<(), DecodeError> {
    for (key, json) in object {
        let name = to_internal_case(key);
        let Some(current) = collection.property_value(&name) else {
            debug!(property = %name, wire_key = %key, "rejecting unknown property");
            return Err(DecodeError::UnknownProperty(name));
        };
        let value = value_from_json(&name, current, json).inspect_err(|err| {
            debug!(property = %name, error = %err, "rejecting property value");
        })?;
        collection.update_property(&name, value)?;
        trace!(property = %name, "applied update");
    }
    Ok(())
}

/// Parses `json` and applies it with [`decode`].
///
/// # Errors
///
/// Besides the [`decode`] errors, fails with [`DecodeError::InvalidJson`] or
/// [`DecodeError::NotAnObject`] before touching the collection.
pub fn from_json<C: PropertyCollection>(collection: &mut C, json: &str) -> Result<(), DecodeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
    match value {
        Value::Object(object) => decode(collection, &object),
        _ => Err(DecodeError::NotAnObject),
    }
}
