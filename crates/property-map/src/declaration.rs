//! JSON declarations of property collections.
//!
//! A single collection is declared as an array of property declarations:
//!
//! ```json
//! [
//!   {"name": "radius", "title": "Radius", "type": "float", "value": 1, "min": 0, "max": 10},
//!   {"name": "center", "type": "vec3f", "value": [0, 0, 0]}
//! ]
//! ```
//!
//! Several named collections are declared as an object of such arrays; key
//! order is kept.
//!
//! # Example
//!
//! ```
//! use prop_json_property_map::{parse_collections, PropertyCollection, ValueKind};
//!
//! let objs = parse_collections(r#"{
//!     "sphere": [{"name": "radius", "type": "float", "value": 1}],
//!     "cylinder": [{"name": "height", "type": "float"}]
//! }"#).unwrap();
//! assert_eq!(objs[0].0, "sphere");
//! assert_eq!(objs[1].1.property_kind("height"), Some(ValueKind::Float));
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::PropertyError;
use crate::kind::ValueKind;
use crate::map::PropertyMap;
use crate::property::{Bounds, Property};
use crate::value::PropertyValue;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDecl {
    pub name: String,
    /// Defaults to `name`.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    /// Defaults to the zero value of the kind.
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub min: Option<Number>,
    #[serde(default)]
    pub max: Option<Number>,
}

impl TryFrom<PropertyDecl> for Property {
    type Error = PropertyError;

    fn try_from(decl: PropertyDecl) -> Result<Self, Self::Error> {
        let invalid = |reason: String| PropertyError::InvalidDeclaration {
            name: decl.name.clone(),
            reason,
        };

        let kind = ValueKind::from_name(&decl.kind)
            .ok_or_else(|| invalid(format!("unknown type {:?}", decl.kind)))?;
        let value = match &decl.value {
            None => PropertyValue::zero(kind),
            Some(json) => value_from_json(kind, json)
                .ok_or_else(|| invalid(format!("value {json} is not a valid {kind}")))?,
        };
        let bounds = match (&decl.min, &decl.max) {
            (None, None) => None,
            (Some(min), Some(max)) => Some(
                bounds_from_json(kind, min, max)
                    .ok_or_else(|| invalid(format!("bounds [{min}, {max}] do not fit {kind}")))?,
            ),
            _ => return Err(invalid("min and max must be declared together".into())),
        };

        let title = decl.title.clone().unwrap_or_else(|| decl.name.clone());
        let property = Property::new(decl.name, title, value);
        match bounds {
            Some(bounds) => property.with_bounds(bounds),
            None => Ok(property),
        }
    }
}

fn float(json: &Value) -> Option<f64> {
    json.as_f64()
}

fn int(json: &Value) -> Option<i32> {
    json.as_i64().and_then(|v| i32::try_from(v).ok())
}

fn array<T: Copy + Default, const N: usize>(
    json: &Value,
    read: fn(&Value) -> Option<T>,
) -> Option<[T; N]> {
    let items = json.as_array()?;
    if items.len() != N {
        return None;
    }
    let mut out = [T::default(); N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = read(item)?;
    }
    Some(out)
}

fn value_from_json(kind: ValueKind, json: &Value) -> Option<PropertyValue> {
    Some(match kind {
        ValueKind::Float => PropertyValue::Float(float(json)?),
        ValueKind::Int => PropertyValue::Int(int(json)?),
        ValueKind::String => PropertyValue::String(json.as_str()?.to_string()),
        ValueKind::Bool => PropertyValue::Bool(json.as_bool()?),
        ValueKind::Vec2f => PropertyValue::Vec2f(array(json, float)?),
        ValueKind::Vec2i => PropertyValue::Vec2i(array(json, int)?),
        ValueKind::Vec3f => PropertyValue::Vec3f(array(json, float)?),
        ValueKind::Vec3i => PropertyValue::Vec3i(array(json, int)?),
        ValueKind::Vec4f => PropertyValue::Vec4f(array(json, float)?),
    })
}

fn bounds_from_json(kind: ValueKind, min: &Number, max: &Number) -> Option<Bounds> {
    match kind {
        ValueKind::Float => Some(Bounds::Float {
            min: min.as_f64()?,
            max: max.as_f64()?,
        }),
        ValueKind::Int => Some(Bounds::Int {
            min: i32::try_from(min.as_i64()?).ok()?,
            max: i32::try_from(max.as_i64()?).ok()?,
        }),
        _ => None,
    }
}

/// Builds a collection from its declarations, in order.
///
/// # Errors
///
/// Fails on the first invalid or duplicate declaration.
pub fn collection_from_decls(
    decls: impl IntoIterator<Item = PropertyDecl>,
) -> Result<PropertyMap, PropertyError> {
    let mut map = PropertyMap::new();
    for decl in decls {
        map.add(Property::try_from(decl)?)?;
    }
    Ok(map)
}

/// Parses a single collection declared as a JSON array.
pub fn parse_collection(json: &str) -> Result<PropertyMap, PropertyError> {
    let decls: Vec<PropertyDecl> = serde_json::from_str(json)
        .map_err(|e| PropertyError::MalformedDeclaration(e.to_string()))?;
    collection_from_decls(decls)
}

/// Parses named collections declared as a JSON object, keeping key order.
pub fn parse_collections(json: &str) -> Result<Vec<(String, PropertyMap)>, PropertyError> {
    let objs: IndexMap<String, Vec<PropertyDecl>> = serde_json::from_str(json)
        .map_err(|e| PropertyError::MalformedDeclaration(e.to_string()))?;
    objs.into_iter()
        .map(|(name, decls)| Ok((name, collection_from_decls(decls)?)))
        .collect()
}
