//! JSON Schema and JSON-RPC method descriptions for property collections.
//!
//! Property names are always emitted in wire case. The order of generated
//! `properties` follows the collection order, and the order of `oneOf`
//! alternatives follows the order of the named collections passed in.
//!
//! # Example
//!
//! ```
//! use prop_json::schema::get_properties_schema;
//! use prop_json_property_map::{Property, PropertyMap};
//!
//! let sphere = PropertyMap::new().with(Property::new("radius", "Radius", 1.0)).unwrap();
//! let cylinder = PropertyMap::new().with(Property::new("capHeight", "Cap height", 0.5)).unwrap();
//!
//! let schema = get_properties_schema(
//!     "get-geometry-params",
//!     "Get the params of the current geometry",
//!     &[("sphere", sphere), ("cylinder", cylinder)],
//! );
//! assert_eq!(schema["returns"]["oneOf"][1]["properties"]["cap_height"]["type"], "number");
//! ```

use prop_json_property_map::{
    Bounds, ElementType, Property, PropertyCollection, ValueKind, WireShape,
};
use serde_json::{json, Map, Value};

use crate::case::to_wire_case;

/// Shape of a JSON-RPC method description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Read method: no params, returns one of the object schemas.
    Query,
    /// Write method: one param that is one of the object schemas, returns a boolean.
    Mutation,
}

fn element_schema(element: ElementType) -> Map<String, Value> {
    match element {
        ElementType::Float => primitive_schema(ValueKind::Float),
        ElementType::Int32 => primitive_schema(ValueKind::Int),
    }
}

/// Default schema of a kind, before any property metadata is attached.
///
/// `Int` carries the full `int32` range as `minimum`/`maximum`; vectors are
/// fixed-length arrays of their element schema.
pub fn primitive_schema(kind: ValueKind) -> Map<String, Value> {
    let shape = kind.shape();
    let mut schema = Map::new();
    schema.insert("type".into(), json!(shape.json_type()));
    match shape {
        WireShape::Integer => {
            schema.insert("minimum".into(), json!(i32::MIN));
            schema.insert("maximum".into(), json!(i32::MAX));
        }
        WireShape::Array { element, arity } => {
            schema.insert("items".into(), Value::Object(element_schema(element)));
            schema.insert("minItems".into(), json!(arity));
            schema.insert("maxItems".into(), json!(arity));
        }
        WireShape::Number | WireShape::String | WireShape::Boolean => {}
    }
    schema
}

/// Schema of one property: the kind's schema plus `title`, plus
/// `minimum`/`maximum` when the property declares bounds. Declared bounds
/// replace the defaults of [`primitive_schema`].
pub fn property_schema(property: &Property) -> Value {
    let mut schema = primitive_schema(property.kind());
    schema.insert("title".into(), json!(property.title));
    match property.bounds() {
        Some(Bounds::Float { min, max }) => {
            schema.insert("minimum".into(), json!(min));
            schema.insert("maximum".into(), json!(max));
        }
        Some(Bounds::Int { min, max }) => {
            schema.insert("minimum".into(), json!(min));
            schema.insert("maximum".into(), json!(max));
        }
        None => {}
    }
    Value::Object(schema)
}

/// `{"title": name, "type": "object", "properties": {...}}`.
pub fn object_schema<C: PropertyCollection>(name: &str, collection: &C) -> Value {
    let properties: Map<String, Value> = collection
        .properties()
        .map(|prop| (to_wire_case(&prop.name), property_schema(prop)))
        .collect();
    json!({
        "title": name,
        "type": "object",
        "properties": properties,
    })
}

/// One object schema per named collection, in input order.
pub fn one_of_schema<N, C>(objs: &[(N, C)]) -> Vec<Value>
where
    N: AsRef<str>,
    C: PropertyCollection,
{
    objs.iter()
        .map(|(name, collection)| object_schema(name.as_ref(), collection))
        .collect()
}

/// Full JSON-RPC method description.
pub fn build_method_schema<N, C>(
    title: &str,
    description: &str,
    objs: &[(N, C)],
    kind: MethodKind,
) -> Value
where
    N: AsRef<str>,
    C: PropertyCollection,
{
    let one_of = Value::Array(one_of_schema(objs));
    let (returns, params) = match kind {
        MethodKind::Query => (json!({ "oneOf": one_of }), json!([])),
        MethodKind::Mutation => (
            Value::Object(primitive_schema(ValueKind::Bool)),
            json!([{ "oneOf": one_of }]),
        ),
    };
    json!({
        "title": title,
        "description": description,
        "type": "method",
        "returns": returns,
        "params": params,
    })
}

/// Query-shaped method description (`returns.oneOf`, empty `params`).
pub fn get_properties_schema<N, C>(title: &str, description: &str, objs: &[(N, C)]) -> Value
where
    N: AsRef<str>,
    C: PropertyCollection,
{
    build_method_schema(title, description, objs, MethodKind::Query)
}

/// Mutation-shaped method description (`params[0].oneOf`, boolean `returns`).
pub fn set_properties_schema<N, C>(title: &str, description: &str, objs: &[(N, C)]) -> Value
where
    N: AsRef<str>,
    C: PropertyCollection,
{
    build_method_schema(title, description, objs, MethodKind::Mutation)
}

/// Bare `{"type": "object", "title": ..., "oneOf": [...]}` without method framing.
pub fn object_schema_one_of<N, C>(title: &str, objs: &[(N, C)]) -> Value
where
    N: AsRef<str>,
    C: PropertyCollection,
{
    json!({
        "type": "object",
        "title": title,
        "oneOf": one_of_schema(objs),
    })
}

/// [`get_properties_schema`] as JSON text.
pub fn get_properties_schema_json<N, C>(title: &str, description: &str, objs: &[(N, C)]) -> String
where
    N: AsRef<str>,
    C: PropertyCollection,
{
    get_properties_schema(title, description, objs).to_string()
}

/// [`set_properties_schema`] as JSON text.
pub fn set_properties_schema_json<N, C>(title: &str, description: &str, objs: &[(N, C)]) -> String
where
    N: AsRef<str>,
    C: PropertyCollection,
{
    set_properties_schema(title, description, objs).to_string()
}

/// [`object_schema_one_of`] as JSON text.
pub fn object_schema_one_of_json<N, C>(title: &str, objs: &[(N, C)]) -> String
where
    N: AsRef<str>,
    C: PropertyCollection,
{
    object_schema_one_of(title, objs).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prop_json_property_map::PropertyMap;

    #[test]
    fn primitive_shapes() {
        assert_eq!(Value::Object(primitive_schema(ValueKind::Float)), json!({"type": "number"}));
        assert_eq!(
            Value::Object(primitive_schema(ValueKind::Int)),
            json!({"type": "integer", "minimum": -2147483648i64, "maximum": 2147483647})
        );
        assert_eq!(Value::Object(primitive_schema(ValueKind::String)), json!({"type": "string"}));
        assert_eq!(Value::Object(primitive_schema(ValueKind::Bool)), json!({"type": "boolean"}));
        assert_eq!(
            Value::Object(primitive_schema(ValueKind::Vec2f)),
            json!({"type": "array", "items": {"type": "number"}, "minItems": 2, "maxItems": 2})
        );
    }

    #[test]
    fn int_vector_items_carry_int32_range() {
        let schema = primitive_schema(ValueKind::Vec3i);
        assert_eq!(schema["items"]["type"], "integer");
        assert_eq!(schema["items"]["maximum"], json!(i32::MAX));
        assert_eq!(schema["maxItems"], 3);
    }

    #[test]
    fn declared_bounds_replace_defaults_in_place() {
        let prop = Property::new("maxBounces", "Max bounces", 3)
            .with_bounds(Bounds::Int { min: 0, max: 16 })
            .unwrap();
        let schema = property_schema(&prop);
        assert_eq!(schema["minimum"], 0);
        assert_eq!(schema["maximum"], 16);
        let keys: Vec<_> = schema.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["type", "minimum", "maximum", "title"]);
    }

    #[test]
    fn float_bounds_are_appended_after_title() {
        let prop = Property::new("exposure", "Exposure", 1.0)
            .with_bounds(Bounds::Float { min: 0.5, max: 4.0 })
            .unwrap();
        assert_eq!(
            property_schema(&prop),
            json!({"type": "number", "title": "Exposure", "minimum": 0.5, "maximum": 4.0})
        );
    }

    #[test]
    fn unbounded_float_has_no_limits() {
        let schema = property_schema(&Property::new("gamma", "Gamma", 2.2));
        assert!(schema.get("minimum").is_none());
        assert!(schema.get("maximum").is_none());
    }

    #[test]
    fn object_schema_uses_wire_names_in_order() {
        let map = PropertyMap::new()
            .with(Property::new("shadowIntensity", "Shadow intensity", 0.0))
            .unwrap()
            .with(Property::new("enableShadows", "Enable shadows", true))
            .unwrap();
        let schema = object_schema("basic", &map);
        assert_eq!(schema["title"], "basic");
        assert_eq!(schema["type"], "object");
        let keys: Vec<_> = schema["properties"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["shadow_intensity", "enable_shadows"]);
    }

    #[test]
    fn method_document_key_order() {
        let objs: [(&str, PropertyMap); 0] = [];
        let schema = get_properties_schema("t", "d", &objs);
        let keys: Vec<_> = schema.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["title", "description", "type", "returns", "params"]);
        assert_eq!(schema["returns"], json!({"oneOf": []}));
    }
}
