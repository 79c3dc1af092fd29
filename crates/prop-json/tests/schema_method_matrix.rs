use prop_json::schema::{
    build_method_schema, get_properties_schema, get_properties_schema_json, object_schema_one_of,
    property_schema, set_properties_schema, MethodKind,
};
use prop_json_property_map::{Bounds, Property, PropertyMap, PropertyValue, ValueKind};
use serde_json::{json, Value};

fn sphere() -> PropertyMap {
    PropertyMap::new()
        .with(
            Property::new("radius", "Radius", 1.0)
                .with_bounds(Bounds::Float { min: 0.0, max: 100.0 })
                .unwrap(),
        )
        .unwrap()
        .with(Property::new("center", "Center", [0.0, 0.0, 0.0]))
        .unwrap()
}

fn cylinder() -> PropertyMap {
    PropertyMap::new()
        .with(Property::new("capHeight", "Cap height", 0.5))
        .unwrap()
        .with(
            Property::new("segmentCount", "Segments", 16)
                .with_bounds(Bounds::Int { min: 3, max: 256 })
                .unwrap(),
        )
        .unwrap()
        .with(Property::new("openEnded", "Open ended", false))
        .unwrap()
}

fn objs() -> Vec<(String, PropertyMap)> {
    vec![("sphere".into(), sphere()), ("cylinder".into(), cylinder())]
}

fn keys(value: &Value) -> Vec<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

#[test]
fn every_kind_maps_to_its_json_type() {
    for kind in ValueKind::ALL {
        let prop = Property::new("value", "Value", PropertyValue::zero(kind));
        let schema = property_schema(&prop);
        assert_eq!(schema["type"], kind.shape().json_type(), "{kind}");
        assert_eq!(schema["title"], "Value");
        match kind.arity() {
            Some(arity) => {
                assert_eq!(schema["minItems"], json!(arity), "{kind}");
                assert_eq!(schema["maxItems"], json!(arity), "{kind}");
                let item_type = match kind.element().unwrap() {
                    prop_json_property_map::ElementType::Float => "number",
                    prop_json_property_map::ElementType::Int32 => "integer",
                };
                assert_eq!(schema["items"]["type"], item_type, "{kind}");
            }
            None => assert!(schema.get("items").is_none(), "{kind}"),
        }
    }
}

#[test]
fn declared_bounds_override_defaults() {
    let int = Property::new("maxDepth", "Max depth", 4)
        .with_bounds(Bounds::Int { min: -2, max: 9 })
        .unwrap();
    let schema = property_schema(&int);
    assert_eq!(schema["minimum"], -2);
    assert_eq!(schema["maximum"], 9);

    let float = Property::new("epsilon", "Epsilon", 0.001)
        .with_bounds(Bounds::Float { min: 0.0, max: 0.5 })
        .unwrap();
    let schema = property_schema(&float);
    assert_eq!(schema["minimum"], 0.0);
    assert_eq!(schema["maximum"], 0.5);
}

#[test]
fn unbounded_int_keeps_int32_range() {
    let schema = property_schema(&Property::new("seed", "Seed", 0));
    assert_eq!(schema["minimum"], json!(i32::MIN));
    assert_eq!(schema["maximum"], json!(i32::MAX));
}

#[test]
fn query_method_lists_alternatives_in_order() {
    let schema = get_properties_schema(
        "get-geometry-params",
        "Get the params of the current geometry",
        &objs(),
    );
    assert_eq!(schema["title"], "get-geometry-params");
    assert_eq!(schema["description"], "Get the params of the current geometry");
    assert_eq!(schema["type"], "method");
    assert_eq!(schema["params"], json!([]));

    let one_of = schema["returns"]["oneOf"].as_array().unwrap();
    assert_eq!(one_of.len(), 2);
    assert_eq!(one_of[0]["title"], "sphere");
    assert_eq!(one_of[1]["title"], "cylinder");
    assert_eq!(keys(&one_of[0]["properties"]), vec!["radius", "center"]);
    assert_eq!(
        keys(&one_of[1]["properties"]),
        vec!["cap_height", "segment_count", "open_ended"]
    );
    assert_eq!(one_of[1]["properties"]["segment_count"]["minimum"], 3);
}

#[test]
fn mutation_method_wraps_alternatives_in_params() {
    let schema = set_properties_schema("set-geometry-params", "Set the params", &objs());
    assert_eq!(schema["returns"], json!({"type": "boolean"}));
    let params = schema["params"].as_array().unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(keys(&params[0]), vec!["oneOf"]);
    assert_eq!(params[0]["oneOf"].as_array().unwrap().len(), 2);
    assert_eq!(params[0]["oneOf"][0]["properties"]["radius"]["maximum"], 100.0);
}

#[test]
fn method_kind_selects_shape() {
    let query = build_method_schema("t", "d", &objs(), MethodKind::Query);
    let mutation = build_method_schema("t", "d", &objs(), MethodKind::Mutation);
    assert_eq!(query["returns"]["oneOf"], mutation["params"][0]["oneOf"]);
}

#[test]
fn bare_schema_has_no_method_framing() {
    let schema = object_schema_one_of("geometry", &objs());
    assert_eq!(keys(&schema), vec!["type", "title", "oneOf"]);
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["title"], "geometry");
    assert_eq!(schema["oneOf"][1]["properties"]["open_ended"]["type"], "boolean");
}

#[test]
fn json_text_matches_document() {
    let objs = vec![("sphere", sphere())];
    let text = get_properties_schema_json("get-sphere", "Sphere", &objs);
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, get_properties_schema("get-sphere", "Sphere", &objs));
    assert!(text.starts_with(r#"{"title":"get-sphere","description":"Sphere","type":"method""#));
}
