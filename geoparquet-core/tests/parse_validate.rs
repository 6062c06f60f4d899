use geoparquet_core::{
    parse_bbox_str, render_bbox, validate_bbox, Bbox, DocumentFormat, Extensions, ParseError,
    Validate,
};

fn world_json() -> &'static str {
    r#"
{
  "xmin": ["-180.0"],
  "xmax": ["180.0"],
  "ymin": ["-90.0"],
  "ymax": ["90.0"]
}
"#
}

#[test]
fn parse_json_and_validate_ok() {
    let parsed = parse_bbox_str(world_json(), DocumentFormat::Json).unwrap();
    validate_bbox(&parsed.bbox).unwrap();
    assert!(parsed.bbox.zmin.is_none());
    assert!(parsed.bbox.zmax.is_none());
}

#[test]
fn parse_yaml_and_validate_ok() {
    let yaml = r#"
xmin: ["0", "10"]
xmax: ["5", "20"]
ymin: ["0", "10"]
ymax: ["5", "20"]
zmin: ["-1", "-1"]
zmax: ["1", "1"]
"#;
    let parsed = parse_bbox_str(yaml, DocumentFormat::Yaml).unwrap();
    parsed.bbox.validate().unwrap();
    assert_eq!(parsed.bbox.zmax, Some(vec!["1".to_string(), "1".to_string()]));
}

#[test]
fn unknown_fields_are_captured() {
    let parsed = parse_bbox_str(r#"{"xmax": ["1"], "foo": "bar"}"#, DocumentFormat::Json).unwrap();
    assert_eq!(parsed.bbox.xmax, Some(vec!["1".to_string()]));

    let mut expected = Extensions::new();
    expected.insert("foo".to_string(), serde_json::json!("bar"));
    assert_eq!(parsed.bbox.additional_properties, expected);
}

#[test]
fn empty_object_leaves_everything_unset() {
    let parsed = parse_bbox_str("{}", DocumentFormat::Json).unwrap();
    assert_eq!(parsed.bbox, Bbox::default());
    assert!(parsed.bbox.additional_properties.is_empty());
}

#[test]
fn absent_and_empty_arrays_stay_distinct() {
    let parsed = parse_bbox_str(r#"{"xmin": []}"#, DocumentFormat::Json).unwrap();
    assert_eq!(parsed.bbox.xmin, Some(vec![]));
    assert!(parsed.bbox.xmax.is_none());

    let out: serde_json::Value = serde_json::to_value(&parsed.bbox).unwrap();
    assert_eq!(out, serde_json::json!({"xmin": []}));
}

#[test]
fn null_declared_field_reads_as_unset() {
    let parsed = parse_bbox_str(r#"{"ymax": null}"#, DocumentFormat::Json).unwrap();
    assert!(parsed.bbox.ymax.is_none());
    assert!(parsed.bbox.additional_properties.is_empty());
}

#[test]
fn extensions_are_written_as_siblings() {
    let mut bbox = Bbox {
        zmin: Some(vec!["0".into()]),
        zmax: Some(vec!["100".into()]),
        ..Bbox::default()
    };
    bbox.additional_properties
        .insert("covering".to_string(), serde_json::json!({"column": "bbox"}));

    let out = serde_json::to_value(&bbox).unwrap();
    assert_eq!(
        out,
        serde_json::json!({
            "zmin": ["0"],
            "zmax": ["100"],
            "covering": {"column": "bbox"}
        })
    );
}

#[test]
fn json_round_trip_preserves_everything() {
    let mut bbox = Bbox {
        xmax: Some(vec!["3.5".into(), "7".into()]),
        ymin: Some(vec![]),
        zmax: Some(vec!["1e3".into()]),
        ..Bbox::default()
    };
    bbox.additional_properties
        .insert("crs".to_string(), serde_json::json!(null));
    bbox.additional_properties
        .insert("count".to_string(), serde_json::json!(42));
    bbox.additional_properties
        .insert("tags".to_string(), serde_json::json!(["a", true, 1.5]));

    let text = render_bbox(&bbox, DocumentFormat::Json).unwrap();
    let back = parse_bbox_str(&text, DocumentFormat::Json).unwrap();
    assert_eq!(back.bbox, bbox);
}

#[test]
fn yaml_round_trip_preserves_everything() {
    let mut bbox = Bbox {
        xmin: Some(vec!["-1".into()]),
        xmax: Some(vec!["1".into()]),
        ..Bbox::default()
    };
    bbox.additional_properties
        .insert("note".to_string(), serde_json::json!("kept"));

    let text = render_bbox(&bbox, DocumentFormat::Yaml).unwrap();
    let back = parse_bbox_str(&text, DocumentFormat::Yaml).unwrap();
    assert_eq!(back.bbox, bbox);
}

#[test]
fn scalar_for_declared_field_is_rejected() {
    let err = parse_bbox_str(r#"{"xmax": "1"}"#, DocumentFormat::Json).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn numbers_inside_declared_array_are_rejected() {
    let err = parse_bbox_str(r#"{"xmin": [1, 2]}"#, DocumentFormat::Json).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn object_for_declared_field_is_rejected() {
    let err = parse_bbox_str("zmin:\n  a: b\n", DocumentFormat::Yaml).unwrap_err();
    assert!(matches!(err, ParseError::YamlShape(_)));
    assert!(format!("{err}").contains("YAML"));
}

#[test]
fn auto_rejects_numbers_in_json_bounds() {
    let err = parse_bbox_str(r#"{"xmin": [1, 2], "xmax": [3, 4]}"#, DocumentFormat::Auto)
        .unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn auto_rejects_scalar_json_bound() {
    let err = parse_bbox_str(r#"{"zmax": "9"}"#, DocumentFormat::Auto).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn auto_rejects_numbers_in_yaml_bounds() {
    let err = parse_bbox_str("xmin: [1]\nxmax: [2]\n", DocumentFormat::Auto).unwrap_err();
    assert!(matches!(err, ParseError::YamlShape(_)));
}

#[test]
fn auto_rejects_numbers_in_flow_yaml_bounds() {
    // Not JSON (unquoted keys), and the bounds are YAML integers.
    assert!(parse_bbox_str("{xmin: [1], xmax: [2]}", DocumentFormat::Auto).is_err());
}

#[test]
fn yaml_rejects_unquoted_numeric_bounds() {
    let err = parse_bbox_str("xmin: [1]\n", DocumentFormat::Yaml).unwrap_err();
    assert!(matches!(err, ParseError::YamlShape(_)));

    let parsed = parse_bbox_str("xmin: ['1']\n", DocumentFormat::Yaml).unwrap();
    assert_eq!(parsed.bbox.xmin, Some(vec!["1".to_string()]));
}

#[test]
fn extension_shadowing_a_bound_is_reported() {
    let mut bbox = Bbox::default();
    bbox.additional_properties
        .insert("ymin".to_string(), serde_json::json!(0));
    let err = validate_bbox(&bbox).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].path, "$.ymin");
    assert_eq!(format!("{err}"), "bbox has 1 invalid bound(s)");
}

#[test]
fn non_numeric_bounds_are_reported() {
    let bbox = Bbox {
        xmin: Some(vec!["west".into()]),
        xmax: Some(vec!["NaN".into()]),
        ..Bbox::default()
    };
    let err = validate_bbox(&bbox).unwrap_err();
    assert!(err.violations.iter().any(|v| v.path == "$.xmin[0]"));
    assert!(err.violations.iter().any(|v| v.path == "$.xmax[0]"));
}

#[test]
fn unpaired_axis_is_reported() {
    let bbox = Bbox {
        zmin: Some(vec!["0".into()]),
        ..Bbox::default()
    };
    let err = validate_bbox(&bbox).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].path, "$.zmax");
}

#[test]
fn inverted_bounds_are_reported() {
    let bbox = Bbox {
        ymin: Some(vec!["0".into(), "50".into()]),
        ymax: Some(vec!["10".into(), "40".into()]),
        ..Bbox::default()
    };
    let err = validate_bbox(&bbox).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].path, "$.ymin[1]");
    assert!(err.violations[0].message.contains("greater than"));
}

#[test]
fn mismatched_lengths_are_reported() {
    let bbox = Bbox {
        xmin: Some(vec!["0".into(), "1".into()]),
        xmax: Some(vec!["2".into()]),
        ..Bbox::default()
    };
    let err = validate_bbox(&bbox).unwrap_err();
    assert!(err
        .violations
        .iter()
        .any(|v| v.path == "$.xmax" && v.message.contains("entries")));
}

#[test]
fn x_and_y_must_describe_the_same_extents() {
    let bbox = Bbox {
        xmin: Some(vec!["0".into(), "1".into()]),
        xmax: Some(vec!["2".into(), "3".into()]),
        ymin: Some(vec!["0".into()]),
        ymax: Some(vec!["2".into()]),
        ..Bbox::default()
    };
    let err = validate_bbox(&bbox).unwrap_err();
    assert!(err.violations.iter().any(|v| v.path == "$.ymin"));
}

#[test]
fn empty_bbox_is_valid() {
    validate_bbox(&Bbox::default()).unwrap();
}
