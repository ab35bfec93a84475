use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = EditorConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, EditorConfig::default());
    assert_eq!(cfg.tex_width, 512);
    assert_eq!(cfg.tex_height, 128);
    assert_eq!(cfg.key_name, "key");
    assert_eq!(cfg.seed_keys.len(), 2);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let json = r#"{
        "tex_width": 64,
        "key_name": "atmosphereCurve",
        "curve": [255, 0, 0],
        "seed_keys": [{ "time": 1, "value": 2, "tangent_in": 0, "tangent_out": 0 }]
    }"#;
    let cfg = EditorConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.tex_width, 64);
    assert_eq!(cfg.tex_height, 128);
    assert_eq!(cfg.key_name, "atmosphereCurve");
    assert_eq!(cfg.curve, Rgb8::new(255, 0, 0));
    assert_eq!(cfg.seed_keys, vec![Keyframe::new(1.0, 2.0, 0.0, 0.0)]);
    assert_eq!(cfg.raster_style().curve, Rgb8::new(255, 0, 0));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = EditorConfig::from_reader(r#"{ "texWidth": 5 }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{ "tex_width": 1 }"#,
        r#"{ "tex_height": 0 }"#,
        r#"{ "key_name": "" }"#,
        r#"{ "key_name": "two words" }"#,
    ] {
        assert!(EditorConfig::from_reader(json.as_bytes()).is_err(), "{json}");
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = EditorConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, CurveError::Io(_)));
}
