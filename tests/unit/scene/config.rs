use super::*;

#[test]
fn kind_tag_selects_variant() {
    let cfg = SceneConfig::from_json_str(r#"{ "kind": "code_block", "code": "hi" }"#).unwrap();
    assert_eq!(cfg.kind(), "code_block");
    let cfg = SceneConfig::from_json_str(r#"{ "kind": "stage_diagram", "stages": ["a"] }"#).unwrap();
    assert_eq!(cfg.kind(), "stage_diagram");
    let cfg = SceneConfig::from_json_str(r#"{ "kind": "spotlight", "steps": ["a"] }"#).unwrap();
    assert_eq!(cfg.kind(), "spotlight");
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = SceneConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, TypewaveError::Config(_)));
    let err = SceneConfig::from_json_str(r#"{ "kind": "teapot" }"#).unwrap_err();
    assert!(matches!(err, TypewaveError::Config(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = SceneConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open scene JSON"));
}

#[test]
fn validate_rejects_zero_fps() {
    let cfg = SceneConfig::from_json_str(r#"{ "kind": "code_block", "code": "", "fps": 0 }"#)
        .unwrap();
    assert!(matches!(cfg.validate(), Err(TypewaveError::Validation(_))));
}

#[test]
fn validate_rejects_empty_stages_and_bad_dwell() {
    let empty = SceneConfig::StageDiagram(StageDiagramConfig::new(Vec::new()));
    assert!(empty.validate().is_err());

    let mut cfg = StageDiagramConfig::new(vec!["a".to_owned()]);
    cfg.dwell = 1.5;
    assert!(SceneConfig::StageDiagram(cfg.clone()).validate().is_err());
    cfg.dwell = 1.0;
    assert!(SceneConfig::StageDiagram(cfg).validate().is_ok());
}

#[test]
fn validate_rejects_empty_spotlight() {
    assert!(SceneConfig::Spotlight(SpotlightConfig::new(Vec::new())).validate().is_err());
}

#[test]
fn decorative_inputs_do_not_fail_validation() {
    let mut cfg = CodeBlockConfig::new("");
    cfg.typewriter_speed = -4.0;
    cfg.typewriter_delay = -1.0;
    cfg.theme = Some("sepia".to_owned());
    let scene = SceneConfig::CodeBlock(cfg);
    assert!(scene.validate().is_ok());
    assert_eq!(scene.theme(), Theme::Light);
}

#[test]
fn round_trips_through_json_with_tag() {
    let scene = SceneConfig::CodeBlock(CodeBlockConfig::new("x"));
    let json = serde_json::to_string(&scene).unwrap();
    assert!(json.contains(r#""kind":"code_block""#));
    assert_eq!(SceneConfig::from_json_str(&json).unwrap(), scene);
}
