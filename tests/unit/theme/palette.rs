use super::*;

#[test]
fn resolves_known_names_case_insensitively() {
    assert_eq!(Theme::from_name(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_name(Some(" Dark ")), Theme::Dark);
    assert_eq!(Theme::from_name(Some("LIGHT")), Theme::Light);
}

#[test]
fn missing_or_unknown_theme_falls_back_to_light() {
    assert_eq!(Theme::from_name(None), Theme::Light);
    assert_eq!(Theme::from_name(Some("")), Theme::Light);
    assert_eq!(Theme::from_name(Some("solarized")), Theme::Light);
}

#[test]
fn code_palettes_mirror_surface_tokens() {
    let light = Theme::Light.code_palette();
    let dark = Theme::Dark.code_palette();
    assert_eq!(light.bg.to_hex(), "#ededed");
    assert_eq!(dark.bg.to_hex(), "#27272a");
    assert_eq!(light.text, dark.bg);
    assert_eq!(
        Theme::Dark.diagram_palette().primary,
        Theme::Light.diagram_palette().primary
    );
}
