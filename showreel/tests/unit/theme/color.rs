use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#888")).unwrap();
    assert_eq!(c.to_rgba8(), [0x88, 0x88, 0x88, 255]);

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_css_functions_and_keywords() {
    let c = Color::parse("rgba(255, 180, 100, 0.1)").unwrap();
    assert_eq!(c, Color::rgba8(255, 180, 100, 0.1));

    let c = Color::parse("rgb(39,202,63)").unwrap();
    assert_eq!(c.to_hex(), "#27ca3f");

    assert_eq!(Color::parse("transparent").unwrap(), Color::TRANSPARENT);
    assert_eq!(Color::parse(" White ").unwrap(), Color::WHITE);
}

#[test]
fn css_function_names_ignore_case() {
    assert_eq!(Color::parse("RGB(1,2,3)").unwrap(), Color::parse("rgb(1,2,3)").unwrap());
    assert_eq!(
        Color::parse("Rgba(255, 180, 100, 0.1)").unwrap(),
        Color::rgba8(255, 180, 100, 0.1)
    );
}

#[test]
fn parses_rgba_object_array_and_hsla() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    let c: Color = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!((c.r - 1.0).abs() < 1e-9);
    assert!(c.g.abs() < 1e-9);
}

#[test]
fn rejects_malformed_colors() {
    assert!(Color::parse("#12345").is_err());
    assert!(Color::parse("#gggggg").is_err());
    assert!(Color::parse("#+f+f+f").is_err());
    assert!(Color::parse("#+ff+ff+ff").is_err());
    assert!(Color::parse("#-1").is_err());
    assert!(Color::parse("rgba(1, 2)").is_err());
    assert!(Color::parse("rgb(1, 2, 3").is_err());
    assert!(serde_json::from_value::<Color>(json!([1.0, 2.0])).is_err());
}

#[test]
fn serializes_as_hex_string() {
    assert_eq!(serde_json::to_value(Color::hex(0xffbe76)).unwrap(), json!("#ffbe76"));
    assert_eq!(
        serde_json::to_value(Color::WHITE.with_alpha(0.5)).unwrap(),
        json!("#ffffff80")
    );
}
