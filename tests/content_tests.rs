mod common;

use common::fixtures::*;
use common::TestResult;
use placard::{Content, Dimension, ElementId, ElementType, Position, SchemaValidationError};
use serde_json::json;

#[test]
fn test_builtin_content() {
    let _ = env_logger::builder().is_test(true).try_init();

    let content = Content::builtin();
    assert_eq!(content.len(), 1);

    let backdrop = &content[0];
    assert_eq!(backdrop.element_id.as_str(), "678451367");
    assert_eq!(backdrop.element_name, "Element 1");
    assert_eq!(backdrop.element_type, ElementType::Div);
    assert_eq!(backdrop.position, Position::Fixed);
    assert_eq!(backdrop.z_index, 1);
    assert_eq!(backdrop.top(), Dimension::px(0.0));
    assert_eq!(backdrop.left(), Dimension::px(0.0));
    assert_eq!(backdrop.width(), Dimension::percent(100.0));
    assert_eq!(backdrop.height(), Dimension::percent(100.0));
    assert_eq!(backdrop.background_color.as_deref(), Some("#000"));
    assert!(backdrop.inner_text.is_none());
    assert!(backdrop.background_image.is_none());
    assert!(backdrop.opacity.is_none());
}

#[test]
fn test_builtin_wire_form() -> TestResult {
    let serialized = serde_json::to_value(Content::builtin())?;
    assert_eq!(
        serialized,
        json!([{
            "elementId": "678451367",
            "elementName": "Element 1",
            "elementType": "div",
            "position": "fixed",
            "zIndex": 1,
            "top": "0px",
            "left": "0px",
            "width": "100%",
            "height": "100%",
            "backgroundColor": "#000"
        }])
    );
    Ok(())
}

#[test]
fn test_from_json_str() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let json = serde_json::to_string(&json!([minimal_element(), full_element()]))?;
    let content = Content::from_json_str(&json)?;

    assert_eq!(content.len(), 2);
    // Order is preserved.
    assert_eq!(content[0].element_id.as_str(), "1");
    assert_eq!(content[1].element_id.as_str(), "hero-banner");

    let banner = content.get(&ElementId::new("hero-banner")).unwrap();
    assert_eq!(banner.inner_text.as_deref(), Some("Welcome"));
    Ok(())
}

#[test]
fn test_from_json_str_rejects_malformed_element() {
    let json = serde_json::to_string(&json!([
        minimal_element(),
        element_with("top", json!("10"))
    ]))
    .unwrap();
    let err = Content::from_json_str(&json).unwrap_err();
    assert!(matches!(err, SchemaValidationError::Json(_)));
}

#[test]
fn test_duplicate_ids_rejected_on_load() {
    let json = serde_json::to_string(&json!([minimal_element(), minimal_element()])).unwrap();
    let err = Content::from_json_str(&json).unwrap_err();
    assert!(matches!(
        err,
        SchemaValidationError::DuplicateElementId(ref id) if id.as_str() == "1"
    ));
}

#[test]
fn test_from_json_value() -> TestResult {
    let content = Content::from_json_value(json!([full_element()]))?;
    assert_eq!(content.len(), 1);
    assert!(!content.is_empty());
    Ok(())
}

#[test]
fn test_iteration() -> TestResult {
    let content = Content::from_json_value(json!([minimal_element(), full_element()]))?;

    let names: Vec<&str> = content.iter().map(|e| e.element_name.as_str()).collect();
    assert_eq!(names, ["A", "Hero banner"]);

    let mut count = 0;
    for element in &content {
        assert!(!element.element_id.as_str().is_empty());
        count += 1;
    }
    assert_eq!(count, content.elements().len());
    Ok(())
}
