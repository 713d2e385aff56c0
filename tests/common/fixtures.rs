use serde_json::{json, Value};

/// A minimal valid element record: required fields only.
pub fn minimal_element() -> Value {
    json!({
        "elementId": "1",
        "elementName": "A",
        "elementType": "div",
        "position": "fixed",
        "zIndex": 1,
        "top": "0px",
        "left": "0px",
        "width": "100%",
        "height": "100%"
    })
}

/// The minimal element with one field replaced.
pub fn element_with(field: &str, value: Value) -> Value {
    let mut element = minimal_element();
    element[field] = value;
    element
}

/// The minimal element with one field removed.
pub fn element_without(field: &str) -> Value {
    let mut element = minimal_element();
    element
        .as_object_mut()
        .expect("fixture is an object")
        .remove(field);
    element
}

/// An element record exercising every optional field.
pub fn full_element() -> Value {
    json!({
        "elementId": "hero-banner",
        "elementName": "Hero banner",
        "elementType": "span",
        "position": "fixed",
        "zIndex": 10,
        "top": "1.5rem",
        "left": "0px",
        "width": "100%",
        "height": "320px",
        "innerText": "Welcome",
        "backgroundColor": "#202833",
        "backgroundImage": "url('banner.png')",
        "backgroundSize": "cover",
        "backgroundPosition": "center top",
        "backgroundRepeat": "no-repeat",
        "color": "#fff",
        "fontSize": "24px",
        "fontFamily": "Inter, sans-serif",
        "fontWeight": "600",
        "textAlign": "center",
        "opacity": 0.5
    })
}
