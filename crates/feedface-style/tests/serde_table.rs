//! JSON shape of the style table handed to JavaScript engines.
#![cfg(feature = "serde")]

use feedface_style::{Category, Tag, solarized_dark};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[test]
fn chrome_serializes_as_selector_map() {
    let value = serde_json::to_value(&solarized_dark().chrome).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), solarized_dark().chrome.rules.len());
    assert_eq!(
        object["&"],
        json!({ "color": "#93a1a1", "background-color": "#002b36" })
    );
    assert_eq!(
        object[".cm-content, .cm-gutter"],
        json!({ "min-height": "75vh" })
    );
}

#[test]
fn highlight_rules_serialize_tags_by_name() {
    let value = serde_json::to_value(&solarized_dark().highlight).unwrap();
    let rules = value.as_array().unwrap();
    let function_rule = rules
        .iter()
        .find(|rule| rule["tag"] == json!(["function(variableName)"]))
        .unwrap();
    assert_eq!(function_rule["color"], Value::from("#268bd2"));

    let invalid_rule = rules
        .iter()
        .find(|rule| rule["tag"] == json!(["invalid"]))
        .unwrap();
    assert_eq!(invalid_rule["border-bottom"], Value::from("1px dotted #dc322f"));
}

#[test]
fn tag_serializes_to_display_form() {
    let tag = Tag::new(Category::String).special();
    assert_eq!(serde_json::to_value(tag).unwrap(), json!("special(string)"));
}
