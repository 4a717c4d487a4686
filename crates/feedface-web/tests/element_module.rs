//! The shipped element module must agree with what the wasm side imports
//! and with the JSON it emits.
#![cfg(not(target_arch = "wasm32"))]

use feedface_style::solarized_dark;
use feedface_web::payload::highlight_json;
use feedface_widget::OBSERVED_ATTRIBUTES;
use serde_json::Value;

const MODULE: &str = include_str!("../js/feed-face.js");

#[test]
fn registers_the_custom_element() {
    assert!(MODULE.contains(r#"customElements.define("feed-face", FeedFaceElement)"#));
    for callback in [
        "connectedCallback",
        "disconnectedCallback",
        "attributeChangedCallback",
        "observedAttributes",
    ] {
        assert!(
            MODULE.contains(&format!("backing.{callback}"))
                || MODULE.contains(&format!("Backing.{callback}")),
            "{callback} not forwarded"
        );
    }
}

#[test]
fn language_property_reflects_onto_attribute() {
    assert!(OBSERVED_ATTRIBUTES.contains(&"language"));
    assert!(MODULE.contains(r#"this.setAttribute("language", String(selector))"#));
    assert!(MODULE.contains(r#"this.removeAttribute("language")"#));
}

#[test]
fn bridge_defines_every_imported_function() {
    for name in [
        "createSession",
        "basicSetup",
        "indentWithTab",
        "lineWrapping",
        "theme",
        "syntaxHighlighting",
        "language",
        "getText",
        "replaceText",
        "destroy",
    ] {
        assert!(
            MODULE.contains(&format!("{name}(")) || MODULE.contains(&format!("{name}:")),
            "bridge lacks {name}"
        );
    }
}

/// `parseTag` accepts `name` or `modifier(inner)` nested to any depth.
fn is_call_notation(tag: &str) -> bool {
    let ident = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric());
    match tag.split_once('(') {
        None => ident(tag),
        Some((modifier, rest)) => {
            ident(modifier) && rest.strip_suffix(')').is_some_and(is_call_notation)
        }
    }
}

#[test]
fn highlight_tags_use_call_notation() {
    let value: Value = serde_json::from_str(&highlight_json(&solarized_dark().highlight).unwrap())
        .unwrap();
    let mut seen = 0;
    for rule in value.as_array().unwrap() {
        for tag in rule["tag"].as_array().unwrap() {
            let tag = tag.as_str().unwrap();
            assert!(is_call_notation(tag), "{tag}");
            seen += 1;
        }
    }
    assert!(seen > 0);
    assert!(is_call_notation("definition(function(variableName))"));
    assert!(!is_call_notation("function(variableName"));
}
