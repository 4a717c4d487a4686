#![forbid(unsafe_code)]

//! JSON payloads handed to the JavaScript engine.
//!
//! Style tables cross the wasm boundary as JSON strings: the chrome theme
//! as a `{selector: {property: value}}` object, the highlight style as an
//! array of `{"tag": [..], property: value}` rules. Tag names use call
//! notation (`keyword`, `function(variableName)`), which `parseTag` in
//! `js/feed-face.js` turns back into engine tags.

use feedface_style::{ChromeTheme, HighlightStyle};

use crate::error::WebError;

/// Root class of the container element inside the shadow root.
pub const CONTAINER_CLASS: &str = "feed-face";

/// Chrome rules as JSON.
pub fn chrome_json(theme: &ChromeTheme) -> Result<String, WebError> {
    Ok(serde_json::to_string(theme)?)
}

/// Highlight rules as JSON.
pub fn highlight_json(style: &HighlightStyle) -> Result<String, WebError> {
    Ok(serde_json::to_string(style)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedface_style::solarized_dark;
    use serde_json::Value;

    #[test]
    fn chrome_payload_is_an_object() {
        let json = chrome_json(&solarized_dark().chrome).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value.as_object().is_some_and(|map| map.contains_key("&")));
    }

    #[test]
    fn highlight_payload_lists_every_rule() {
        let json = highlight_json(&solarized_dark().highlight).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value.as_array().map(Vec::len),
            Some(solarized_dark().highlight.rules().len())
        );
    }
}
