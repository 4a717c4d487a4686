//! Rendering the shared Solarized Dark table through the CSS styling API.

use feedface_style::{Color, CssStyling, build_theme, solarized_dark};
use proptest::prelude::*;

#[test]
fn chrome_css_covers_every_rule() {
    let theme = build_theme(&CssStyling::new("feed-face"));
    let rule_lines = theme
        .chrome
        .lines()
        .filter(|line| !line.contains("color-scheme"))
        .count();
    assert_eq!(rule_lines, solarized_dark().chrome.rules.len());
    assert!(theme.chrome.starts_with(".feed-face { color-scheme: dark; }\n"));
    assert!(
        theme
            .chrome
            .contains(".feed-face { color: #93a1a1; background-color: #002b36; }")
    );
    assert!(theme.chrome.contains(
        ".feed-face .cm-tooltip-autocomplete > ul > li[aria-selected] \
         { background-color: #173541; color: #657b83; }"
    ));
}

#[test]
fn syntax_css_has_one_line_per_rule() {
    let theme = build_theme(&CssStyling::new("feed-face"));
    assert_eq!(
        theme.syntax.lines().count(),
        solarized_dark().highlight.rules().len()
    );
    assert!(theme.syntax.contains(
        ".feed-face .tok-comment { color: #586e75; font-style: italic; }"
    ));
    assert!(theme.syntax.contains(
        ".feed-face .tok-link { color: #2aa198; text-decoration: underline; \
         text-underline-position: under; }"
    ));
}

#[test]
fn every_mapped_tag_has_a_token_class() {
    let theme = build_theme(&CssStyling::new("ff"));
    for (tag, _) in solarized_dark().highlight.entries() {
        let class = format!(".ff .{}", tag.class_name());
        assert!(theme.syntax.contains(&class), "missing {class}");
    }
}

proptest! {
    #[test]
    fn css_hex_parses_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let color = Color::rgba(r, g, b, a);
        prop_assert_eq!(Color::parse_hex(&color.to_css()), Ok(color));
    }
}
