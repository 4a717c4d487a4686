#![forbid(unsafe_code)]

//! CSS rendering of style tables.
//!
//! [`CssStyling`] is a [`StylingApi`] whose extension tokens are plain CSS
//! text scoped under a root class. The in-memory engine installs it into
//! its container; browser hosts use the engine's own styling API instead.

use std::fmt::Write as _;

use crate::chrome::{ChromeRule, ChromeTheme};
use crate::highlight::HighlightStyle;
use crate::theme::StylingApi;

/// Renders chrome and highlight tables to scoped CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssStyling {
    scope: String,
}

impl CssStyling {
    /// Scope every rule under `.{scope}`.
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    /// The root class (without the leading dot).
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Expand one selector: `&` becomes the scope class, anything else is
    /// nested below it.
    fn scoped(&self, selector: &str) -> String {
        let root = format!(".{}", self.scope);
        match selector.strip_prefix('&') {
            Some(rest) => format!("{root}{rest}"),
            None => format!("{root} {selector}"),
        }
    }

    fn write_rule(&self, out: &mut String, rule: &ChromeRule) {
        let selectors: Vec<String> = rule
            .targets
            .iter()
            .flat_map(|target| target.selector().split(", "))
            .map(|selector| self.scoped(selector))
            .collect();
        let _ = write!(out, "{} {{", selectors.join(", "));
        for decl in &rule.declarations {
            let _ = write!(out, " {decl}");
        }
        out.push_str(" }\n");
    }
}

impl StylingApi for CssStyling {
    type Extension = String;

    fn theme(&self, chrome: &ChromeTheme) -> String {
        let mut out = String::new();
        if chrome.dark {
            let _ = writeln!(out, ".{} {{ color-scheme: dark; }}", self.scope);
        }
        for rule in &chrome.rules {
            self.write_rule(&mut out, rule);
        }
        out
    }

    fn syntax_highlighting(&self, style: &HighlightStyle) -> String {
        let mut out = String::new();
        for rule in style.rules() {
            let selectors: Vec<String> = rule
                .tags
                .iter()
                .map(|tag| self.scoped(&format!(".{}", tag.class_name())))
                .collect();
            let _ = write!(out, "{} {{", selectors.join(", "));
            for decl in rule.directive.declarations() {
                let _ = write!(out, " {decl}");
            }
            out.push_str(" }\n");
        }
        out
    }
}
