#![forbid(unsafe_code)]

//! Tag → directive mapping used for syntax highlighting.

use std::collections::HashMap;

use crate::directive::StyleDirective;
use crate::tag::Tag;

/// One entry of a highlight style: a group of tags sharing a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRule {
    pub tags: Vec<Tag>,
    pub directive: StyleDirective,
}

impl HighlightRule {
    /// Create a rule for one or more tags.
    #[must_use]
    pub fn new(tags: impl IntoIterator<Item = impl Into<Tag>>, directive: StyleDirective) -> Self {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            directive,
        }
    }
}

/// Immutable syntax highlighting table.
///
/// Built once from an ordered list of rules. When a tag appears in more
/// than one rule the later rule wins, and the earlier occurrence is dropped
/// so every tag maps to exactly one directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    rules: Vec<HighlightRule>,
    index: HashMap<Tag, usize>,
}

impl HighlightStyle {
    /// Build a highlight style from ordered rules.
    #[must_use]
    pub fn define(rules: impl IntoIterator<Item = HighlightRule>) -> Self {
        let mut rules: Vec<HighlightRule> = rules.into_iter().collect();

        let mut owner: HashMap<Tag, usize> = HashMap::new();
        for (idx, rule) in rules.iter().enumerate() {
            for tag in &rule.tags {
                owner.insert(*tag, idx);
            }
        }
        for (idx, rule) in rules.iter_mut().enumerate() {
            rule.tags.retain(|tag| owner.get(tag) == Some(&idx));
        }
        rules.retain(|rule| !rule.tags.is_empty());

        let index = rules
            .iter()
            .enumerate()
            .flat_map(|(idx, rule)| rule.tags.iter().map(move |tag| (*tag, idx)))
            .collect();

        Self { rules, index }
    }

    /// The rules, in definition order, with shadowed tags removed.
    #[must_use]
    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// Number of distinct mapped tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no tag is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The directive mapped to exactly `tag`, without fallback.
    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&StyleDirective> {
        self.index.get(&tag).map(|&idx| &self.rules[idx].directive)
    }

    /// Resolve the directive for `tag`, falling back to the bare category
    /// and then to ancestor categories.
    ///
    /// `None` means the engine's default text style applies.
    #[must_use]
    pub fn resolve(&self, tag: Tag) -> Option<&StyleDirective> {
        tag.fallbacks().find_map(|candidate| self.get(candidate))
    }

    /// Iterate `(tag, directive)` pairs in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (Tag, &StyleDirective)> {
        self.rules
            .iter()
            .flat_map(|rule| rule.tags.iter().map(move |tag| (*tag, &rule.directive)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HighlightRule {
    /// `{"tag": ["keyword", ...], "color": "#859900", ...}`
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let declarations = self.directive.declarations();
        let mut map = serializer.serialize_map(Some(declarations.len() + 1))?;
        map.serialize_entry("tag", &self.tags)?;
        for decl in &declarations {
            map.serialize_entry(decl.property, &decl.value.to_string())?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HighlightStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::tag::Category;

    fn red() -> StyleDirective {
        StyleDirective::new().color(Color::hex(0xdc322f))
    }

    fn blue() -> StyleDirective {
        StyleDirective::new().color(Color::hex(0x268bd2))
    }

    #[test]
    fn later_rule_wins_for_duplicate_tag() {
        let style = HighlightStyle::define([
            HighlightRule::new([Category::Annotation, Category::Meta], red()),
            HighlightRule::new([Category::Annotation], blue()),
        ]);
        assert_eq!(style.get(Category::Annotation.into()), Some(&blue()));
        assert_eq!(style.get(Category::Meta.into()), Some(&red()));
        assert_eq!(style.len(), 2);
        assert_eq!(style.rules()[0].tags, vec![Tag::new(Category::Meta)]);
    }

    #[test]
    fn fully_shadowed_rule_is_dropped() {
        let style = HighlightStyle::define([
            HighlightRule::new([Category::Annotation], red()),
            HighlightRule::new([Category::Annotation], blue()),
        ]);
        assert_eq!(style.rules().len(), 1);
    }

    #[test]
    fn resolve_walks_to_parent() {
        let style = HighlightStyle::define([HighlightRule::new([Category::Name], red())]);
        let tag = Tag::new(Category::VariableName).function();
        assert_eq!(style.get(tag), None);
        assert_eq!(style.resolve(tag), Some(&red()));
    }

    #[test]
    fn resolve_prefers_exact_modified_tag() {
        let fn_name = Tag::new(Category::VariableName).function();
        let style = HighlightStyle::define([
            HighlightRule::new([Category::VariableName], red()),
            HighlightRule::new([fn_name], blue()),
        ]);
        assert_eq!(style.resolve(fn_name), Some(&blue()));
        assert_eq!(style.resolve(Category::VariableName.into()), Some(&red()));
    }

    #[test]
    fn unmapped_tag_resolves_to_none() {
        let style = HighlightStyle::define([HighlightRule::new([Category::Keyword], red())]);
        assert_eq!(style.resolve(Category::Paren.into()), None);
    }

    #[test]
    fn entries_follow_definition_order() {
        let style = HighlightStyle::define([
            HighlightRule::new([Category::Keyword, Category::String], red()),
            HighlightRule::new([Category::Comment], blue()),
        ]);
        let tags: Vec<Tag> = style.entries().map(|(tag, _)| tag).collect();
        assert_eq!(
            tags,
            vec![
                Category::Keyword.into(),
                Category::String.into(),
                Category::Comment.into()
            ]
        );
    }
}
