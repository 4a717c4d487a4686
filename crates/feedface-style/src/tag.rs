#![forbid(unsafe_code)]

//! Abstract syntax-category tags.
//!
//! Language support emits tokens tagged with a [`Category`], optionally
//! refined by [`TagModifiers`] (`function(variableName)`,
//! `constant(name)` …). Categories form a tree: a theme that does not map
//! `variableName` still styles it through `name`.

use std::fmt;

use bitflags::bitflags;

/// Syntax category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Comment,
    // Names
    Name,
    VariableName,
    TypeName,
    TagName,
    PropertyName,
    AttributeName,
    ClassName,
    LabelName,
    Namespace,
    MacroName,
    // Literals
    Literal,
    String,
    Character,
    Regexp,
    Escape,
    Url,
    Color,
    Number,
    // Keywords
    Keyword,
    SelfKeyword,
    Atom,
    Bool,
    Modifier,
    OperatorKeyword,
    Operator,
    // Punctuation
    Punctuation,
    Separator,
    Bracket,
    AngleBracket,
    SquareBracket,
    Paren,
    Brace,
    // Markup content
    Content,
    Heading,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    ContentSeparator,
    Quote,
    Emphasis,
    Strong,
    Link,
    Strikethrough,
    // Diffs
    Inserted,
    Deleted,
    Changed,
    Invalid,
    // Meta
    Meta,
    Annotation,
    ProcessingInstruction,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 54] = [
        Self::Comment,
        Self::Name,
        Self::VariableName,
        Self::TypeName,
        Self::TagName,
        Self::PropertyName,
        Self::AttributeName,
        Self::ClassName,
        Self::LabelName,
        Self::Namespace,
        Self::MacroName,
        Self::Literal,
        Self::String,
        Self::Character,
        Self::Regexp,
        Self::Escape,
        Self::Url,
        Self::Color,
        Self::Number,
        Self::Keyword,
        Self::SelfKeyword,
        Self::Atom,
        Self::Bool,
        Self::Modifier,
        Self::OperatorKeyword,
        Self::Operator,
        Self::Punctuation,
        Self::Separator,
        Self::Bracket,
        Self::AngleBracket,
        Self::SquareBracket,
        Self::Paren,
        Self::Brace,
        Self::Content,
        Self::Heading,
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Heading4,
        Self::Heading5,
        Self::Heading6,
        Self::ContentSeparator,
        Self::Quote,
        Self::Emphasis,
        Self::Strong,
        Self::Link,
        Self::Strikethrough,
        Self::Inserted,
        Self::Deleted,
        Self::Changed,
        Self::Invalid,
        Self::Meta,
        Self::Annotation,
        Self::ProcessingInstruction,
    ];

    /// Parent category, or `None` for a root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        use Category::*;
        match self {
            VariableName | TypeName | PropertyName | ClassName | LabelName | Namespace
            | MacroName => Some(Name),
            TagName => Some(TypeName),
            AttributeName => Some(PropertyName),
            String | Url | Color | Number => Some(Literal),
            Character | Regexp | Escape => Some(String),
            SelfKeyword | Atom | Modifier | OperatorKeyword => Some(Keyword),
            Bool => Some(Atom),
            Separator | Bracket => Some(Punctuation),
            AngleBracket | SquareBracket | Paren | Brace => Some(Bracket),
            Heading | ContentSeparator | Quote | Emphasis | Strong | Link | Strikethrough => {
                Some(Content)
            }
            Heading1 | Heading2 | Heading3 | Heading4 | Heading5 | Heading6 => Some(Heading),
            Annotation | ProcessingInstruction => Some(Meta),
            Comment | Name | Literal | Keyword | Operator | Punctuation | Content | Inserted
            | Deleted | Changed | Invalid | Meta => None,
        }
    }

    /// Camel-case name shared with JavaScript highlighters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use Category::*;
        match self {
            Comment => "comment",
            Name => "name",
            VariableName => "variableName",
            TypeName => "typeName",
            TagName => "tagName",
            PropertyName => "propertyName",
            AttributeName => "attributeName",
            ClassName => "className",
            LabelName => "labelName",
            Namespace => "namespace",
            MacroName => "macroName",
            Literal => "literal",
            String => "string",
            Character => "character",
            Regexp => "regexp",
            Escape => "escape",
            Url => "url",
            Color => "color",
            Number => "number",
            Keyword => "keyword",
            SelfKeyword => "self",
            Atom => "atom",
            Bool => "bool",
            Modifier => "modifier",
            OperatorKeyword => "operatorKeyword",
            Operator => "operator",
            Punctuation => "punctuation",
            Separator => "separator",
            Bracket => "bracket",
            AngleBracket => "angleBracket",
            SquareBracket => "squareBracket",
            Paren => "paren",
            Brace => "brace",
            Content => "content",
            Heading => "heading",
            Heading1 => "heading1",
            Heading2 => "heading2",
            Heading3 => "heading3",
            Heading4 => "heading4",
            Heading5 => "heading5",
            Heading6 => "heading6",
            ContentSeparator => "contentSeparator",
            Quote => "quote",
            Emphasis => "emphasis",
            Strong => "strong",
            Link => "link",
            Strikethrough => "strikethrough",
            Inserted => "inserted",
            Deleted => "deleted",
            Changed => "changed",
            Invalid => "invalid",
            Meta => "meta",
            Annotation => "annotation",
            ProcessingInstruction => "processingInstruction",
        }
    }

    /// Iterate from this category up to its root.
    pub fn ancestry(self) -> impl Iterator<Item = Category> {
        std::iter::successors(Some(self), |c| c.parent())
    }
}

bitflags! {
    /// Refinements applied on top of a category.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
    pub struct TagModifiers: u8 {
        /// Name bound at its definition site.
        const DEFINITION = 1 << 0;
        /// Constant binding.
        const CONSTANT = 1 << 1;
        /// Function or method.
        const FUNCTION = 1 << 2;
        /// Name from the language's standard library.
        const STANDARD = 1 << 3;
        /// Language-specific special form (template strings, `this`-like names).
        const SPECIAL = 1 << 4;
    }
}

impl TagModifiers {
    const NAMES: [(TagModifiers, &'static str); 5] = [
        (Self::DEFINITION, "definition"),
        (Self::CONSTANT, "constant"),
        (Self::FUNCTION, "function"),
        (Self::STANDARD, "standard"),
        (Self::SPECIAL, "special"),
    ];
}

/// A category with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    pub category: Category,
    pub modifiers: TagModifiers,
}

impl Tag {
    /// Unmodified tag.
    #[must_use]
    pub const fn new(category: Category) -> Self {
        Self {
            category,
            modifiers: TagModifiers::empty(),
        }
    }

    #[must_use]
    pub const fn definition(self) -> Self {
        self.with(TagModifiers::DEFINITION)
    }

    #[must_use]
    pub const fn constant(self) -> Self {
        self.with(TagModifiers::CONSTANT)
    }

    #[must_use]
    pub const fn function(self) -> Self {
        self.with(TagModifiers::FUNCTION)
    }

    #[must_use]
    pub const fn standard(self) -> Self {
        self.with(TagModifiers::STANDARD)
    }

    #[must_use]
    pub const fn special(self) -> Self {
        self.with(TagModifiers::SPECIAL)
    }

    const fn with(self, modifier: TagModifiers) -> Self {
        Self {
            category: self.category,
            modifiers: self.modifiers.union(modifier),
        }
    }

    /// Whether any modifier is applied.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// Tags consulted when resolving a style for `self`, most specific first:
    /// the tag itself, the bare category, then each ancestor category.
    pub fn fallbacks(self) -> impl Iterator<Item = Tag> {
        let bare = self.is_modified().then(|| Tag::new(self.category));
        std::iter::once(self)
            .chain(bare)
            .chain(self.category.ancestry().skip(1).map(Tag::new))
    }

    /// CSS class used by class-based highlighters, e.g. `tok-function-variableName`.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut class = String::from("tok");
        for (flag, name) in TagModifiers::NAMES {
            if self.modifiers.contains(flag) {
                class.push('-');
                class.push_str(name);
            }
        }
        class.push('-');
        class.push_str(self.category.name());
        class
    }
}

impl From<Category> for Tag {
    fn from(category: Category) -> Self {
        Self::new(category)
    }
}

impl fmt::Display for Tag {
    /// Nested call notation: `function(variableName)`, `special(string)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let applied: Vec<&str> = TagModifiers::NAMES
            .iter()
            .filter(|(flag, _)| self.modifiers.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        for name in &applied {
            write!(f, "{name}(")?;
        }
        f.write_str(self.category.name())?;
        for _ in &applied {
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
