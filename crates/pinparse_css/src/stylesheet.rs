use pinparse_shared::stream::SourceInterval;
use serde::Serialize;

/// A piece of CSS text together with where it was found
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CssText {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

impl CssText {
    #[must_use]
    pub fn interval(&self) -> SourceInterval {
        SourceInterval::new(self.start, self.end)
    }

    /// Length of the value in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// A single `name: value` pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssDeclaration {
    pub name: CssText,
    pub value: CssText,
}

/// The `{ ... }` part of a rule. `start` is the offset of the opening brace and `end` the
/// offset just past the closing brace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CssDeclarations {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub properties: Vec<CssDeclaration>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssRule {
    pub selector: CssText,
    pub declarations: CssDeclarations,
}

/// Everything that was learned about a style block
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CssParseInfo {
    pub start: usize,
    pub end: usize,
    pub rules: Vec<CssRule>,
    pub comments: Vec<SourceInterval>,
}

/// Result of parsing a style block: the raw CSS text and its structure
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssBlock {
    pub value: String,
    pub parse_info: CssParseInfo,
}

impl CssBlock {
    /// Finds the first rule whose selector matches exactly
    #[must_use]
    pub fn rule(&self, selector: &str) -> Option<&CssRule> {
        self.parse_info.rules.iter().find(|rule| rule.selector.value == selector)
    }
}

impl CssRule {
    /// Finds the declaration for the given property name
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&CssDeclaration> {
        self.declarations.properties.iter().find(|decl| decl.name.value == name)
    }
}
