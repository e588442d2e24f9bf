//! Error taxonomy
//!
//! Parsing stops at the first fatal problem, which is described by a single [`ParseError`]. A few
//! kinds are only ever reported as warnings (see [`ParseError::is_warning`]).
//!
//! The serialized shape of an error is its wire format: a `type` tag in SCREAMING_SNAKE_CASE, the
//! positional detail fields in camelCase and a `cursor` pointing at the offset a caret should be
//! placed at. Every offset is a character index into the parsed source.
use crate::stream::{SourceInterval, TagInterval, Token};
use serde::Serialize;

/// Result type for the parsers
pub type ParseResult<T> = Result<T, ParseError>;

/// A named tag with the interval it was found at
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagSpan {
    pub name: String,
    pub start: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl TagSpan {
    fn new(name: &str, interval: TagInterval) -> Self {
        Self {
            name: name.to_string(),
            start: interval.start,
            end: interval.end,
        }
    }

    fn closed(name: &str, interval: SourceInterval) -> Self {
        Self::new(name, TagInterval { start: interval.start, end: Some(interval.end) })
    }
}

/// Part of an attribute. Depending on the error, only some of the fields are known.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AttributePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttributeSpan {
    pub name: AttributePart,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributePart>,
}

impl AttributeSpan {
    fn named(name: &str) -> Self {
        Self {
            name: AttributePart {
                value: Some(name.to_string()),
                ..AttributePart::default()
            },
            value: None,
        }
    }

    fn from_token(name: &Token, value: AttributePart) -> Self {
        Self {
            name: AttributePart {
                value: Some(name.value.clone()),
                start: Some(name.interval.start),
                end: Some(name.interval.end),
            },
            value: Some(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssKeywordSpan {
    pub start: usize,
    pub end: usize,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssSelectorSpan {
    pub start: usize,
    pub end: usize,
    pub selector: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssPropertySpan {
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssValueSpan {
    pub start: usize,
    pub end: usize,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssErrorMessage {
    pub start: usize,
    pub end: usize,
    pub msg: String,
}

/// Every problem the parsers can report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum ParseError {
    // HTML errors
    #[error("the <{}> tag at {} is never closed", .open_tag.name, .open_tag.start)]
    UnclosedTag { open_tag: TagSpan, cursor: usize },
    #[error("'{}' at {} is not a valid tag name", .open_tag.name, .open_tag.start)]
    InvalidTagName { open_tag: TagSpan, cursor: usize },
    #[error("the closing </{}> tag at {} does not pair with any opening tag", .close_tag.name, .close_tag.start)]
    UnexpectedCloseTag { close_tag: TagSpan, cursor: usize },
    #[error("the closing </{}> tag at {} does not match the opening <{}> tag", .close_tag.name, .close_tag.start, .open_tag.name)]
    MismatchedCloseTag {
        open_tag: TagSpan,
        close_tag: TagSpan,
        cursor: usize,
    },
    #[error("the closing </{}> tag at {} contains an attribute", .close_tag.name, .close_tag.start)]
    AttributeInClosingTag { close_tag: TagSpan, cursor: usize },
    #[error("the closing </{}> tag at {} is for a void element", .close_tag.name, .close_tag.start)]
    CloseTagForVoidElement { close_tag: TagSpan, cursor: usize },
    #[error("the comment at {start} is never closed")]
    UnterminatedComment { start: usize, cursor: usize },
    #[error("the value of the '{}' attribute of <{}> is never closed", .attribute.name.value.as_deref().unwrap_or_default(), .open_tag.name)]
    UnterminatedAttrValue {
        open_tag: TagSpan,
        attribute: AttributeSpan,
        cursor: usize,
    },
    #[error("the attribute value at {start} is not quoted")]
    UnquotedAttrValue { start: usize, cursor: usize },
    #[error("'{}' at {start} is not a valid attribute name", .attribute.name.value.as_deref().unwrap_or_default())]
    InvalidAttrName {
        start: usize,
        end: usize,
        attribute: AttributeSpan,
        cursor: usize,
    },
    #[error("the attribute '{}' at {start} uses more than one namespace", .attribute.name.value.as_deref().unwrap_or_default())]
    MultipleAttrNamespaces {
        start: usize,
        end: usize,
        attribute: AttributeSpan,
        cursor: usize,
    },
    #[error("the attribute '{}' at {start} uses an unsupported namespace", .attribute.name.value.as_deref().unwrap_or_default())]
    UnsupportedAttrNamespace {
        start: usize,
        end: usize,
        attribute: AttributeSpan,
        cursor: usize,
    },
    #[error("the attribute value {value} at {} is not bound to an attribute name", .interval.start)]
    UnboundAttributeValue {
        value: String,
        interval: SourceInterval,
        cursor: usize,
    },
    #[error("the opening <{}> tag at {} is never terminated", .open_tag.name, .open_tag.start)]
    UnterminatedOpenTag { open_tag: TagSpan, cursor: usize },
    #[error("<{name}> at {start} is self-closing but is not a void element")]
    SelfClosingNonVoidElement {
        name: String,
        start: usize,
        end: usize,
        cursor: usize,
    },
    #[error("the closing </{}> tag at {} is never terminated", .close_tag.name, .close_tag.start)]
    UnterminatedCloseTag { close_tag: TagSpan, cursor: usize },
    #[error("<{}> links to an http resource from an https page", .open_tag.name)]
    HttpLinkFromHttpsPage {
        open_tag: TagSpan,
        attribute: AttributeSpan,
        cursor: usize,
    },

    // CSS errors
    #[error("unknown CSS keyword {:?} at {}", .css_keyword.value, .css_keyword.start)]
    UnkownCssKeyword { css_keyword: CssKeywordSpan, cursor: usize },
    #[error("missing CSS selector at {}", .css_block.start)]
    MissingCssSelector {
        css_block: SourceInterval,
        cursor: usize,
    },
    #[error("the CSS selector {:?} at {} has no declaration block", .css_selector.selector, .css_selector.start)]
    UnfinishedCssSelector {
        css_selector: CssSelectorSpan,
        cursor: usize,
    },
    #[error("the CSS selector {:?} at {} is missing its opening {{", .css_selector.selector, .css_selector.start)]
    MissingCssBlockOpener {
        css_selector: CssSelectorSpan,
        cursor: usize,
    },
    #[error("'{}' at {} is not a CSS property", .css_property.property.as_deref().unwrap_or_default(), .css_property.start)]
    InvalidCssPropertyName {
        css_property: CssPropertySpan,
        cursor: usize,
    },
    #[error("the rule for {:?} at {} is missing a property", .css_selector.selector, .css_selector.start)]
    MissingCssProperty {
        css_selector: CssSelectorSpan,
        cursor: usize,
    },
    #[error("the CSS property '{}' at {} is missing its colon", .css_property.property.as_deref().unwrap_or_default(), .css_property.start)]
    UnfinishedCssProperty {
        css_property: CssPropertySpan,
        cursor: usize,
    },
    #[error("missing CSS value at {}", .css_property.start)]
    MissingCssValue {
        css_property: CssPropertySpan,
        cursor: usize,
    },
    #[error("the CSS value {:?} at {} is never terminated", .css_value.value, .css_value.start)]
    UnfinishedCssValue { css_value: CssValueSpan, cursor: usize },
    #[error("the CSS value {:?} at {} loads an http resource from an https page", .css_value.value, .css_value.start)]
    CssMixedActivecontent {
        css_property: CssPropertySpan,
        css_value: CssValueSpan,
        cursor: usize,
    },
    #[error("the CSS block ending in {:?} at {} is missing its closing }}", .css_value.value, .css_value.start)]
    MissingCssBlockCloser { css_value: CssValueSpan, cursor: usize },
    #[error("unexpected CSS at {}: {}", .error.start, .error.msg)]
    UncaughtCssParseError {
        error: CssErrorMessage,
        cursor: usize,
    },
    #[error("the CSS comment at {start} is never closed")]
    UnterminatedCssComment { start: usize, cursor: usize },
    #[error("HTML found inside a CSS block at {}", .html.start)]
    HtmlCodeInCssBlock { html: SourceInterval, cursor: usize },
}

impl ParseError {
    /// Returns the wire name of the error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnclosedTag { .. } => "UNCLOSED_TAG",
            Self::InvalidTagName { .. } => "INVALID_TAG_NAME",
            Self::UnexpectedCloseTag { .. } => "UNEXPECTED_CLOSE_TAG",
            Self::MismatchedCloseTag { .. } => "MISMATCHED_CLOSE_TAG",
            Self::AttributeInClosingTag { .. } => "ATTRIBUTE_IN_CLOSING_TAG",
            Self::CloseTagForVoidElement { .. } => "CLOSE_TAG_FOR_VOID_ELEMENT",
            Self::UnterminatedComment { .. } => "UNTERMINATED_COMMENT",
            Self::UnterminatedAttrValue { .. } => "UNTERMINATED_ATTR_VALUE",
            Self::UnquotedAttrValue { .. } => "UNQUOTED_ATTR_VALUE",
            Self::InvalidAttrName { .. } => "INVALID_ATTR_NAME",
            Self::MultipleAttrNamespaces { .. } => "MULTIPLE_ATTR_NAMESPACES",
            Self::UnsupportedAttrNamespace { .. } => "UNSUPPORTED_ATTR_NAMESPACE",
            Self::UnboundAttributeValue { .. } => "UNBOUND_ATTRIBUTE_VALUE",
            Self::UnterminatedOpenTag { .. } => "UNTERMINATED_OPEN_TAG",
            Self::SelfClosingNonVoidElement { .. } => "SELF_CLOSING_NON_VOID_ELEMENT",
            Self::UnterminatedCloseTag { .. } => "UNTERMINATED_CLOSE_TAG",
            Self::HttpLinkFromHttpsPage { .. } => "HTTP_LINK_FROM_HTTPS_PAGE",
            Self::UnkownCssKeyword { .. } => "UNKOWN_CSS_KEYWORD",
            Self::MissingCssSelector { .. } => "MISSING_CSS_SELECTOR",
            Self::UnfinishedCssSelector { .. } => "UNFINISHED_CSS_SELECTOR",
            Self::MissingCssBlockOpener { .. } => "MISSING_CSS_BLOCK_OPENER",
            Self::InvalidCssPropertyName { .. } => "INVALID_CSS_PROPERTY_NAME",
            Self::MissingCssProperty { .. } => "MISSING_CSS_PROPERTY",
            Self::UnfinishedCssProperty { .. } => "UNFINISHED_CSS_PROPERTY",
            Self::MissingCssValue { .. } => "MISSING_CSS_VALUE",
            Self::UnfinishedCssValue { .. } => "UNFINISHED_CSS_VALUE",
            Self::CssMixedActivecontent { .. } => "CSS_MIXED_ACTIVECONTENT",
            Self::MissingCssBlockCloser { .. } => "MISSING_CSS_BLOCK_CLOSER",
            Self::UncaughtCssParseError { .. } => "UNCAUGHT_CSS_PARSE_ERROR",
            Self::UnterminatedCssComment { .. } => "UNTERMINATED_CSS_COMMENT",
            Self::HtmlCodeInCssBlock { .. } => "HTML_CODE_IN_CSS_BLOCK",
        }
    }

    /// Offset in the source where a caret for this error belongs
    #[must_use]
    pub fn cursor(&self) -> usize {
        match self {
            Self::UnclosedTag { cursor, .. }
            | Self::InvalidTagName { cursor, .. }
            | Self::UnexpectedCloseTag { cursor, .. }
            | Self::MismatchedCloseTag { cursor, .. }
            | Self::AttributeInClosingTag { cursor, .. }
            | Self::CloseTagForVoidElement { cursor, .. }
            | Self::UnterminatedComment { cursor, .. }
            | Self::UnterminatedAttrValue { cursor, .. }
            | Self::UnquotedAttrValue { cursor, .. }
            | Self::InvalidAttrName { cursor, .. }
            | Self::MultipleAttrNamespaces { cursor, .. }
            | Self::UnsupportedAttrNamespace { cursor, .. }
            | Self::UnboundAttributeValue { cursor, .. }
            | Self::UnterminatedOpenTag { cursor, .. }
            | Self::SelfClosingNonVoidElement { cursor, .. }
            | Self::UnterminatedCloseTag { cursor, .. }
            | Self::HttpLinkFromHttpsPage { cursor, .. }
            | Self::UnkownCssKeyword { cursor, .. }
            | Self::MissingCssSelector { cursor, .. }
            | Self::UnfinishedCssSelector { cursor, .. }
            | Self::MissingCssBlockOpener { cursor, .. }
            | Self::InvalidCssPropertyName { cursor, .. }
            | Self::MissingCssProperty { cursor, .. }
            | Self::UnfinishedCssProperty { cursor, .. }
            | Self::MissingCssValue { cursor, .. }
            | Self::UnfinishedCssValue { cursor, .. }
            | Self::CssMixedActivecontent { cursor, .. }
            | Self::MissingCssBlockCloser { cursor, .. }
            | Self::UncaughtCssParseError { cursor, .. }
            | Self::UnterminatedCssComment { cursor, .. }
            | Self::HtmlCodeInCssBlock { cursor, .. } => *cursor,
        }
    }

    /// Returns true for the kinds that are collected as warnings instead of ending the parse
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::HttpLinkFromHttpsPage { .. } | Self::CssMixedActivecontent { .. }
        )
    }
}

// Builders. Each one takes the positional facts at the point of failure and derives the cursor
// from them.
impl ParseError {
    #[must_use]
    pub fn unclosed_tag(name: &str, open_tag: TagInterval) -> Self {
        Self::UnclosedTag {
            open_tag: TagSpan::new(name, open_tag),
            cursor: open_tag.start,
        }
    }

    #[must_use]
    pub fn invalid_tag_name(name: &str, token: SourceInterval) -> Self {
        Self::InvalidTagName {
            open_tag: TagSpan::closed(name, token),
            cursor: token.start,
        }
    }

    #[must_use]
    pub fn unexpected_close_tag(name: &str, token: SourceInterval) -> Self {
        Self::UnexpectedCloseTag {
            close_tag: TagSpan::closed(name, token),
            cursor: token.start,
        }
    }

    #[must_use]
    pub fn mismatched_close_tag(
        open_name: &str,
        open_tag: TagInterval,
        close_name: &str,
        close_tag: SourceInterval,
    ) -> Self {
        Self::MismatchedCloseTag {
            open_tag: TagSpan::new(open_name, open_tag),
            close_tag: TagSpan::closed(close_name, close_tag),
            cursor: close_tag.start,
        }
    }

    #[must_use]
    pub fn attribute_in_closing_tag(name: &str, close_tag: SourceInterval) -> Self {
        Self::AttributeInClosingTag {
            close_tag: TagSpan::closed(name, close_tag),
            cursor: close_tag.start,
        }
    }

    #[must_use]
    pub fn close_tag_for_void_element(name: &str, token: SourceInterval) -> Self {
        Self::CloseTagForVoidElement {
            close_tag: TagSpan::closed(name, token),
            cursor: token.start,
        }
    }

    #[must_use]
    pub fn unterminated_comment(start: usize) -> Self {
        Self::UnterminatedComment { start, cursor: start }
    }

    /// `value_start` is the offset of the opening quote
    #[must_use]
    pub fn unterminated_attr_value(
        tag_name: &str,
        open_tag: TagInterval,
        name: &Token,
        value_start: usize,
    ) -> Self {
        let value = AttributePart {
            start: Some(value_start),
            ..AttributePart::default()
        };
        Self::UnterminatedAttrValue {
            open_tag: TagSpan::new(tag_name, open_tag),
            attribute: AttributeSpan::from_token(name, value),
            cursor: value_start,
        }
    }

    #[must_use]
    pub fn unquoted_attr_value(start: usize) -> Self {
        Self::UnquotedAttrValue { start, cursor: start }
    }

    #[must_use]
    pub fn invalid_attr_name(token: &Token) -> Self {
        Self::InvalidAttrName {
            start: token.interval.start,
            end: token.interval.end,
            attribute: AttributeSpan::named(&token.value),
            cursor: token.interval.start,
        }
    }

    #[must_use]
    pub fn multiple_attr_namespaces(token: &Token) -> Self {
        Self::MultipleAttrNamespaces {
            start: token.interval.start,
            end: token.interval.end,
            attribute: AttributeSpan::named(&token.value),
            cursor: token.interval.start,
        }
    }

    #[must_use]
    pub fn unsupported_attr_namespace(token: &Token) -> Self {
        Self::UnsupportedAttrNamespace {
            start: token.interval.start,
            end: token.interval.end,
            attribute: AttributeSpan::named(&token.value),
            cursor: token.interval.start,
        }
    }

    #[must_use]
    pub fn unbound_attribute_value(token: &Token) -> Self {
        Self::UnboundAttributeValue {
            value: token.value.clone(),
            interval: token.interval,
            cursor: token.interval.start,
        }
    }

    #[must_use]
    pub fn unterminated_open_tag(name: &str, start: usize, end: usize) -> Self {
        Self::UnterminatedOpenTag {
            open_tag: TagSpan::closed(name, SourceInterval::new(start, end)),
            cursor: start,
        }
    }

    #[must_use]
    pub fn self_closing_non_void_element(name: &str, start: usize, end: usize) -> Self {
        Self::SelfClosingNonVoidElement {
            name: name.to_string(),
            start,
            end,
            cursor: start,
        }
    }

    #[must_use]
    pub fn unterminated_close_tag(name: &str, close_tag: SourceInterval) -> Self {
        Self::UnterminatedCloseTag {
            close_tag: TagSpan::closed(name, close_tag),
            cursor: close_tag.start,
        }
    }

    /// `value` is the interval of the quoted value, quotes included
    #[must_use]
    pub fn http_link_from_https_page(
        tag_name: &str,
        open_tag: TagInterval,
        name: &Token,
        value: SourceInterval,
    ) -> Self {
        let start = value.start + 1;
        let inner = AttributePart {
            value: None,
            start: Some(start),
            end: Some(value.end.saturating_sub(1).max(start)),
        };
        Self::HttpLinkFromHttpsPage {
            open_tag: TagSpan::new(tag_name, open_tag),
            attribute: AttributeSpan::from_token(name, inner),
            cursor: start,
        }
    }

    #[must_use]
    pub fn unknown_css_keyword(start: usize, end: usize, value: &str) -> Self {
        Self::UnkownCssKeyword {
            css_keyword: CssKeywordSpan {
                start,
                end,
                value: value.to_string(),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn missing_css_selector(start: usize, end: usize) -> Self {
        Self::MissingCssSelector {
            css_block: SourceInterval::new(start, end),
            cursor: start,
        }
    }

    #[must_use]
    pub fn unfinished_css_selector(start: usize, end: usize, selector: &str) -> Self {
        Self::UnfinishedCssSelector {
            css_selector: CssSelectorSpan {
                start,
                end,
                selector: selector.to_string(),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn missing_css_block_opener(start: usize, end: usize, selector: &str) -> Self {
        Self::MissingCssBlockOpener {
            css_selector: CssSelectorSpan {
                start,
                end,
                selector: selector.to_string(),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn invalid_css_property_name(start: usize, end: usize, property: &str) -> Self {
        Self::InvalidCssPropertyName {
            css_property: CssPropertySpan {
                start,
                end,
                property: Some(property.to_string()),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn missing_css_property(start: usize, end: usize, selector: &str) -> Self {
        Self::MissingCssProperty {
            css_selector: CssSelectorSpan {
                start,
                end,
                selector: selector.to_string(),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn unfinished_css_property(start: usize, end: usize, property: &str) -> Self {
        Self::UnfinishedCssProperty {
            css_property: CssPropertySpan {
                start,
                end,
                property: Some(property.to_string()),
            },
            cursor: start,
        }
    }

    /// The property is unknown when the value turned out to be nothing but comments
    #[must_use]
    pub fn missing_css_value(start: usize, end: usize, property: Option<&str>) -> Self {
        Self::MissingCssValue {
            css_property: CssPropertySpan {
                start,
                end,
                property: property.map(str::to_string),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn unfinished_css_value(start: usize, end: usize, value: &str) -> Self {
        Self::UnfinishedCssValue {
            css_value: CssValueSpan {
                start,
                end,
                value: value.to_string(),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn css_mixed_activecontent(
        property: &str,
        property_start: usize,
        value: &str,
        value_interval: SourceInterval,
    ) -> Self {
        Self::CssMixedActivecontent {
            css_property: CssPropertySpan {
                start: property_start,
                end: property_start + property.chars().count(),
                property: Some(property.to_string()),
            },
            css_value: CssValueSpan {
                start: value_interval.start,
                end: value_interval.end,
                value: value.to_string(),
            },
            cursor: value_interval.start,
        }
    }

    #[must_use]
    pub fn missing_css_block_closer(start: usize, end: usize, value: &str) -> Self {
        Self::MissingCssBlockCloser {
            css_value: CssValueSpan {
                start,
                end,
                value: value.to_string(),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn uncaught_css_parse_error(start: usize, end: usize, msg: &str) -> Self {
        Self::UncaughtCssParseError {
            error: CssErrorMessage {
                start,
                end,
                msg: msg.to_string(),
            },
            cursor: start,
        }
    }

    #[must_use]
    pub fn unterminated_css_comment(start: usize) -> Self {
        Self::UnterminatedCssComment { start, cursor: start }
    }

    #[must_use]
    pub fn html_code_in_css_block(start: usize, end: usize) -> Self {
        Self::HtmlCodeInCssBlock {
            html: SourceInterval::new(start, end),
            cursor: start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_tag_and_camel_case_fields() {
        let err = ParseError::mismatched_close_tag(
            "p",
            TagInterval { start: 5, end: Some(8) },
            "div",
            SourceInterval::new(29, 34),
        );

        assert_eq!(err.kind(), "MISMATCHED_CLOSE_TAG");
        assert_eq!(err.cursor(), 29);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "type": "MISMATCHED_CLOSE_TAG",
                "openTag": { "name": "p", "start": 5, "end": 8 },
                "closeTag": { "name": "div", "start": 29, "end": 34 },
                "cursor": 29
            })
        );
    }

    #[test]
    fn unknown_ends_are_left_out() {
        let name = Token {
            value: "href".to_string(),
            interval: SourceInterval::new(3, 7),
        };
        let err = ParseError::unterminated_attr_value("a", TagInterval::open(0), &name, 8);

        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "type": "UNTERMINATED_ATTR_VALUE",
                "openTag": { "name": "a", "start": 0 },
                "attribute": {
                    "name": { "value": "href", "start": 3, "end": 7 },
                    "value": { "start": 8 }
                },
                "cursor": 8
            })
        );
    }

    #[test]
    fn missing_css_value_without_property() {
        let err = ParseError::missing_css_value(40, 41, None);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "type": "MISSING_CSS_VALUE",
                "cssProperty": { "start": 40, "end": 41 },
                "cursor": 40
            })
        );
    }

    #[test]
    fn mixed_content_cursor_points_at_value() {
        let err = ParseError::css_mixed_activecontent(
            "background",
            20,
            "url(http://example.org/a.png)",
            SourceInterval::new(32, 61),
        );

        assert!(err.is_warning());
        assert_eq!(err.cursor(), 32);
        assert_eq!(
            serde_json::to_value(&err).unwrap()["cssProperty"],
            json!({ "start": 20, "end": 30, "property": "background" })
        );
    }

    #[test]
    fn display_names_the_problem() {
        let err = ParseError::unclosed_tag("div", TagInterval { start: 0, end: Some(5) });
        assert_eq!(err.to_string(), "the <div> tag at 0 is never closed");
        assert!(!err.is_warning());
    }
}
