//! Strict HTML parser
//!
//! [`parse_html`] reads a document fragment and builds a tree of it, together with the source
//! interval of every element, attribute, text run and comment. Parsing stops at the first
//! authoring mistake, which is reported as a [`ParseError`] pointing at the offending source.
//! `<style>` elements are handed to the CSS parser of `pinparse_css`.
//!
//! The tree is built through the [`TreeSink`] trait. [`Document`] is the sink used by default.
use crate::dom_builder::{ContextRecord, DomBuilder};
use crate::parser::HtmlParser;
use pinparse_shared::stream::Stream;
use serde::{Serialize, Serializer};

pub use crate::document::Document;
pub use crate::elements::HTML_ELEMENT_NAMES;
pub use crate::entities::replace_entity_refs;
pub use crate::tree_sink::TreeSink;
pub use crate::writer::DocumentWriter;
pub use pinparse_css::properties::CSS_PROPERTY_NAMES;
pub use pinparse_shared::errors::ParseError;

pub mod document;
pub mod dom_builder;
pub mod elements;
pub mod entities;
pub mod node;
pub mod parser;
pub mod tree_sink;
pub mod writer;

/// Checks a successfully parsed document for additional problems
pub type ErrorDetector<S> = Box<dyn Fn(&str, &S) -> Option<ParseError>>;

pub struct ParserOptions<S = Document> {
    /// Blank the value of every `on*` attribute
    pub disallow_active_attributes: bool,
    /// The document is served over https. Enables the mixed content warnings.
    pub https_context: bool,
    /// Run in order after a parse without errors. The first one that reports something wins.
    pub error_detectors: Vec<ErrorDetector<S>>,
}

impl<S> Default for ParserOptions<S> {
    fn default() -> Self {
        Self {
            disallow_active_attributes: false,
            https_context: false,
            error_detectors: Vec::new(),
        }
    }
}

/// Everything a parse produced. The document is incomplete when the parse failed.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct ParseOutput<S = Document> {
    #[serde(skip)]
    pub document: S,
    pub contexts: Vec<ContextRecord>,
    /// `None` when there are no warnings, which serializes as `false`
    #[serde(serialize_with = "warnings_or_false")]
    pub warnings: Option<Vec<ParseError>>,
    pub error: Option<ParseError>,
}

fn warnings_or_false<S: Serializer>(warnings: &Option<Vec<ParseError>>, serializer: S) -> Result<S::Ok, S::Error> {
    match warnings {
        Some(warnings) => warnings.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

/// Parses `source` into the given sink
pub fn parse_with<S: TreeSink>(sink: S, source: &str, options: &ParserOptions<S>) -> ParseOutput<S> {
    let mut stream = Stream::new(source);
    let dom = DomBuilder::new(sink, options.disallow_active_attributes);
    let mut parser = HtmlParser::new(&mut stream, dom, options.https_context);

    let result = parser.parse();
    let warnings = parser.take_warnings();
    let (document, contexts) = parser.into_builder().into_parts();

    let mut error = result.err();
    if let Some(err) = &error {
        log::debug!("parse failed: {err}");
    }

    let warnings = if error.is_none() && !warnings.is_empty() {
        Some(warnings)
    } else {
        None
    };

    for detector in &options.error_detectors {
        if error.is_some() {
            break;
        }
        error = detector(source, &document);
    }

    ParseOutput {
        document,
        contexts,
        warnings,
        error,
    }
}

/// Parses `source` into a new [`Document`]
pub fn parse_html(source: &str, options: &ParserOptions) -> ParseOutput {
    parse_with(Document::new(), source, options)
}

/// Returns the first problem in `source`, if any
pub fn find_error(source: &str) -> Option<ParseError> {
    parse_html(source, &ParserOptions::default()).error
}
