use crate::dom_builder::{Context, DomBuilder};
use crate::elements::{is_custom_element, is_known_html_element, is_known_svg_element, is_void_element};
use crate::entities::replace_entity_refs;
use crate::node::{ElementParseInfo, TextParseInfo, SVG_NAMESPACE};
use crate::parser::omission::TagOmission;
use crate::tree_sink::TreeSink;
use cow_utils::CowUtils;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::Character::Ch;
use pinparse_shared::stream::{SourceInterval, Stream};

mod omission;
mod open_tag;
mod raw_text;

const HTML5_DOCTYPE: &str = "<!DOCTYPE html>";

/// Returns true for characters an attribute name may start with
pub(crate) fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z' | '_'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
    )
}

/// Returns true for characters an attribute name may continue with
pub(crate) fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '0'..='9' | '-' | '.' | ':'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}'
        )
}

fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Strict HTML parser. It walks the stream once, hands every construct it recognises to the DOM
/// builder and stops at the first authoring mistake. The contents of `<style>` elements are
/// handed off to the CSS parser, which continues on the same stream.
pub struct HtmlParser<'stream, S: TreeSink> {
    stream: &'stream mut Stream,
    dom: DomBuilder<S>,
    /// The document is served over https
    https_context: bool,
    /// Inside an `<svg>` element only SVG element names are accepted
    parsing_svg: bool,
    /// Bookkeeping for elements whose close tag may be left out
    omission: TagOmission,
    /// Non-fatal problems found so far, in the order they were found
    warnings: Vec<ParseError>,
}

impl<'stream, S: TreeSink> HtmlParser<'stream, S> {
    pub fn new(stream: &'stream mut Stream, dom: DomBuilder<S>, https_context: bool) -> Self {
        Self {
            stream,
            dom,
            https_context,
            parsing_svg: false,
            omission: TagOmission::default(),
            warnings: Vec::new(),
        }
    }

    /// Parses the whole stream. Whatever was built up to a failure stays in the DOM builder.
    pub fn parse(&mut self) -> ParseResult<()> {
        if self.stream.match_str(HTML5_DOCTYPE, true, true) {
            let end = self.stream.position();
            log::trace!("html5 doctype at 0..{end}");
            self.dom.set_doctype(SourceInterval::new(0, end));
            self.stream.mark_token_start();
        }

        while !self.stream.end() {
            if self.stream.peek() == Ch('<') {
                self.build_text_node();
                self.parse_start_tag()?;
            } else {
                self.stream.next();
            }
        }

        self.build_text_node();

        if !self.dom.is_at_root() {
            return Err(self.unclosed_current_tag());
        }

        Ok(())
    }

    /// Hands out the warnings collected so far
    pub fn take_warnings(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.warnings)
    }

    /// Gives back the DOM builder, complete or not
    pub fn into_builder(self) -> DomBuilder<S> {
        self.dom
    }

    fn warn(&mut self, warning: ParseError) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    fn build_text_node(&mut self) {
        if let Some(token) = self.stream.make_token() {
            let text = replace_entity_refs(&token.value);
            self.dom.text(&text, TextParseInfo::Text(token.interval));
        }
    }

    fn unclosed_current_tag(&self) -> ParseError {
        let name = self.dom.current_tag_name().unwrap_or_default();
        let open_tag = self.dom.current_parse_info().map(|info| info.open_tag).unwrap_or_default();
        ParseError::unclosed_tag(name, open_tag)
    }

    /// Entry point for anything that starts with `<`: comments, close tags and open tags
    fn parse_start_tag(&mut self) -> ParseResult<()> {
        log::trace!("parse_start_tag at {}", self.stream.position());

        let lt = self.stream.next();
        debug_assert_eq!(lt, Ch('<'), "start tag must begin at '<'");

        if self.stream.match_str("!--", true, false) {
            self.dom.push_context(Context::Text, self.stream.position());
            self.parse_comment()?;
            self.dom.push_context(Context::Html, self.stream.position());
            return Ok(());
        }

        self.stream.eat(|c| c == '/');
        self.stream.eat_while(is_tag_name_char);
        let token = self.stream.make_token_or_empty();
        let tag_name: String = token.value.chars().skip(1).collect::<String>().cow_to_lowercase().into_owned();

        if tag_name == "svg" {
            self.parsing_svg = true;
        }

        if let Some(close_name) = tag_name.strip_prefix('/') {
            return self.parse_close_tag(close_name, token.interval);
        }

        let valid = if tag_name.is_empty() {
            false
        } else if self.parsing_svg {
            is_known_svg_element(&tag_name)
        } else {
            is_known_html_element(&tag_name) || is_custom_element(&tag_name)
        };
        if !valid {
            return Err(ParseError::invalid_tag_name(&tag_name, token.interval));
        }

        self.close_active_element(&tag_name);
        self.omission.parent = Some(self.dom.current_node());

        let namespace = self.parsing_svg.then_some(SVG_NAMESPACE);
        self.dom
            .push_element(&tag_name, ElementParseInfo::opened_at(token.interval.start), namespace);

        if !self.stream.end() {
            self.parse_end_open_tag(&tag_name)?;
        }
        Ok(())
    }

    /// Checks a close tag against the current element and closes it. `token` covers the `</name`
    /// part of the tag.
    fn parse_close_tag(&mut self, name: &str, token: SourceInterval) -> ParseResult<()> {
        log::trace!("parse_close_tag </{name}>");

        self.omission.active = None;
        if name == "svg" {
            self.parsing_svg = false;
        }

        if is_void_element(name) {
            return Err(ParseError::close_tag_for_void_element(name, token));
        }
        if self.dom.is_at_root() {
            return Err(ParseError::unexpected_close_tag(name, token));
        }

        let open_name = self.dom.current_tag_name().unwrap_or_default();
        if open_name != name {
            let open_tag = self.dom.current_parse_info().map(|info| info.open_tag).unwrap_or_default();
            return Err(ParseError::mismatched_close_tag(open_name, open_tag, name, token));
        }

        self.parse_end_close_tag(name, token.start)
    }

    /// Reads the `>` of a close tag. Anything but whitespace before it is an error.
    fn parse_end_close_tag(&mut self, name: &str, start: usize) -> ParseResult<()> {
        self.stream.eat_space();
        if self.stream.next() != Ch('>') {
            let has_attribute = self.stream.eat(is_name_start_char).is_some();
            let end = if self.stream.end() {
                self.stream.position()
            } else {
                self.stream.token_start()
            };
            let close_tag = SourceInterval::new(start, end.max(start));
            return Err(if has_attribute {
                ParseError::attribute_in_closing_tag(name, close_tag)
            } else {
                ParseError::unterminated_close_tag(name, close_tag)
            });
        }

        let end = self.stream.make_token_or_empty().interval.end;
        if let Some(info) = self.dom.current_parse_info_mut() {
            info.close_tag = Some(SourceInterval::new(start, end));
        }
        self.dom.pop_element();
        Ok(())
    }
}
