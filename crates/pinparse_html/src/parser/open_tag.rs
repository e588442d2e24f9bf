use crate::dom_builder::Context;
use crate::elements::{is_active_content, is_known_svg_element, is_supported_attribute_namespace, is_void_element};
use crate::entities::replace_entity_refs;
use crate::node::{AttributeParseInfo, TextParseInfo};
use crate::parser::{is_name_char, is_name_start_char, HtmlParser};
use crate::tree_sink::TreeSink;
use cow_utils::CowUtils;
use pinparse_css::parser_config::ParserConfig;
use pinparse_css::CssParser;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::Character::Ch;
use pinparse_shared::stream::{TagInterval, Token};

impl<S: TreeSink> HtmlParser<'_, S> {
    /// Reads the rest of an open tag after its name: attributes up to the closing `>` or `/>`.
    /// The contents of style, script and textarea elements are read here as well.
    pub(crate) fn parse_end_open_tag(&mut self, tag_name: &str) -> ParseResult<()> {
        log::trace!("parse_end_open_tag <{tag_name}>");

        let tag_mark = self.stream.position();
        let mut start_mark = self.stream.position();

        while !self.stream.end() {
            if self.stream.eat(is_name_start_char).is_some() {
                self.stream.eat_while(is_name_char);
                self.parse_attribute(tag_name)?;
            } else if self.stream.eat_space() {
                self.stream.make_token();
                start_mark = self.stream.position();
            } else if self.stream.peek() == Ch('>') || self.stream.match_str("/>", false, false) {
                return self.finish_open_tag(tag_name);
            } else {
                return Err(self.malformed_open_tag(tag_name, tag_mark, start_mark));
            }
        }
        Ok(())
    }

    fn finish_open_tag(&mut self, tag_name: &str) -> ParseResult<()> {
        let self_closing = self.stream.match_str("/>", true, false);
        if self_closing {
            if !self.parsing_svg && !is_void_element(tag_name) {
                let start = self.current_open_tag().start;
                return Err(ParseError::self_closing_non_void_element(
                    tag_name,
                    start,
                    self.stream.position(),
                ));
            }
        } else {
            self.stream.next();
        }

        let end = self.stream.make_token_or_empty().interval.end;
        if let Some(info) = self.dom.current_parse_info_mut() {
            info.open_tag.end = Some(end);
        }

        if (self_closing && is_known_svg_element(tag_name)) || is_void_element(tag_name) {
            self.dom.pop_element();
        }

        self.track_active_element(tag_name);

        if !self.stream.end() && tag_name == "style" {
            self.parse_style()?;
        }

        match tag_name {
            "script" => {
                self.dom.push_context(Context::Javascript, self.stream.position());
                self.parse_raw_text(tag_name)?;
                self.dom.push_context(Context::Html, self.stream.position());
            }
            "textarea" => {
                self.dom.push_context(Context::Text, self.stream.position());
                self.parse_raw_text(tag_name)?;
                self.dom.push_context(Context::Html, self.stream.position());
            }
            _ => {}
        }

        self.close_before_parent(tag_name);
        Ok(())
    }

    /// Hands the stream to the CSS parser and stores the style sheet as the text of the element
    fn parse_style(&mut self) -> ParseResult<()> {
        self.dom.push_context(Context::Css, self.stream.position());

        let config = ParserConfig {
            https_context: self.https_context,
        };
        let mut css = CssParser::new(&mut *self.stream, config);
        let block = css.parse()?;
        let warnings = css.take_warnings();
        self.warnings.extend(warnings);

        self.dom.push_context(Context::Html, self.stream.position());
        self.dom.text(&block.value, TextParseInfo::Css(block.parse_info));
        Ok(())
    }

    /// Works out what is wrong with an open tag that has neither a valid attribute nor an end
    fn malformed_open_tag(&mut self, tag_name: &str, tag_mark: usize, start_mark: usize) -> ParseError {
        self.stream
            .eat_while(|c| !matches!(c, '\'' | '"' | '=' | '<' | '>') && !c.is_whitespace());

        if let Some(mut token) = self.stream.make_token() {
            token.interval.start = start_mark;
            return ParseError::invalid_attr_name(&token);
        }

        self.stream.set_token_start(tag_mark);
        self.stream.make_token();

        if let Ch(quote @ ('"' | '\'')) = self.stream.peek() {
            self.stream.next();
            self.stream.eat_while(|c| c != quote);
            self.stream.next();
            let token = self.stream.make_token_or_empty();
            return ParseError::unbound_attribute_value(&token);
        }

        let start = self.current_open_tag().start;
        ParseError::unterminated_open_tag(tag_name, start, self.stream.position())
    }

    /// Reads one attribute. The stream is right behind the attribute name.
    fn parse_attribute(&mut self, tag_name: &str) -> ParseResult<()> {
        let mut name = self.stream.make_token_or_empty();
        name.value = name.value.cow_to_lowercase().into_owned();
        log::trace!("parse_attribute {}", name.value);

        if name.value.contains(':') {
            let mut parts = name.value.split(':');
            let namespace = parts.next().unwrap_or_default();
            if parts.count() > 1 {
                return Err(ParseError::multiple_attr_namespaces(&name));
            }
            if !is_supported_attribute_namespace(namespace) {
                return Err(ParseError::unsupported_attr_namespace(&name));
            }
        }

        self.stream.eat_space();

        if self.stream.peek() != Ch('=') {
            self.stream.make_token();
            let parse_info = AttributeParseInfo {
                name: name.interval,
                value: None,
            };
            self.dom.attribute(&name.value, "", parse_info);
            return Ok(());
        }

        self.stream.next();
        self.stream.eat_space();
        self.stream.make_token();

        let quote = self.stream.next();
        if !quote.is_quote() {
            let start = if self.stream.end() {
                self.stream.position()
            } else {
                self.stream.token_start()
            };
            return Err(ParseError::unquoted_attr_value(start));
        }

        let quote = char::from(quote);
        self.stream.eat_while(|c| c != quote);
        if self.stream.next() != Ch(quote) {
            let open_tag = self.current_open_tag();
            return Err(ParseError::unterminated_attr_value(
                tag_name,
                open_tag,
                &name,
                self.stream.token_start(),
            ));
        }

        let value = self.stream.make_token_or_empty();
        if self.https_context && value.value.contains("http:") && is_active_content(tag_name, &name.value) {
            let warning = ParseError::http_link_from_https_page(tag_name, self.current_open_tag(), &name, value.interval);
            self.warn(warning);
        }

        let unquoted = unquote(&value);
        let parse_info = AttributeParseInfo {
            name: name.interval,
            value: Some(value.interval),
        };
        self.dom.attribute(&name.value, &replace_entity_refs(&unquoted), parse_info);
        Ok(())
    }

    fn current_open_tag(&self) -> TagInterval {
        self.dom.current_parse_info().map(|info| info.open_tag).unwrap_or_default()
    }
}

/// Value of a quoted attribute token without its quotes
fn unquote(token: &Token) -> String {
    let len = token.char_len();
    token.value.chars().skip(1).take(len.saturating_sub(2)).collect()
}
