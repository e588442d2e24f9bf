use crate::parser::State;
use crate::stylesheet::{CssDeclaration, CssText};
use crate::CssParser;
use lazy_static::lazy_static;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::Character::Ch;
use pinparse_shared::stream::SourceInterval;
use regex::Regex;

lazy_static! {
    static ref INSECURE_URL: Regex = Regex::new(r#",?\s*url\(\s*['"]?http://.+\)"#).expect("valid regex");
}

impl CssParser<'_> {
    /// Reads a value up to its terminating `;` or `}`
    pub(crate) fn parse_value(&mut self, selector: CssText, property: CssText) -> ParseResult<Option<State>> {
        log::trace!("parse_value");

        if property.value == "content" {
            self.stream.find_content_end();
        } else {
            self.stream.eat_css_while(|c| !matches!(c, '}' | '<' | ';'));
        }

        let Some(token) = self.stream.make_token() else {
            let end = property.start + property.char_len();
            return Err(ParseError::missing_css_value(property.start, end, Some(&property.value)));
        };

        let next = self.stream.next();
        let value = self.filter_comments(token)?;

        if value.value.is_empty() {
            let pos = self.stream.position();
            return Err(ParseError::missing_css_value(pos.saturating_sub(1), pos, None));
        }

        if (self.stream.end() && next != Ch(';')) || next == Ch('<') {
            return Err(ParseError::unfinished_css_value(value.start, value.end, &value.value));
        }

        if self.config.https_context && INSECURE_URL.is_match(&value.value) {
            let url_offset = value.value.find("url").map_or(0, |i| value.value[..i].chars().count());
            let interval = SourceInterval::new(value.start + url_offset, value.end);
            self.warn(ParseError::css_mixed_activecontent(
                &property.value,
                property.start,
                &value.value,
                interval,
            ));
        }

        match next {
            Ch(';') => {
                let anchor = value.start;
                let previous = value.value.clone();
                self.bind_declaration(property, value);
                self.stream.mark_token_start_after_space();
                Ok(Some(State::Declaration {
                    selector,
                    anchor,
                    value: Some(previous),
                }))
            }
            Ch('}') => {
                let closed_at = self.stream.position();
                if let Some(rule) = self.current_rule.as_mut() {
                    rule.declarations.end = Some(closed_at);
                }
                self.bind_declaration(property, value);
                self.stream.mark_token_start_after_space();
                Ok(Some(State::BlockType))
            }
            found => Err(self.unexpected(&value, "}, < or ;", found)),
        }
    }

    fn bind_declaration(&mut self, name: CssText, value: CssText) {
        if let Some(rule) = self.current_rule.as_mut() {
            rule.declarations.properties.push(CssDeclaration { name, value });
        }
    }
}
