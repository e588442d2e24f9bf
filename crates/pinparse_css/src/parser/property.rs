use crate::parser::State;
use crate::properties::{is_known_property, is_well_formed_property_name};
use crate::stylesheet::CssText;
use crate::CssParser;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::Character::Ch;

impl CssParser<'_> {
    /// Reads a property name up to its colon
    pub(crate) fn parse_property(&mut self, selector: CssText, anchor: usize) -> ParseResult<Option<State>> {
        log::trace!("parse_property");

        self.stream.eat_css_while(|c| !matches!(c, '{' | '}' | '<' | ';' | ':'));
        let Some(token) = self.stream.make_token() else {
            let end = anchor + selector.char_len();
            return Err(ParseError::missing_css_property(anchor, end, &selector.value));
        };

        let property = self.filter_comments(token)?;
        if property.value.is_empty() {
            return Ok(Some(State::Declaration {
                selector,
                anchor,
                value: None,
            }));
        }

        let next = self.stream.next();

        if next == Ch('{') {
            return Err(ParseError::missing_css_block_closer(anchor, property.start, &selector.value));
        }

        if (self.stream.end() && next != Ch(':')) || next == Ch('<') || next == Ch('}') {
            return Err(ParseError::unfinished_css_property(
                property.start,
                property.end,
                &property.value,
            ));
        }

        match next {
            Ch(':') => {
                if !is_well_formed_property_name(&property.value) || !is_known_property(&property.value) {
                    return Err(ParseError::invalid_css_property_name(
                        property.start,
                        property.end,
                        &property.value,
                    ));
                }
                self.stream.mark_token_start_after_space();
                Ok(Some(State::Value { selector, property }))
            }
            Ch(';') => Err(ParseError::missing_css_value(
                property.start,
                property.end,
                Some(&property.value),
            )),
            found => Err(self.unexpected(&property, ":", found)),
        }
    }
}
