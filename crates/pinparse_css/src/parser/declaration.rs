use crate::parser::State;
use crate::stylesheet::CssText;
use crate::CssParser;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::Character::Ch;

impl CssParser<'_> {
    pub(crate) fn parse_declaration(
        &mut self,
        selector: CssText,
        anchor: usize,
        value: Option<String>,
    ) -> ParseResult<Option<State>> {
        log::trace!("parse_declaration");

        self.stream.mark_token_start_after_space();
        let peek = self.stream.peek();

        if peek == Ch('}') {
            self.stream.next();
            let closed_at = self.stream.position();
            if let Some(rule) = self.current_rule.as_mut() {
                rule.declarations.end = Some(closed_at);
            }
            self.stream.mark_token_start_after_space();
            return Ok(Some(State::BlockType));
        }

        if let Some(value) = value {
            if self.stream.end() || peek == Ch('<') {
                let end = anchor + value.chars().count();
                return Err(ParseError::missing_css_block_closer(anchor, end, &value));
            }
        }

        Ok(Some(State::Property { selector, anchor }))
    }
}
