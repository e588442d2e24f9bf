use crate::parser::State;
use crate::CssParser;
use lazy_static::lazy_static;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::Character::Ch;
use regex::Regex;

lazy_static! {
    static ref KEYFRAMES: Regex = Regex::new(r"@(-[^-]+-)?keyframes").expect("valid regex");
    static ref MEDIA_QUERY: Regex = Regex::new(r"@media\s*\([^{)]+\)").expect("valid regex");
}

impl CssParser<'_> {
    /// Decides what kind of block comes next. A rule that was completed in the meantime is
    /// stored first.
    pub(crate) fn parse_block_type(&mut self) -> ParseResult<Option<State>> {
        log::trace!("parse_block_type");

        if let Some(rule) = self.current_rule.take() {
            self.rules.push(rule);
        }

        self.stream.strip_comment_block();

        if self.stream.peek() != Ch('@') {
            return Ok(Some(State::Selector));
        }

        self.stream.eat_css_while(|c| c != '{');
        let token = self.stream.make_token_or_empty();
        let name = token.value.trim();

        if KEYFRAMES.is_match(name) || MEDIA_QUERY.is_match(name) {
            log::debug!("entering at-rule {name}");
            self.stream.next();
            self.nested = true;
            return Ok(Some(State::Selector));
        }

        if name == "@font-face" {
            self.stream.rewind(token.char_len());
            self.stream.mark_token_start();
            return Ok(Some(State::Selector));
        }

        Err(ParseError::unknown_css_keyword(token.interval.start, token.interval.end, name))
    }
}
