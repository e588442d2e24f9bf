use crate::stylesheet::CssText;
use crate::CssParser;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::Character;

mod block_type;
mod comments;
mod declaration;
mod property;
mod selector;
mod value;

/// States of the CSS parser. A block is read as block-type, selector, declaration, property and
/// value, after which the parser goes back to either the declaration or the block-type state.
#[derive(Debug)]
pub(crate) enum State {
    BlockType,
    Selector,
    /// Inside a declaration block. `anchor` is the offset the previous selector or value started
    /// at and `value` is that previous value, if any.
    Declaration {
        selector: CssText,
        anchor: usize,
        value: Option<String>,
    },
    Property {
        selector: CssText,
        anchor: usize,
    },
    Value {
        selector: CssText,
        property: CssText,
    },
}

impl CssParser<'_> {
    /// Runs a single state and returns the next one. `None` means the style block has ended.
    pub(crate) fn step(&mut self, state: State) -> ParseResult<Option<State>> {
        match state {
            State::BlockType => self.parse_block_type(),
            State::Selector => self.parse_selector(),
            State::Declaration {
                selector,
                anchor,
                value,
            } => self.parse_declaration(selector, anchor, value),
            State::Property { selector, anchor } => self.parse_property(selector, anchor),
            State::Value { selector, property } => self.parse_value(selector, property),
        }
    }

    /// Error for a character no state knows what to do with
    fn unexpected(&self, token: &CssText, expected: &str, found: Character) -> ParseError {
        let msg = format!("expected {expected}, instead found {found}");
        log::debug!("uncaught css error at {}: {msg}", token.start);
        ParseError::uncaught_css_parse_error(token.start, token.end, &msg)
    }
}
