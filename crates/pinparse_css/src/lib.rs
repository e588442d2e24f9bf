//! Strict CSS parser
//!
//! The parser reads the contents of a `<style>` element straight from the document stream and
//! stops at the first authoring mistake. On success it hands back the raw CSS text together with
//! the rules, declarations and comments it found, each tagged with its source interval.
use crate::parser::State;
use crate::parser_config::ParserConfig;
use crate::stylesheet::{CssBlock, CssParseInfo, CssRule};
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::{SourceInterval, Stream};

pub mod parser;
pub mod parser_config;
pub mod properties;
pub mod stylesheet;

pub struct CssParser<'stream> {
    /// Stream shared with the surrounding document parser
    stream: &'stream mut Stream,
    /// The parser configuration as given
    config: ParserConfig,
    /// Rules whose declaration block has been closed
    rules: Vec<CssRule>,
    /// Intervals of every comment stripped from a selector, property or value
    comments: Vec<SourceInterval>,
    /// Rule that is currently being filled with declarations
    current_rule: Option<CssRule>,
    /// True once an `@media` or `@keyframes` header was seen. Inside such a block a selector may
    /// run up to the end of the style element.
    nested: bool,
    /// Non-fatal problems found so far
    warnings: Vec<ParseError>,
    /// True when the CSS is a style sheet of its own instead of the contents of a `<style>`
    /// element. The end of the stream is then a valid end of the sheet.
    standalone: bool,
}

impl<'stream> CssParser<'stream> {
    /// Creates a new parser on top of the given stream so only `parse()` needs to be called.
    pub fn new(stream: &'stream mut Stream, config: ParserConfig) -> Self {
        Self {
            stream,
            config,
            rules: Vec::new(),
            comments: Vec::new(),
            current_rule: None,
            nested: false,
            warnings: Vec::new(),
            standalone: false,
        }
    }

    /// Parses a standalone style sheet, which may simply run up to the end of the data. Warnings
    /// are dropped.
    pub fn parse_str(data: &str, config: ParserConfig) -> ParseResult<CssBlock> {
        let mut stream = Stream::new(data);
        let mut parser = CssParser::new(&mut stream, config);
        parser.standalone = true;
        parser.parse()
    }

    /// Parses the contents of a style element from the current position of the stream. The block
    /// has to end with a `</`. Returns the block and any warnings.
    pub fn parse_stream(stream: &mut Stream, config: ParserConfig) -> ParseResult<(CssBlock, Vec<ParseError>)> {
        let mut parser = CssParser::new(stream, config);
        let block = parser.parse()?;
        Ok((block, parser.take_warnings()))
    }

    /// Parses until the style block ends at a `</`, or at the end of the stream for a standalone
    /// sheet.
    pub fn parse(&mut self) -> ParseResult<CssBlock> {
        self.rules.clear();
        self.comments.clear();
        self.current_rule = None;
        self.nested = false;

        let start = self.stream.position();
        self.stream.mark_token_start_after_space();
        log::trace!("css block starts at {start}");

        let mut state = Some(State::BlockType);
        while let Some(current) = state {
            state = self.step(current)?;
        }

        let end = self.stream.position();
        log::debug!("css block {start}..{end} holds {} rules", self.rules.len());

        Ok(CssBlock {
            value: self.stream.slice(start, end),
            parse_info: CssParseInfo {
                start,
                end,
                rules: std::mem::take(&mut self.rules),
                comments: std::mem::take(&mut self.comments),
            },
        })
    }

    /// Hands out the warnings collected so far
    pub fn take_warnings(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.warnings)
    }

    fn warn(&mut self, warning: ParseError) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}
