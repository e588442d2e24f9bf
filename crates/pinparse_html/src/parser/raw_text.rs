use crate::node::TextParseInfo;
use crate::parser::HtmlParser;
use crate::tree_sink::TreeSink;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::SourceInterval;

impl<S: TreeSink> HtmlParser<'_, S> {
    /// Reads a comment. The stream is right behind the `<!--`.
    pub(crate) fn parse_comment(&mut self) -> ParseResult<()> {
        log::trace!("parse_comment");

        while !self.stream.end() {
            if self.stream.match_str("-->", true, false) {
                let token = self.stream.make_token_or_empty();
                let len = token.char_len();
                let value: String = token.value.chars().take(len.saturating_sub(3)).skip(4).collect();
                self.dom.comment(&value, token.interval);
                return Ok(());
            }
            self.stream.next();
        }

        Err(ParseError::unterminated_comment(self.stream.token_start()))
    }

    /// Reads everything up to `</tag_name>` as plain text and closes the element. Nothing in
    /// between is parsed as markup.
    pub(crate) fn parse_raw_text(&mut self, tag_name: &str) -> ParseResult<()> {
        log::trace!("parse_raw_text <{tag_name}>");

        let close_tag = format!("</{tag_name}>");
        let close_len = close_tag.chars().count();
        let open_tag_end = self
            .dom
            .current_parse_info()
            .and_then(|info| info.open_tag.end)
            .unwrap_or_else(|| self.stream.position());

        self.stream.make_token();
        while !self.stream.end() {
            if self.stream.match_str(&close_tag, true, false) {
                let token = self.stream.make_token_or_empty();
                let text_len = token.char_len() - close_len;
                let text: String = token.value.chars().take(text_len).collect();

                let close = SourceInterval::new(open_tag_end + text_len, token.interval.end);
                if let Some(info) = self.dom.current_parse_info_mut() {
                    info.close_tag = Some(close);
                }
                let interval = SourceInterval::new(token.interval.start, token.interval.end - close.len());
                self.dom.text(&text, TextParseInfo::Text(interval));
                self.dom.pop_element();
                return Ok(());
            }
            self.stream.next();
        }

        Err(self.unclosed_current_tag())
    }
}
