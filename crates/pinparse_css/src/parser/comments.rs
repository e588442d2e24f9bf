use crate::stylesheet::CssText;
use crate::CssParser;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::{SourceInterval, Token};

impl CssParser<'_> {
    /// Removes comments from a token. Every comment found is recorded, and the interval is
    /// narrowed past leading and trailing whitespace and past one comment at either edge.
    pub(crate) fn filter_comments(&mut self, token: Token) -> ParseResult<CssText> {
        let value = self.strip_comments(&token.value, token.interval.start)?;

        let leading = trimmed_edge(token.value.chars());
        let trailing = trimmed_edge(token.value.chars().rev());

        let start = token.interval.start + leading;
        let end = token.interval.end.saturating_sub(trailing).max(start);

        Ok(CssText { value, start, end })
    }

    /// Returns the text without its comments, trimmed. `offset` is the position of the text in
    /// the document and is used to record the comment intervals.
    pub(crate) fn strip_comments(&mut self, text: &str, offset: usize) -> ParseResult<String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let closes_at = |pos: usize| pos < len && chars[pos - 1] == '*' && chars[pos] == '/';

        let mut stripped = String::with_capacity(text.len());
        let mut pos = 0;
        while pos < len {
            if chars[pos] == '/' && pos + 1 < len && chars[pos + 1] == '*' {
                let comment_start = offset + pos;
                pos += 3;
                while pos + 1 < len && !closes_at(pos) {
                    pos += 1;
                }
                if !closes_at(pos) {
                    return Err(ParseError::unterminated_css_comment(comment_start));
                }
                self.comments.push(SourceInterval::new(comment_start, offset + pos + 1));
            } else {
                stripped.push(chars[pos]);
            }
            pos += 1;
        }

        Ok(stripped.trim().to_string())
    }
}

/// Number of characters at the start of `chars` taken up by whitespace followed by at most one
/// complete comment and the whitespace after it. Works on reversed input as well, since a
/// reversed comment still starts with `/*` and ends with `*/`.
fn trimmed_edge(chars: impl Iterator<Item = char>) -> usize {
    let chars: Vec<char> = chars.collect();
    let mut pos = chars.iter().take_while(|c| c.is_whitespace()).count();

    if chars.get(pos) == Some(&'/') && chars.get(pos + 1) == Some(&'*') {
        let body = pos + 2;
        let close = (body..chars.len().saturating_sub(1)).find(|&i| chars[i] == '*' && chars[i + 1] == '/');
        if let Some(close) = close {
            pos = close + 2;
            pos += chars[pos..].iter().take_while(|c| c.is_whitespace()).count();
        }
    }

    pos
}
