use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;

pub const CHAR_LF: char = '\u{000A}';

/// Defines a single element in the stream. This is either a character of the source text, or the
/// end-of-stream marker that is returned once every character has been consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Character {
    /// Standard character
    Ch(char),
    /// Stream is fully consumed
    StreamEnd,
}

use Character::*;

/// Converts the given character to a char. The end-of-stream marker is converted to 0x0000
impl From<Character> for char {
    fn from(c: Character) -> Self {
        match c {
            Ch(c) => c,
            StreamEnd => 0x0000 as char,
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Ch(ch) => write!(f, "{ch}"),
            StreamEnd => write!(f, "end of stream"),
        }
    }
}

impl Character {
    /// Returns true when the character is a whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Ch(c) if c.is_whitespace())
    }

    /// Returns true when the character is one of the two attribute quote characters
    pub fn is_quote(&self) -> bool {
        matches!(self, Ch('"' | '\''))
    }
}

/// A half-open range of character offsets into the source text. Every record the parsers produce
/// points back into the source with one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SourceInterval {
    pub start: usize,
    pub end: usize,
}

impl SourceInterval {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "interval {start}..{end} runs backwards");
        Self { start, end }
    }

    /// Number of characters covered by the interval
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the characters of `source` that this interval covers
    #[must_use]
    pub fn slice(&self, source: &str) -> String {
        source.chars().skip(self.start).take(self.len()).collect()
    }
}

impl fmt::Display for SourceInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Interval of an open tag. The end stays unknown until the closing `>` has been read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TagInterval {
    pub start: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl TagInterval {
    #[must_use]
    pub fn open(start: usize) -> Self {
        Self { start, end: None }
    }

    /// Returns the full interval once the tag has been closed
    #[must_use]
    pub fn interval(&self) -> Option<SourceInterval> {
        self.end.map(|end| SourceInterval::new(self.start, end))
    }
}

/// A run of consumed characters together with the interval they were read from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub interval: SourceInterval,
}

impl Token {
    /// Number of characters in the token value
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Character cursor over a source text. The HTML parser and the CSS parser walk the same stream
/// so that every offset they record is relative to the start of the document.
///
/// Next to the current position the stream keeps a token start mark. Everything consumed between
/// the mark and the current position is what `make_token()` hands out.
pub struct Stream {
    /// Source text, one entry per character so that offsets are character indices
    chars: Vec<char>,
    /// Current position in the stream
    pos: usize,
    /// Position where the current token started
    token_start: usize,
}

impl Stream {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            token_start: 0,
        }
    }

    /// Current position in the stream
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Moves the token start mark to an arbitrary earlier position
    pub fn set_token_start(&mut self, pos: usize) {
        self.token_start = pos.min(self.chars.len());
    }

    /// Total number of characters in the stream
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true when every character has been consumed
    #[must_use]
    pub fn end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Returns the current character without consuming it
    #[must_use]
    pub fn peek(&self) -> Character {
        match self.chars.get(self.pos) {
            Some(c) => Ch(*c),
            None => StreamEnd,
        }
    }

    /// Consumes and returns the current character. At the end of the stream nothing is consumed.
    pub fn next(&mut self) -> Character {
        let c = self.peek();
        if c != StreamEnd {
            self.pos += 1;
        }
        c
    }

    /// Moves the position back by `n` characters, never past the start of the stream
    pub fn rewind(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Returns the next `len` characters without consuming them
    #[must_use]
    pub fn substream(&self, len: usize) -> String {
        self.chars.iter().skip(self.pos).take(len).collect()
    }

    /// Returns the characters between `start` and `end`
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Consumes the current character when it satisfies the matcher
    pub fn eat<F>(&mut self, matcher: F) -> Option<char>
    where
        F: Fn(char) -> bool,
    {
        match self.peek() {
            Ch(c) if matcher(c) => {
                self.pos += 1;
                Some(c)
            }
            _ => None,
        }
    }

    /// Consumes characters for as long as they satisfy the matcher. Returns true when at least
    /// one character was consumed.
    pub fn eat_while<F>(&mut self, matcher: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        let start = self.pos;
        while self.eat(&matcher).is_some() {}
        self.pos > start
    }

    /// Consumes any whitespace
    pub fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    /// Like `eat_while()`, but any `/* ... */` block comment that starts inside the matched run is
    /// swallowed whole, whatever the matcher thinks of the characters inside the comment. The first
    /// `*/` closes the comment. An unclosed comment runs to the end of the stream.
    pub fn eat_css_while<F>(&mut self, matcher: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        let mut eaten = false;
        while let Some(c) = self.eat(&matcher) {
            eaten = true;
            if c == '/' && self.peek() == Ch('*') {
                self.next();
                self.skip_comment_body();
            }
        }
        eaten
    }

    fn skip_comment_body(&mut self) {
        loop {
            match self.next() {
                StreamEnd => return,
                Ch('*') if self.peek() == Ch('/') => {
                    self.next();
                    return;
                }
                _ => {}
            }
        }
    }

    /// Scans a CSS `content` value. The scan stops at the first `;` that is not inside a quoted
    /// string, and the position is backed up by one so the caller reads the terminator itself.
    /// A quote only closes the string when the character before it is not a backslash.
    pub fn find_content_end(&mut self) {
        let mut quoted: Option<char> = None;
        let mut previous: Option<char> = None;

        while !self.end() {
            let c = char::from(self.next());
            if c == '"' || c == '\'' {
                match quoted {
                    None => quoted = Some(c),
                    Some(q) if q == c && previous != Some('\\') => quoted = None,
                    _ => {}
                }
                continue;
            }
            if c == ';' && quoted.is_none() {
                break;
            }
            previous = Some(c);
        }

        self.rewind(1);
    }

    /// When the stream is positioned at `/*`, skips the whole comment and any whitespace that
    /// follows it. The token start mark is left alone.
    pub fn strip_comment_block(&mut self) {
        if self.substream(2) != "/*" {
            return;
        }
        self.pos += 2;
        while !self.end() {
            if self.substream(2) == "*/" {
                self.pos += 2;
                break;
            }
            self.pos += 1;
        }
        self.eat_space();
    }

    pub fn mark_token_start(&mut self) {
        self.token_start = self.pos;
    }

    /// Skips whitespace and then marks the token start
    pub fn mark_token_start_after_space(&mut self) {
        self.eat_space();
        self.mark_token_start();
    }

    /// Returns everything consumed since the token start mark and moves the mark to the current
    /// position. Returns `None`, and leaves the mark alone, when nothing was consumed.
    pub fn make_token(&mut self) -> Option<Token> {
        if self.pos == self.token_start {
            return None;
        }
        Some(self.take_token())
    }

    /// Same as `make_token()`, but yields an empty token at the current position when nothing was
    /// consumed.
    pub fn make_token_or_empty(&mut self) -> Token {
        self.take_token()
    }

    fn take_token(&mut self) -> Token {
        let start = self.token_start.min(self.pos);
        let token = Token {
            value: self.slice(start, self.pos),
            interval: SourceInterval::new(start, self.pos),
        };
        self.token_start = self.pos;
        token
    }

    /// Checks whether the stream continues with `needle`. When `consume` is set, a match is also
    /// consumed. `case_fold` compares both sides in lower case.
    pub fn match_str(&mut self, needle: &str, consume: bool, case_fold: bool) -> bool {
        let mut len = 0;
        for (offset, expected) in needle.chars().enumerate() {
            let Some(&actual) = self.chars.get(self.pos + offset) else {
                return false;
            };
            let same = if case_fold {
                actual.to_lowercase().eq(expected.to_lowercase())
            } else {
                actual == expected
            };
            if !same {
                return false;
            }
            len += 1;
        }

        if consume {
            self.pos += len;
        }
        true
    }

    /// Peeks at the next tag: reads up to and including the next `>`, matches `pattern` against
    /// that text and returns the requested capture group. The position is restored afterwards.
    #[must_use]
    pub fn find_next(&mut self, pattern: &Regex, group: usize) -> Option<String> {
        let saved = self.pos;
        self.eat_while(|c| c != '>');
        self.next();
        let text = self.slice(saved, self.pos);
        self.pos = saved;

        pattern
            .captures(&text)
            .and_then(|captures| captures.get(group))
            .map(|m| m.as_str().to_string())
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("len", &self.chars.len())
            .field("pos", &self.pos)
            .field("token_start", &self.token_start)
            .finish()
    }
}
