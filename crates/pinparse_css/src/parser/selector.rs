use crate::parser::State;
use crate::stylesheet::{CssDeclarations, CssRule};
use crate::CssParser;
use pinparse_shared::errors::{ParseError, ParseResult};
use pinparse_shared::stream::Character::Ch;

impl CssParser<'_> {
    /// Reads a selector up to its `{`. The end of the style block is also detected here.
    pub(crate) fn parse_selector(&mut self) -> ParseResult<Option<State>> {
        log::trace!("parse_selector");

        self.stream.eat_css_while(|c| !matches!(c, '{' | ';' | '}' | '<'));
        let token = self.stream.make_token();
        let peek = self.stream.peek();

        // Closing brace of an at-rule body
        if peek == Ch('}') {
            self.stream.next();
            return Ok(Some(State::BlockType));
        }

        let Some(token) = token else {
            let pos = self.stream.position();
            if !self.stream.end() && peek == Ch('<') {
                if self.stream.substream(2) != "</" {
                    return Err(ParseError::html_code_in_css_block(pos.saturating_sub(1), pos));
                }
                return Ok(None);
            }
            if self.stream.end() && self.standalone {
                return Ok(None);
            }
            return Err(ParseError::missing_css_selector(pos.saturating_sub(1), pos));
        };

        let selector = self.filter_comments(token)?;
        if selector.value.is_empty() {
            return Ok(Some(State::BlockType));
        }

        self.current_rule = Some(CssRule {
            selector: selector.clone(),
            declarations: CssDeclarations::default(),
        });

        if self.stream.end() || peek == Ch('<') {
            if !self.nested {
                return Err(ParseError::unfinished_css_selector(
                    selector.start,
                    selector.end,
                    &selector.value,
                ));
            }
            return Ok(None);
        }

        match self.stream.next() {
            Ch('{') => {
                let opened_at = self.stream.position() - 1;
                if let Some(rule) = self.current_rule.as_mut() {
                    rule.declarations.start = Some(opened_at);
                }
                let anchor = selector.start;
                Ok(Some(State::Declaration {
                    selector,
                    anchor,
                    value: None,
                }))
            }
            Ch(';') | Ch('}') => Err(ParseError::missing_css_block_opener(
                selector.start,
                selector.end,
                &selector.value,
            )),
            found => Err(self.unexpected(&selector, "{, }, ; or :", found)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::tests::parse_style;
    use crate::parser_config::ParserConfig;
    use crate::CssParser;
    use pinparse_shared::errors::ParseError;
    use pinparse_shared::stream::{SourceInterval, Stream};
    use test_case::test_case;

    #[test]
    fn selector_interval() {
        let block = parse_style("  body > p.intro { color: pink; }").unwrap();
        let rule = &block.parse_info.rules[0];
        assert_eq!(rule.selector.value, "body > p.intro");
        assert_eq!(rule.selector.start, 2);
        assert_eq!(rule.selector.end, 16);
        assert_eq!(rule.declarations.start, Some(17));
        assert_eq!(rule.declarations.end, Some(33));
    }

    #[test]
    fn unfinished_selector() {
        let err = parse_style("body").unwrap_err();
        assert_eq!(err, ParseError::unfinished_css_selector(0, 4, "body"));
    }

    #[test_case("body; color: red; }", 0, 4 ; "semicolon")]
    #[test_case("p color: red; }", 0, 12 ; "selector eats the declaration")]
    fn missing_block_opener(css: &str, start: usize, end: usize) {
        let err = parse_style(css).unwrap_err();
        assert_eq!(err.kind(), "MISSING_CSS_BLOCK_OPENER");
        assert_eq!(err.cursor(), start);
        let ParseError::MissingCssBlockOpener { css_selector, .. } = err else {
            unreachable!("checked the kind above");
        };
        assert_eq!(css_selector.end, end);
    }

    #[test]
    fn html_inside_style() {
        let err = parse_style("p { color: red; }\n<p>").unwrap_err();
        assert_eq!(err, ParseError::html_code_in_css_block(17, 18));
    }

    #[test_case("body { color: red; }" ; "single rule")]
    #[test_case("body { color: red; }\n" ; "trailing newline")]
    #[test_case("h1 { margin: 0; }\n\np > a { color: blue; }\n" ; "two rules")]
    #[test_case("" ; "empty")]
    #[test_case("  \n" ; "only whitespace")]
    fn standalone_sheet_ends_with_the_data(css: &str) {
        let block = CssParser::parse_str(css, ParserConfig::default()).unwrap();
        assert_eq!(block.value, css);
        assert!(block.parse_info.comments.is_empty());
    }

    #[test]
    fn standalone_sheet_with_only_a_comment() {
        let block = CssParser::parse_str("/* only */", ParserConfig::default()).unwrap();
        assert!(block.parse_info.rules.is_empty());
        assert_eq!(block.parse_info.comments, vec![SourceInterval::new(0, 10)]);
    }

    #[test]
    fn standalone_sheet_keeps_its_rules() {
        let block = CssParser::parse_str("body { color: red; }\n", ParserConfig::default()).unwrap();
        assert_eq!(block.parse_info.rules.len(), 1);
        assert_eq!(block.parse_info.rules[0].selector.value, "body");
        assert_eq!(block.parse_info.end, 21);
    }

    #[test]
    fn standalone_sheet_still_needs_finished_rules() {
        let err = CssParser::parse_str("body", ParserConfig::default()).unwrap_err();
        assert_eq!(err, ParseError::unfinished_css_selector(0, 4, "body"));
    }

    #[test]
    fn style_contents_need_a_close_tag() {
        let mut stream = Stream::new("body { color: red; }");
        let err = CssParser::parse_stream(&mut stream, ParserConfig::default()).unwrap_err();
        assert_eq!(err, ParseError::missing_css_selector(19, 20));
    }

    #[test]
    fn empty_style_block() {
        let block = parse_style("").unwrap();
        assert_eq!(block.value, "");
        assert!(block.parse_info.rules.is_empty());
        assert_eq!(block.parse_info.start, 0);
        assert_eq!(block.parse_info.end, 0);
    }
}
