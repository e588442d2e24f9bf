/// ParserConfig holds the configuration for the CSS parser
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// The document is served over https, so `url(http://...)` values are reported as mixed
    /// active content
    pub https_context: bool,
}

impl ParserConfig {
    #[must_use]
    pub fn https() -> Self {
        Self { https_context: true }
    }
}
