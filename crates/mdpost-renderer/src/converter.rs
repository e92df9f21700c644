//! Markdown to platform HTML conversion.

use pulldown_cmark::{Options, Parser, html};

use crate::filter::PlatformFilter;
use crate::inline_code::InlineCodeFormat;

/// Markdown converter configuration.
///
/// One conversion call performs one traversal of the parsed event stream
/// and produces one HTML fragment. The converter holds no mutable state,
/// so a single instance can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Converter {
    inline_code_format: InlineCodeFormat,
}

impl Converter {
    /// Create a new converter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inline code span format.
    #[must_use]
    pub fn inline_code_format(mut self, format: InlineCodeFormat) -> Self {
        self.inline_code_format = format;
        self
    }

    fn parser_options() -> Options {
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
    }

    /// Convert markdown text to a platform HTML fragment.
    ///
    /// Tables, code blocks and inline code spans are rewritten to the
    /// restricted markup; every other node renders through
    /// pulldown-cmark's own HTML output unmodified. Empty or
    /// whitespace-only input yields an empty string.
    #[must_use]
    pub fn convert(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::parser_options());
        let mut filter = PlatformFilter::new(parser, self.inline_code_format);

        let mut output = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut output, &mut filter);

        let counts = filter.counts();
        tracing::debug!(
            tables = counts.tables,
            code_blocks = counts.code_blocks,
            code_spans = counts.code_spans,
            "Rewrote restricted nodes"
        );

        output
    }
}

/// Convert markdown text with the given inline code format.
///
/// Convenience wrapper around [`Converter`] for one-off conversions.
#[must_use]
pub fn convert(markdown: &str, format: InlineCodeFormat) -> String {
    Converter::new().inline_code_format(format).convert(markdown)
}
