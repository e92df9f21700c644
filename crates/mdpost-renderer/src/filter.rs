//! Platform markup rewriting as an iterator adapter over pulldown-cmark
//! events.

use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

use crate::block::{escape_text, preformatted};
use crate::inline_code::InlineCodeFormat;
use crate::table::TableState;

/// Counts of nodes rewritten by a [`PlatformFilter`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteCounts {
    /// Tables laid out as preformatted text.
    pub tables: usize,
    /// Fenced and indented code blocks reframed.
    pub code_blocks: usize,
    /// Inline code spans reformatted.
    pub code_spans: usize,
}

/// Iterator adapter that rewrites events the platform cannot accept.
///
/// This filter:
/// - Consumes table event spans, flattens each cell to plain text, lays
///   the table out as aligned pipe-delimited text and emits one
///   `Event::Html` with the `<pre>` framing
/// - Consumes code block event spans (fenced and indented) and emits the
///   same `<pre>` framing
/// - Replaces inline code spans with the configured emphasis/quote markup
/// - Drops raw HTML embedded in the source (sanitization)
/// - Hardens soft line breaks
/// - Passes all other events through unchanged
pub struct PlatformFilter<'a, I: Iterator<Item = Event<'a>>> {
    iter: I,
    format: InlineCodeFormat,
    state: FilterState,
    counts: RewriteCounts,
}

#[derive(Default)]
enum FilterState {
    #[default]
    Normal,
    InCodeBlock {
        content: String,
    },
    InTable(TableState),
}

impl<'a, I: Iterator<Item = Event<'a>>> PlatformFilter<'a, I> {
    /// Create a new filter wrapping the given event iterator.
    pub fn new(iter: I, format: InlineCodeFormat) -> Self {
        Self {
            iter,
            format,
            state: FilterState::Normal,
            counts: RewriteCounts::default(),
        }
    }

    /// Counts of nodes rewritten so far.
    pub fn counts(&self) -> RewriteCounts {
        self.counts
    }

    fn html(markup: String) -> Event<'a> {
        Event::Html(CowStr::Boxed(markup.into_boxed_str()))
    }

    fn inline_html(markup: String) -> Event<'a> {
        Event::InlineHtml(CowStr::Boxed(markup.into_boxed_str()))
    }
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for PlatformFilter<'a, I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let event = self.iter.next()?;

            match (&mut self.state, event) {
                (FilterState::Normal, Event::Start(Tag::CodeBlock(_))) => {
                    self.state = FilterState::InCodeBlock {
                        content: String::new(),
                    };
                }

                (FilterState::InCodeBlock { content }, Event::Text(text)) => {
                    content.push_str(&text);
                }

                (FilterState::InCodeBlock { content }, Event::SoftBreak | Event::HardBreak) => {
                    content.push('\n');
                }

                (FilterState::InCodeBlock { .. }, Event::End(TagEnd::CodeBlock)) => {
                    let FilterState::InCodeBlock { content } = std::mem::take(&mut self.state)
                    else {
                        unreachable!()
                    };
                    self.counts.code_blocks += 1;
                    return Some(Self::html(preformatted(&content)));
                }

                // Anything else inside a code block carries no content.
                (FilterState::InCodeBlock { .. }, _) => {}

                (FilterState::Normal, Event::Start(Tag::Table(_))) => {
                    self.state = FilterState::InTable(TableState::default());
                }

                (FilterState::InTable(_), Event::End(TagEnd::Table)) => {
                    let FilterState::InTable(table) = std::mem::take(&mut self.state) else {
                        unreachable!()
                    };
                    self.counts.tables += 1;
                    let text = table.layout();
                    if !text.is_empty() {
                        return Some(Self::html(preformatted(&text)));
                    }
                }

                (FilterState::InTable(table), event) => match event {
                    Event::Start(Tag::TableHead) => table.start_head(),
                    Event::End(TagEnd::TableHead) => table.end_head(),
                    Event::Start(Tag::TableRow) => table.start_row(),
                    Event::Start(Tag::TableCell) => table.start_cell(),
                    Event::End(TagEnd::TableCell) => table.end_cell(),
                    Event::Text(text) => table.push_text(&text),
                    // Code spans keep their raw content; escaping happens
                    // once, in the preformatted framing.
                    Event::Code(code) => table.push_text(&code),
                    Event::SoftBreak | Event::HardBreak => table.push_break(),
                    // Emphasis, links and other container inlines flatten
                    // to their children; raw HTML is dropped.
                    _ => {}
                },

                (FilterState::Normal, Event::Code(code)) => {
                    self.counts.code_spans += 1;
                    return Some(Self::inline_html(self.format.apply(&escape_text(&code))));
                }

                // Sanitization: raw HTML in the source is stripped.
                (FilterState::Normal, Event::Html(_) | Event::InlineHtml(_)) => {}

                (FilterState::Normal, Event::SoftBreak) => {
                    return Some(Event::HardBreak);
                }

                (FilterState::Normal, event) => {
                    return Some(event);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Options, Parser};

    fn filter_events(markdown: &str) -> (Vec<Event<'_>>, RewriteCounts) {
        let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
        let mut filter = PlatformFilter::new(parser, InlineCodeFormat::default());
        let events: Vec<_> = filter.by_ref().collect();
        let counts = filter.counts();
        (events, counts)
    }

    #[test]
    fn test_code_block_becomes_pre_html() {
        let (events, counts) = filter_events("```\nlet x = 1;\n```");
        assert_eq!(counts.code_blocks, 1);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Event::Html(s) if s.as_ref() == "<pre>let x = 1;</pre>"))
        );
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, Event::Start(Tag::CodeBlock(_))))
        );
    }

    #[test]
    fn test_indented_code_block_handled() {
        let (events, counts) = filter_events("    indented line\n");
        assert_eq!(counts.code_blocks, 1);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Event::Html(s) if s.contains("indented line")))
        );
    }

    #[test]
    fn test_table_becomes_pre_html() {
        let (events, counts) = filter_events("| A | B |\n|---|---|\n| 1 | 2 |");
        assert_eq!(counts.tables, 1);
        let html = events
            .iter()
            .find_map(|e| match e {
                Event::Html(s) => Some(s.as_ref().to_owned()),
                _ => None,
            })
            .unwrap();
        assert!(html.starts_with("<pre>| "));
        assert!(html.contains("|-----|-----|"));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, Event::Start(Tag::Table(_))))
        );
    }

    #[test]
    fn test_table_cell_inline_markup_flattened() {
        let (events, _) = filter_events("| A |\n|---|\n| **bold** and `code` |");
        let html = events
            .iter()
            .find_map(|e| match e {
                Event::Html(s) => Some(s.as_ref().to_owned()),
                _ => None,
            })
            .unwrap();
        assert!(html.contains("bold and code"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_inline_code_rewritten() {
        let (events, counts) = filter_events("Use `x` here.");
        assert_eq!(counts.code_spans, 1);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Event::InlineHtml(s) if s.as_ref() == "&quot;x&quot;"))
        );
    }

    #[test]
    fn test_inline_code_is_escaped() {
        let parser = Parser::new("`a < b`");
        let filter = PlatformFilter::new(parser, InlineCodeFormat::Bold);
        let events: Vec<_> = filter.collect();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Event::InlineHtml(s) if s.as_ref() == "<strong>a &lt; b</strong>"))
        );
    }

    #[test]
    fn test_raw_html_stripped() {
        let (events, _) = filter_events("before\n\n<div>raw</div>\n\nafter");
        assert!(!events.iter().any(|e| matches!(e, Event::Html(_))));
    }

    #[test]
    fn test_inline_raw_html_stripped() {
        let (events, _) = filter_events("a <span>b</span> c");
        assert!(!events.iter().any(|e| matches!(e, Event::InlineHtml(_))));
    }

    #[test]
    fn test_soft_break_hardened() {
        let (events, _) = filter_events("line one\nline two");
        assert!(events.iter().any(|e| matches!(e, Event::HardBreak)));
        assert!(!events.iter().any(|e| matches!(e, Event::SoftBreak)));
    }

    #[test]
    fn test_other_events_pass_through() {
        let (events, counts) = filter_events("# Title\n\n**bold**");
        assert_eq!(counts, RewriteCounts::default());
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Event::Start(Tag::Heading { .. })))
        );
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Event::Start(Tag::Strong)))
        );
    }
}
