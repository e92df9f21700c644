//! Preformatted text framing.
//!
//! The target platform has exactly one mechanism for multi-line
//! preformatted text: a `<pre>` container with explicit `<br>` line
//! breaks. Code blocks and rendered tables both go through
//! [`preformatted`], which escapes each line and keeps blank lines from
//! collapsing by substituting a non-breaking space.

/// Escape the platform's reserved characters (`&`, `<`, `>`).
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render raw line-oriented content as a platform-safe `<pre>` block.
///
/// Lines are split on LF or CRLF with the terminator discarded. One
/// trailing empty line is dropped (the artifact of trailing-newline
/// content). Blank or whitespace-only lines become a single `&nbsp;`;
/// every other line is escaped with [`escape_text`]. A `<br>` follows
/// every line except the last.
#[must_use]
pub fn preformatted(raw: &str) -> String {
    let mut lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return "<pre></pre>".to_owned();
    }

    let mut out = String::with_capacity(raw.len() + 16);
    out.push_str("<pre>");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        if line.trim().is_empty() {
            out.push_str("&nbsp;");
        } else {
            out.push_str(&escape_text(line));
        }
    }
    out.push_str("</pre>");
    out
}
