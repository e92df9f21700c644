//! Monospace display width approximation.
//!
//! Table layout needs to know how many terminal-style cells a string of
//! text occupies so that padding lines up in a `<pre>` block. The rules
//! here are a practical approximation tuned for emoji and common symbol
//! blocks, not a full East Asian Width implementation: CJK ideographs in
//! the BMP (U+3000 and above) measure as width 1. The narrower ranges are
//! kept for compatibility with how the target platform lays out
//! preformatted text.

/// Display width of a single scalar value.
///
/// Rules, in priority order:
///
/// 1. Variation selectors (U+FE0E/U+FE0F), the zero-width joiner and the
///    Mongolian free variation selectors occupy no cells.
/// 2. Supplementary-plane scalars (most pictographic emoji) occupy two.
/// 3. The miscellaneous-symbols, dingbat, technical and
///    arrows-and-symbols blocks occupy two.
/// 4. Everything else, controls and unknowns included, occupies one.
fn scalar_width(c: char) -> usize {
    match c {
        '\u{FE0E}' | '\u{FE0F}' | '\u{200D}' | '\u{180B}'..='\u{180D}' => 0,
        c if c as u32 > 0xFFFF => 2,
        '\u{2300}'..='\u{23FF}' | '\u{2600}'..='\u{27BF}' | '\u{2B00}'..='\u{2BFF}' => 2,
        _ => 1,
    }
}

/// Display width of a text run in monospace cells.
///
/// Never fails; the result is the sum of per-scalar widths.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().map(scalar_width).sum()
}
