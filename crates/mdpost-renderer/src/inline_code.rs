//! Inline code span formatting.
//!
//! The platform has no monospace inline element, so code spans are mapped
//! to a fixed combination of emphasis, strong and quote markup chosen once
//! per conversion.

use std::str::FromStr;

/// How inline code spans are decorated in the output markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum InlineCodeFormat {
    /// `&quot;code&quot;`
    #[default]
    DoubleQuotes,
    /// `<strong>code</strong>`
    Bold,
    /// `<em>code</em>`
    Italic,
    /// `<strong><em>code</em></strong>`
    BoldAndItalic,
    /// `<strong>&quot;code&quot;</strong>`
    BoldWithQuotes,
    /// `<em>&quot;code&quot;</em>`
    ItalicWithQuotes,
    /// `<strong><em>&quot;code&quot;</em></strong>`
    All,
}

impl InlineCodeFormat {
    /// Wrap already-escaped code text in this format's markup.
    #[must_use]
    pub fn apply(self, escaped: &str) -> String {
        match self {
            Self::DoubleQuotes => format!("&quot;{escaped}&quot;"),
            Self::Bold => format!("<strong>{escaped}</strong>"),
            Self::Italic => format!("<em>{escaped}</em>"),
            Self::BoldAndItalic => format!("<strong><em>{escaped}</em></strong>"),
            Self::BoldWithQuotes => format!("<strong>&quot;{escaped}&quot;</strong>"),
            Self::ItalicWithQuotes => format!("<em>&quot;{escaped}&quot;</em>"),
            Self::All => format!("<strong><em>&quot;{escaped}&quot;</em></strong>"),
        }
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown inline code format: {0}")]
pub struct ParseInlineCodeFormatError(String);

impl FromStr for InlineCodeFormat {
    type Err = ParseInlineCodeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "double-quotes" => Ok(Self::DoubleQuotes),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "bold-and-italic" => Ok(Self::BoldAndItalic),
            "bold-with-quotes" => Ok(Self::BoldWithQuotes),
            "italic-with-quotes" => Ok(Self::ItalicWithQuotes),
            "all" => Ok(Self::All),
            other => Err(ParseInlineCodeFormatError(other.to_owned())),
        }
    }
}
