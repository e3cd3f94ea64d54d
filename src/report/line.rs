//! Styled report lines, independent of any terminal.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Color role of a span. Mapped onto terminal colors at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Plain,
    /// Section and integration names (green, bold)
    Heading,
    /// Summary text (white)
    Text,
    /// Fill dots, endpoints, base URLs (gray)
    Muted,
    Red,
    Green,
    Blue,
    Magenta,
    Cyan,
    Yellow,
}

/// A run of text sharing one tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportLine {
    /// Two-column detail: left label, right value (may be empty).
    Detail { left: Vec<Span>, right: Vec<Span> },
    Blank,
}

impl ReportLine {
    pub fn detail(left: Vec<Span>, right: Vec<Span>) -> Self {
        ReportLine::Detail { left, right }
    }

    /// Uncolored text of the line, columns joined by a single space.
    pub fn plain_text(&self) -> String {
        match self {
            ReportLine::Detail { left, right } => {
                let left = join_text(left);
                let right = join_text(right);
                if right.is_empty() {
                    left
                } else {
                    format!("{left} {right}")
                }
            }
            ReportLine::Blank => String::new(),
        }
    }
}

pub(crate) fn join_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Visible width of spans, in terminal columns.
pub(crate) fn visible_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.text.width()).sum()
}
