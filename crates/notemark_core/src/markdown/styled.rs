//! Styled text value model shared by the render and highlight pipelines.
//!
//! # Responsibility
//! - Define the run-based rich text shape consumed by presentation layers.
//! - Keep style attributes plain data with no UI toolkit coupling.
//!
//! # Invariants
//! - Runs never carry empty text.
//! - Adjacent runs with identical style are merged on push.
//! - Concatenating run texts in order reproduces the logical text content
//!   the producer chose to keep.

/// Foreground color annotation from the fixed highlight palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightColor {
    Blue,
    Purple,
    Teal,
    Green,
    Orange,
    Indigo,
}

/// Style attributes carried by one text run.
///
/// `Default` is the plain, unstyled run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStyle {
    /// Strong emphasis (`**text**`).
    pub bold: bool,
    /// Emphasis (`*text*`).
    pub italic: bool,
    /// Monospace code span.
    pub code: bool,
    /// Header level 1-6 when the run belongs to a heading line.
    pub heading: Option<u8>,
    /// Link target URL for `[text](url)` runs.
    pub link: Option<String>,
    /// Run is a list-item marker (`- `, `* `, `+ `).
    pub list_marker: bool,
    /// Foreground color assigned by the syntax highlighter.
    pub color: Option<HighlightColor>,
}

impl RunStyle {
    /// Style with only a foreground color set.
    pub fn colored(color: HighlightColor) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Returns whether this style carries no attributes at all.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// One contiguous stretch of text sharing a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
}

/// Sequence of styled runs produced by `render` and `highlight`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    runs: Vec<TextRun>,
}

impl StyledText {
    /// Creates an empty styled text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text with the given style.
    ///
    /// Empty text is dropped. When the style equals the last run's style the
    /// text is merged into that run instead of opening a new one.
    pub fn push_run(&mut self, text: impl Into<String>, style: RunStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.style == style {
                last.text.push_str(&text);
                return;
            }
        }
        self.runs.push(TextRun { text, style });
    }

    /// Appends unstyled text.
    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.push_run(text, RunStyle::default());
    }

    /// Runs in display order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Returns whether no runs are present.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated run text without style information.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}
