//! Semantic text styles (UI-agnostic).
//!
//! Content blocks describe their output as [`StyledLine`]s tagged with a
//! semantic [`Style`]. The TUI maps each style to terminal colors at render
//! time; the `run` subcommand serializes them as-is.

use serde::Serialize;

/// Block caret glyph shown while text is being typed.
pub const CARET: &str = "█";

/// A styled span of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// Creates an empty line.
    pub fn empty() -> Self {
        StyledLine { spans: vec![] }
    }

    /// Creates a line holding a single span.
    pub fn single(text: impl Into<String>, style: Style) -> Self {
        StyledLine {
            spans: vec![StyledSpan::new(text, style)],
        }
    }

    /// Appends a span, builder style.
    #[must_use]
    pub fn push(mut self, text: impl Into<String>, style: Style) -> Self {
        self.spans.push(StyledSpan::new(text, style));
        self
    }

    /// Concatenated text of every span.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Semantic style identifiers.
///
/// Translated to actual terminal styles by the renderer, which keeps the
/// content and animation engines free of terminal dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// No styling.
    Plain,
    /// Large intro headline text.
    Headline,
    /// Blinking block caret.
    Caret,
    /// Character under the caret when it sits inside the input.
    Cursor,
    /// `user@host` part of the prompt.
    PromptUser,
    /// Separators (`:` and `$`) in the prompt.
    PromptSeparator,
    /// Working directory part of the prompt.
    PromptPath,
    /// First word of a prompt that resolves to a known command.
    CommandKnown,
    /// First word of a prompt that does not resolve.
    CommandUnknown,
    /// Arguments after the first word.
    CommandArgs,
    /// `Running: "..."` banner and section headings.
    Banner,
    /// Emphasized item text (titles, roles).
    Strong,
    /// Secondary description text.
    Muted,
    /// Highlighted keyword (company names, command names).
    Accent,
    /// Completed status tag.
    StatusDone,
    /// In-progress status tag.
    StatusActive,
    /// Error text (not-found message).
    Error,
    /// Link-like text (email address).
    Link,
    /// Directory entry in `ls` output.
    Directory,
    /// File entry in `ls` output.
    File,
    /// Playful remark in easter eggs.
    Quip,
}
