//! Token model
//!
//! One classified fragment of input content, paired with a flag marking
//! entry or exit of a math span. Tokens arrive in document order and the
//! converter preserves that order exactly.

/// How a token's payload is rendered while outside a math span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenKind {
    /// Plain text; GFM special characters are escaped on append
    #[default]
    Text,
    /// Content already rendered as Markdown (e.g. headings produced by the
    /// line classifier); appended raw
    Markup,
}

/// One classified fragment of input content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Fragment payload; an empty payload appends nothing
    pub data: String,

    /// True if processing this token flips the converter's math-mode state
    pub toggles_math_mode: bool,

    /// Rendering class for plain (non-math) mode
    pub kind: TokenKind,
}

impl Token {
    /// Create a plain text token
    pub fn text(data: &str) -> Self {
        Self {
            data: data.to_string(),
            toggles_math_mode: false,
            kind: TokenKind::Text,
        }
    }

    /// Create a token whose payload is already Markdown
    pub fn markup(data: &str) -> Self {
        Self {
            data: data.to_string(),
            toggles_math_mode: false,
            kind: TokenKind::Markup,
        }
    }

    /// Create a math-mode toggle carrying no payload
    pub fn toggle() -> Self {
        Self::toggle_with("")
    }

    /// Create a math-mode toggle that contributes its own delimiter text
    pub fn toggle_with(data: &str) -> Self {
        Self {
            data: data.to_string(),
            toggles_math_mode: true,
            kind: TokenKind::Text,
        }
    }

    /// Check if this token contributes no output
    pub fn is_blank(&self) -> bool {
        self.data.is_empty()
    }
}
