//! LaTeX source tokenization.
//!
//! Classifies LaTeX source lines into the token stream consumed by
//! [`convert`](latex2gfm_core::convert). Each non-empty classified line
//! carries its own trailing newline and blank lines become bare-newline
//! tokens, so the converter never has to invent separators.
//!
//! # Example
//!
//! ```rust
//! use latex2gfm::{convert, tokenize, ConvertOptions};
//!
//! let tokens = tokenize("\\section{Results}\nAll tests passed.");
//! let conversion = convert(&tokens, &ConvertOptions::default());
//! assert!(conversion.markdown.contains("## Results"));
//! ```

use latex2gfm_core::{Token, TokenKind};

use crate::rules::LineRules;

/// Tokenize LaTeX source with the built-in rule table
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(&LineRules::new(), source)
}

/// Tokenize LaTeX source with a caller-supplied rule table.
///
/// Lines are classified strictly in document order. The tokenizer tracks
/// math-span parity itself so that `\\` line breaks are only rewritten in
/// prose: inside a math environment a `\\` is a row separator and must
/// survive untouched.
pub fn tokenize_with(rules: &LineRules, source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut in_math = false;

    for line in source.lines() {
        if line.trim().is_empty() {
            tokens.push(Token::text("\n"));
            continue;
        }

        let Some(mut token) = rules.classify(line) else {
            continue;
        };

        if token.toggles_math_mode {
            in_math = !in_math;
        }

        if !token.data.is_empty() {
            if !in_math && token.kind == TokenKind::Text {
                token.data = token.data.replace("\\\\", "\n");
            }
            token.data.push('\n');
        }

        tokens.push(token);
    }

    tokens
}
