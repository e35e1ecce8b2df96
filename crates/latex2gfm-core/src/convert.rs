//! Token stream conversion
//!
//! Converts an ordered token sequence into GFM text, tracking a binary
//! math-mode state across the sequence. The converter is a pure function:
//! it performs no I/O, holds no state across calls, and identical inputs
//! always produce identical output.

use crate::options::{ConvertOptions, MathStyle};
use crate::token::{Token, TokenKind};

/// Result of a conversion pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The assembled GFM document
    pub markdown: String,

    /// True if the sequence ended inside a math span (odd toggle count).
    /// The markdown is still complete; no closing delimiter is injected
    /// because the correct closing syntax is unknown at this layer.
    pub unbalanced_math: bool,
}

/// Convert an ordered token sequence to GFM text.
///
/// Tokens are processed strictly in order; none are reordered, merged, or
/// dropped. A toggle token flips math mode before its own payload is
/// rendered, so delimiter text is rendered under the mode it introduces.
/// No separators are added beyond what the tokens themselves carry.
pub fn convert(tokens: &[Token], options: &ConvertOptions) -> Conversion {
    let input_len: usize = tokens.iter().map(|t| t.data.len()).sum();
    // escaping grows a fragment by at most 2x
    let mut out = String::with_capacity(input_len + input_len / 2);
    let mut math_mode = false;

    for token in tokens {
        if token.toggles_math_mode {
            math_mode = !math_mode;
        }

        if token.data.is_empty() {
            continue;
        }

        if math_mode {
            render_math(&token.data, options, &mut out);
        } else {
            match token.kind {
                TokenKind::Text => escape_gfm_into(&token.data, &mut out),
                TokenKind::Markup => out.push_str(&token.data),
            }
        }
    }

    Conversion {
        markdown: out,
        unbalanced_math: math_mode,
    }
}

/// Render a math fragment according to the configured style
fn render_math(data: &str, options: &ConvertOptions, out: &mut String) {
    match options.math_style {
        MathStyle::Passthrough => out.push_str(data),
        MathStyle::Image => {
            let fragment = data.trim();
            if fragment.is_empty() {
                return;
            }
            out.push_str("![equation](");
            out.push_str(&options.image_endpoint);
            out.push_str(&encode_math(fragment));
            out.push_str(")\n\n");
        }
    }
}

/// Percent-encode a math fragment for the image endpoint
fn encode_math(fragment: &str) -> String {
    let rewritten = fragment.replace("\\sfrac", "\\frac");
    let mut result = String::with_capacity(rewritten.len());

    for c in rewritten.chars() {
        match c {
            ' ' | '&' | '$' => result.push_str("%20"),
            _ => result.push(c),
        }
    }

    result
}

/// Escape GFM special characters in text
pub fn escape_gfm(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    escape_gfm_into(text, &mut result);
    result
}

fn escape_gfm_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '\\' | '<' | '>' | '#' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}
