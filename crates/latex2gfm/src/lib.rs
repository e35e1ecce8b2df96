//! # latex2gfm
//!
//! Convert LaTeX token streams to GitHub-Flavored Markdown.
//!
//! The conversion engine consumes an ordered sequence of tokens, each a
//! text payload plus a flag marking entry or exit of a math span, and
//! assembles a GFM document. This crate provides the front ends that
//! produce and consume that sequence:
//!
//! - [`tokenize`] classifies LaTeX source lines through a customizable
//!   rule table
//! - [`wire::decode_tokens`] decodes the JSON record shape used by the
//!   RPC client (feature `wire`, enabled by default)
//! - [`pipeline`] holds the collaborator seams of the surrounding RPC
//!   system: request source, response sink, output sink
//!
//! ## Example
//!
//! ```rust
//! use latex2gfm::GfmService;
//!
//! let service = GfmService::new();
//! let conversion = service.convert_latex("\\section{Results}");
//! assert_eq!(conversion.markdown, "## Results");
//! ```

mod latex;
pub mod pipeline;
mod rules;
mod service;
#[cfg(feature = "wire")]
pub mod wire;

pub use latex::{tokenize, tokenize_with};
pub use latex2gfm_core::{
    convert, escape_gfm, Conversion, ConvertOptions, MathStyle, Token, TokenKind,
};
pub use rules::{LineFilter, LineRule, LineRules};
pub use service::GfmService;

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The supplied request body could not be interpreted as tokens.
    /// The whole batch is rejected; no partial token list is produced.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
