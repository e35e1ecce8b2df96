//! latex2gfm-core - token model and GFM conversion
//!
//! This crate provides the core data structures and the conversion engine
//! for latex2gfm. It is used by the `latex2gfm` front end, which layers
//! LaTeX line classification and wire-record decoding on top.
//!
//! # Architecture
//!
//! ```text
//! LaTeX source ──tokenize──▶ ┌──────────────┐
//!                            │              │
//!                            │ Token stream │ ──convert──▶ GFM String
//! Wire records ──decode────▶ │              │
//!                            └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use latex2gfm_core::{convert, ConvertOptions, Token};
//!
//! let tokens = vec![
//!     Token::text("Hello "),
//!     Token::toggle_with("$"),
//!     Token::text("x^2"),
//!     Token::toggle_with("$"),
//!     Token::text(" world"),
//! ];
//!
//! let conversion = convert(&tokens, &ConvertOptions::default());
//! assert_eq!(conversion.markdown, "Hello $x^2$ world");
//! assert!(!conversion.unbalanced_math);
//! ```

mod convert;
mod options;
mod token;

pub use convert::{convert, escape_gfm, Conversion};
pub use options::{ConvertOptions, MathStyle};
pub use token::{Token, TokenKind};
