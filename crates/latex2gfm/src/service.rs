//! GfmService - the main entry point for LaTeX to Markdown conversion.

use log::warn;

use latex2gfm_core::{convert, escape_gfm, Conversion, ConvertOptions, Token};

use crate::latex::tokenize_with;
use crate::rules::{LineFilter, LineRule, LineRules};

/// The main service for converting LaTeX input to Markdown
pub struct GfmService {
    options: ConvertOptions,
    rules: LineRules,
}

impl GfmService {
    /// Create a new GfmService with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
            rules: LineRules::new(),
        }
    }

    /// Create a GfmService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            rules: LineRules::new(),
        }
    }

    /// Convert an already-assembled token sequence.
    ///
    /// The sequence is converted exactly as given; an unbalanced math span
    /// is logged and reported on the result, never treated as a failure.
    pub fn convert_tokens(&self, tokens: &[Token]) -> Conversion {
        let conversion = convert(tokens, &self.options);
        if conversion.unbalanced_math {
            warn!("token sequence ended inside a math span; emitting it unterminated");
        }
        conversion
    }

    /// Convert LaTeX source text
    pub fn convert_latex(&self, source: &str) -> Conversion {
        let tokens = tokenize_with(&self.rules, source);
        let mut conversion = self.convert_tokens(&tokens);
        conversion.markdown = post_process(&conversion.markdown);
        conversion
    }

    /// Convert a JSON wire request body
    #[cfg(feature = "wire")]
    pub fn convert_request(&self, body: &str) -> crate::Result<Conversion> {
        let tokens = crate::wire::decode_tokens(body)?;
        Ok(self.convert_tokens(&tokens))
    }

    /// Add a custom classification rule
    pub fn add_rule(&mut self, key: &str, rule: LineRule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Drop source lines matching the filter
    pub fn skip(&mut self, filter: LineFilter) -> &mut Self {
        self.rules.skip(filter);
        self
    }

    /// Escape markdown special characters in a string
    pub fn escape(&self, text: &str) -> String {
        escape_gfm(text)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}

impl Default for GfmService {
    fn default() -> Self {
        Self::new()
    }
}

/// Post-process an assembled document: trim outer newlines and collapse
/// runs of three or more newlines down to two.
///
/// This applies only to the document path, where line tokens each carry a
/// trailing newline; token-sequence conversion stays byte-exact.
fn post_process(output: &str) -> String {
    let result = output.trim_matches('\n');

    let mut newline_count = 0;
    let mut processed = String::with_capacity(result.len());

    for c in result.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                processed.push(c);
            }
        } else {
            newline_count = 0;
            processed.push(c);
        }
    }

    processed
}

#[cfg(test)]
mod tests {
    use super::*;
    use latex2gfm_core::MathStyle;

    #[test]
    fn test_convert_tokens_delegates_to_core() {
        let service = GfmService::new();
        let conversion = service.convert_tokens(&[Token::text("a*b")]);
        assert_eq!(conversion.markdown, "a\\*b");
    }

    #[test]
    fn test_convert_tokens_reports_unbalanced_math() {
        let service = GfmService::new();
        let conversion =
            service.convert_tokens(&[Token::toggle_with("$"), Token::text("x")]);
        assert!(conversion.unbalanced_math);
        assert_eq!(conversion.markdown, "$x");
    }

    #[test]
    fn test_convert_latex_document() {
        let source = "\
\\documentclass{article}
\\usepackage{amsmath}
\\begin{document}
\\title{Sample}
\\maketitle
\\section{Intro}
Some opening text.

\\begin{equation}
E = mc^2
\\end{equation}
\\end{document}";

        let service = GfmService::new();
        let conversion = service.convert_latex(source);
        assert_eq!(
            conversion.markdown,
            "# Sample\n## Intro\nSome opening text.\n\nE = mc^2"
        );
        assert!(!conversion.unbalanced_math);
    }

    #[test]
    fn test_convert_latex_collapses_blank_runs() {
        let service = GfmService::new();
        let conversion = service.convert_latex("one\n\n\n\n\ntwo");
        assert_eq!(conversion.markdown, "one\n\ntwo");
    }

    #[test]
    fn test_convert_latex_image_math() {
        let options = ConvertOptions {
            math_style: MathStyle::Image,
            ..Default::default()
        };
        let service = GfmService::with_options(options);
        let conversion =
            service.convert_latex("\\begin{equation}\na + b\n\\end{equation}");
        assert_eq!(
            conversion.markdown,
            "![equation](http://latex.codecogs.com/gif.latex?a%20+%20b)"
        );
    }

    #[test]
    fn test_custom_rule_applies() {
        let mut service = GfmService::new();
        service.add_rule(
            "chapters",
            LineRule::for_contains("\\chapter", |_| Some(Token::markup("# Chapter"))),
        );
        let conversion = service.convert_latex("\\chapter{One}");
        assert_eq!(conversion.markdown, "# Chapter");
    }

    #[test]
    fn test_skip_filter_applies() {
        let mut service = GfmService::new();
        service.skip(LineFilter::contains("\\section"));
        let conversion = service.convert_latex("\\section{Gone}\nkept");
        assert_eq!(conversion.markdown, "kept");
    }

    #[test]
    fn test_escape_delegation() {
        let service = GfmService::new();
        assert_eq!(service.escape("a_b"), "a\\_b");
    }

    #[cfg(feature = "wire")]
    #[test]
    fn test_convert_request() {
        let body = r#"[
            {"Order": 0, "Data": "Hello ", "ToggleMathMode": false},
            {"Order": 1, "Data": "$", "ToggleMathMode": true},
            {"Order": 2, "Data": "x^2", "ToggleMathMode": false},
            {"Order": 3, "Data": "$", "ToggleMathMode": true},
            {"Order": 4, "Data": " world", "ToggleMathMode": false}
        ]"#;
        let service = GfmService::new();
        let conversion = service.convert_request(body).unwrap();
        assert_eq!(conversion.markdown, "Hello $x^2$ world");
        assert!(!conversion.unbalanced_math);
    }

    #[cfg(feature = "wire")]
    #[test]
    fn test_convert_request_rejects_malformed_body() {
        let service = GfmService::new();
        let err = service.convert_request(r#"[{"Data": "x"}]"#).unwrap_err();
        assert!(matches!(err, crate::ConvertError::MalformedInput(_)));
    }

    #[test]
    fn test_post_process_trims_outer_newlines() {
        assert_eq!(post_process("\n\ntext\n\n\n"), "text");
    }
}
