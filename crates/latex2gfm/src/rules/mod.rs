//! Rule system for LaTeX line classification.

mod latex;
mod rule;

pub use latex::latex_rules;
pub use rule::{ClassifierFn, LineFilter, LineRule};

use indexmap::IndexMap;
use latex2gfm_core::Token;

/// Collection of rules for line classification
pub struct LineRules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, LineRule>,
    /// Skip filters (drop the line entirely)
    skip_rules: Vec<LineFilter>,
    /// Built-in LaTeX rules
    latex_rules: Vec<LineRule>,
}

impl LineRules {
    /// Create a new LineRules instance with the built-in LaTeX rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            skip_rules: Vec::new(),
            latex_rules: latex_rules(),
        }
    }

    /// Add a custom rule
    pub fn add(&mut self, key: &str, rule: LineRule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Add a skip filter
    pub fn skip(&mut self, filter: LineFilter) {
        self.skip_rules.push(filter);
    }

    /// Classify a source line into a token, or `None` to drop the line.
    ///
    /// Skip filters win over everything; custom rules are checked ahead of
    /// the built-ins; an unmatched line falls back to a trimmed text token.
    pub fn classify(&self, line: &str) -> Option<Token> {
        for filter in &self.skip_rules {
            if filter.matches(line) {
                return None;
            }
        }

        for rule in self.custom_rules.values() {
            if rule.filter.matches(line) {
                return rule.classify(line);
            }
        }

        for rule in &self.latex_rules {
            if rule.filter.matches(line) {
                return rule.classify(line);
            }
        }

        Some(Token::text(line.trim()))
    }
}

impl Default for LineRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latex2gfm_core::TokenKind;

    #[test]
    fn test_default_case_trims_line() {
        let rules = LineRules::new();
        let token = rules.classify("  plain prose  ").unwrap();
        assert_eq!(token.data, "plain prose");
        assert_eq!(token.kind, TokenKind::Text);
    }

    #[test]
    fn test_custom_rule_checked_before_builtin() {
        let mut rules = LineRules::new();
        rules.add(
            "shout-sections",
            LineRule::for_contains("\\section", |_| Some(Token::markup("## LOUD"))),
        );
        let token = rules.classify("\\section{Quiet}").unwrap();
        assert_eq!(token.data, "## LOUD");
    }

    #[test]
    fn test_skip_filter_wins() {
        let mut rules = LineRules::new();
        rules.skip(LineFilter::contains("\\section"));
        assert!(rules.classify("\\section{Gone}").is_none());
    }
}
