//! Rule and filter types for line classification.

use latex2gfm_core::Token;

/// Type alias for classifier functions
pub type ClassifierFn = Box<dyn Fn(&str) -> Option<Token> + Send + Sync>;

/// A filter determines which source lines a rule applies to
pub enum LineFilter {
    /// Match lines containing a substring
    Contains(String),
    /// Match lines containing any of several substrings
    ContainsAny(Vec<String>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&str) -> bool + Send + Sync>),
}

impl LineFilter {
    /// Create a filter matching a substring
    pub fn contains(needle: &str) -> Self {
        LineFilter::Contains(needle.to_string())
    }

    /// Create a filter matching any of several substrings
    pub fn contains_any(needles: &[&str]) -> Self {
        LineFilter::ContainsAny(needles.iter().map(|s| s.to_string()).collect())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        LineFilter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a line
    pub fn matches(&self, line: &str) -> bool {
        match self {
            LineFilter::Contains(needle) => line.contains(needle.as_str()),
            LineFilter::ContainsAny(needles) => {
                needles.iter().any(|n| line.contains(n.as_str()))
            }
            LineFilter::Predicate(f) => f(line),
        }
    }
}

/// A rule classifies a matched source line into a token
pub struct LineRule {
    /// Filter to determine which lines this rule applies to
    pub filter: LineFilter,
    /// Classifier producing the token for a matched line; `None` drops
    /// the line entirely
    pub classifier: ClassifierFn,
}

impl LineRule {
    /// Create a new rule
    pub fn new<F>(filter: LineFilter, classifier: F) -> Self
    where
        F: Fn(&str) -> Option<Token> + Send + Sync + 'static,
    {
        Self {
            filter,
            classifier: Box::new(classifier),
        }
    }

    /// Create a rule that matches a substring
    pub fn for_contains<F>(needle: &str, classifier: F) -> Self
    where
        F: Fn(&str) -> Option<Token> + Send + Sync + 'static,
    {
        Self::new(LineFilter::contains(needle), classifier)
    }

    /// Create a rule that drops every matched line
    pub fn discard(filter: LineFilter) -> Self {
        Self::new(filter, |_| None)
    }

    /// Create a rule that emits an empty math-mode toggle for every
    /// matched line
    pub fn toggle(filter: LineFilter) -> Self {
        Self::new(filter, |_| Some(Token::toggle()))
    }

    /// Apply this rule's classifier
    pub fn classify(&self, line: &str) -> Option<Token> {
        (self.classifier)(line)
    }
}
