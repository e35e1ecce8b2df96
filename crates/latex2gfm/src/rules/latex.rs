//! Built-in classification rules for LaTeX source lines.

use once_cell::sync::Lazy;
use regex::Regex;

use latex2gfm_core::Token;

use super::rule::{LineFilter, LineRule};

static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\title\{(.*)\}").unwrap());
static AUTHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\author\{(.*)\}").unwrap());
static SECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\section\{(.*)\}").unwrap());
static SUBSECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\subsection\{(.*)\}").unwrap());

/// `\begin`/`\end` markers whose lines delimit a math span
const MATH_DELIMITERS: &[&str] = &[
    "\\begin{equation",
    "\\end{equation",
    "\\begin{align",
    "\\end{align",
    "\\begin{flalign",
    "\\end{flalign",
    "\\begin{multline",
    "\\end{multline",
    "\\begin{math",
    "\\end{math",
    "\\begin{center",
    "\\end{center",
];

/// Preamble and bookkeeping commands whose lines produce no output
const DROPPED_COMMANDS: &[&str] = &[
    "\\documentclass",
    "\\usepackage",
    "\\begin{document",
    "\\end{document",
    "\\maketitle",
    "\\label",
    "\\end{abstract",
];

/// Built-in rules, in match order
pub fn latex_rules() -> Vec<LineRule> {
    let mut rules = Vec::new();

    // math environment delimiters flip math mode and contribute nothing
    rules.push(LineRule::toggle(LineFilter::contains_any(MATH_DELIMITERS)));

    rules.push(LineRule::discard(LineFilter::contains_any(DROPPED_COMMANDS)));

    rules.push(LineRule::for_contains("\\begin{abstract", |_| {
        Some(Token::markup("## Abstract"))
    }));

    rules.push(LineRule::for_contains("\\title", |line| {
        heading(&TITLE_RE, "# ", line)
    }));
    rules.push(LineRule::for_contains("\\author", |line| {
        heading(&AUTHOR_RE, "By: ", line)
    }));
    rules.push(LineRule::for_contains("\\section", |line| {
        heading(&SECTION_RE, "## ", line)
    }));
    rules.push(LineRule::for_contains("\\subsection", |line| {
        heading(&SUBSECTION_RE, "### ", line)
    }));

    // '%' starts a comment; keep the text before it
    rules.push(LineRule::for_contains("%", |line| {
        let pos = line.find('%').unwrap_or(line.len());
        Some(Token::text(line[..pos].trim()))
    }));

    rules
}

/// Rewrite a command line as a Markdown heading from its braced argument.
/// Lines the argument pattern does not fit fall back to trimmed text.
fn heading(re: &Regex, prefix: &str, line: &str) -> Option<Token> {
    match re.captures(line).and_then(|caps| caps.get(1)) {
        Some(arg) => {
            let rendered = format!("{}{}", prefix, arg.as_str());
            Some(Token::markup(rendered.trim()))
        }
        None => Some(Token::text(line.trim())),
    }
}
