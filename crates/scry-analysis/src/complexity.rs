//! Naive whole-file cyclomatic complexity.
//!
//! The score starts at 1 and adds one per non-overlapping match of every
//! decision-point pattern of the file's language. The sum is clamped to
//! [`MAX_COMPLEXITY`] at the end. Comments and strings are not excluded.

use std::sync::LazyLock;

use regex::Regex;

use crate::language::Language;

/// Upper bound of a complexity score.
pub const MAX_COMPLEXITY: u32 = 50;

const PYTHON: &[&str] = &[
    r"\bif\b",
    r"\belif\b",
    r"\belse\b",
    r"\bfor\b",
    r"\bwhile\b",
    r"\band\b",
    r"\bor\b",
    r"\bexcept\b",
    r"\bwith\b",
    r"\blist comprehension",
    r"\bgenerator\b",
];

const C_FAMILY: &[&str] = &[
    r"\bif\b",
    r"\belse\b",
    r"\bfor\b",
    r"\bwhile\b",
    r"\bcase\b",
    r"\bcatch\b",
    r"&&",
    r"\|\|",
];

const RUST_EXTRA: &[&str] = &[r"\bmatch\b", r"\bloop\b"];

const GO_EXTRA: &[&str] = &[r"\bselect\b"];

const RUBY: &[&str] = &[
    r"\bif\b",
    r"\belsif\b",
    r"\bunless\b",
    r"\bwhile\b",
    r"\buntil\b",
    r"\bfor\b",
    r"\brescue\b",
    r"\band\b",
    r"\bor\b",
    r"&&",
    r"\|\|",
];

const SHELL: &[&str] = &[
    r"\bif\b",
    r"\belif\b",
    r"\bfor\b",
    r"\bwhile\b",
    r"\bcase\b",
    r"&&",
    r"\|\|",
];

fn compile(groups: &[&[&str]]) -> Vec<Regex> {
    groups
        .iter()
        .flat_map(|group| group.iter())
        .map(|p| Regex::new(p).expect("built-in decision pattern should compile"))
        .collect()
}

static PYTHON_POINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&[PYTHON]));
static C_FAMILY_POINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&[C_FAMILY]));
static RUST_POINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&[C_FAMILY, RUST_EXTRA]));
static GO_POINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&[C_FAMILY, GO_EXTRA]));
static RUBY_POINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&[RUBY]));
static SHELL_POINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&[SHELL]));

fn decision_points(language: Language) -> &'static [Regex] {
    match language {
        Language::Python => &PYTHON_POINTS,
        Language::Rust => &RUST_POINTS,
        Language::Go => &GO_POINTS,
        Language::JavaScript
        | Language::TypeScript
        | Language::Java
        | Language::C
        | Language::Cpp
        | Language::CSharp
        | Language::Php
        | Language::Swift => &C_FAMILY_POINTS,
        Language::Ruby => &RUBY_POINTS,
        Language::Shell => &SHELL_POINTS,
        Language::Sql | Language::Yaml | Language::Json | Language::Markdown | Language::Toml => {
            &[]
        }
    }
}

/// Score `content` as `language`. Always in `1..=MAX_COMPLEXITY`.
///
/// ```
/// use scry_analysis::{complexity, Language};
///
/// assert_eq!(complexity("x = 1", Language::Python), 1);
/// assert_eq!(complexity("if x:\n  if y:\n    pass", Language::Python), 3);
/// ```
pub fn complexity(content: &str, language: Language) -> u32 {
    let total: usize = 1 + decision_points(language)
        .iter()
        .map(|re| re.find_iter(content).count())
        .sum::<usize>();

    u32::try_from(total)
        .unwrap_or(MAX_COMPLEXITY)
        .min(MAX_COMPLEXITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_is_one() {
        assert_eq!(complexity("", Language::Python), 1);
        assert_eq!(complexity("x = compute()\n", Language::Python), 1);
        assert_eq!(complexity("fn main() {}", Language::Rust), 1);
    }

    #[test]
    fn test_word_boundaries() {
        // "iffy", "format" and "android" contain keywords but not as words.
        assert_eq!(complexity("iffy = format(android)", Language::Python), 1);
    }

    #[test]
    fn test_python_keywords() {
        let src = "for x in xs:\n    if a and b or c:\n        pass\n    else:\n        pass\n";
        // for, if, and, or, else
        assert_eq!(complexity(src, Language::Python), 6);
    }

    #[test]
    fn test_c_family_operators() {
        let src = "if (a && b || c) { } else { }";
        assert_eq!(complexity(src, Language::JavaScript), 5);
        assert_eq!(complexity(src, Language::Java), 5);
    }

    #[test]
    fn test_rust_adds_match_and_loop() {
        let src = "match x { _ => loop {} }";
        assert_eq!(complexity(src, Language::Rust), 3);
        assert_eq!(complexity(src, Language::C), 1);
    }

    #[test]
    fn test_go_adds_select() {
        assert_eq!(complexity("select {}", Language::Go), 2);
        assert_eq!(complexity("select {}", Language::Java), 1);
    }

    #[test]
    fn test_ruby_and_shell() {
        assert_eq!(complexity("unless x\nrescue\nend", Language::Ruby), 3);
        assert_eq!(complexity("if [ -f x ]; then a && b; fi", Language::Shell), 3);
    }

    #[test]
    fn test_data_languages_are_flat() {
        assert_eq!(complexity("if: true\nfor: false\n", Language::Yaml), 1);
        assert_eq!(complexity("SELECT * WHERE a AND b", Language::Sql), 1);
    }

    #[test]
    fn test_clamped_after_summing() {
        let src = "if x:\n".repeat(200);
        assert_eq!(complexity(&src, Language::Python), MAX_COMPLEXITY);

        let src = "if x:\n".repeat(48);
        assert_eq!(complexity(&src, Language::Python), 49);
    }
}
