//! Per-language extraction tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::language::Language;

/// What a rule extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Import,
    Function,
    Class,
}

/// How a captured name is turned into output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Keep the capture as-is.
    Verbatim,
    /// Trim surrounding whitespace.
    Trim,
    /// Keep everything before the first `.` (`os.path` -> `os`).
    FirstSegment,
    /// The capture is a block body; emit every double-quoted string in it.
    QuotedPaths,
}

/// One regex in a language's table.
#[derive(Debug)]
pub struct ExtractionRule {
    pub role: Role,
    pub pattern: Regex,
    pub post: PostProcess,
}

impl ExtractionRule {
    fn new(role: Role, pattern: &str, post: PostProcess) -> Self {
        Self {
            role,
            pattern: Regex::new(pattern).expect("built-in extraction pattern should compile"),
            post,
        }
    }
}

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("quoted path pattern should compile"));

static PYTHON: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    use PostProcess::*;
    use Role::*;
    vec![
        ExtractionRule::new(Import, r"(?m)^(?:from\s+(\S+)\s+import|import\s+(\S+))", FirstSegment),
        ExtractionRule::new(Function, r"(?m)^def\s+(\w+)\s*\(", Verbatim),
        ExtractionRule::new(Class, r"(?m)^class\s+(\w+)", Verbatim),
    ]
});

fn script_rules(typescript: bool) -> Vec<ExtractionRule> {
    use PostProcess::*;
    use Role::*;
    let mut rules = vec![
        ExtractionRule::new(Import, r#"(?:import|require)\s*\(?['"]([^'"]+)['"]"#, Verbatim),
        ExtractionRule::new(Import, r#"from\s+['"]([^'"]+)['"]"#, Verbatim),
        ExtractionRule::new(Function, r"function\s+(\w+)", Verbatim),
        ExtractionRule::new(Function, r"(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s*)?\(", Verbatim),
        ExtractionRule::new(Function, r"(\w+)\s*:\s*(?:async\s*)?\(", Verbatim),
        ExtractionRule::new(Class, r"class\s+(\w+)", Verbatim),
    ];
    if typescript {
        rules.push(ExtractionRule::new(Class, r"interface\s+(\w+)", Verbatim));
    }
    rules
}

static JAVASCRIPT: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| script_rules(false));
static TYPESCRIPT: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| script_rules(true));

static JAVA: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    use PostProcess::*;
    use Role::*;
    vec![
        ExtractionRule::new(Import, r"(?m)^import\s+(?:static\s+)?([\w.*]+)", Verbatim),
        ExtractionRule::new(
            Class,
            r"(?:public\s+|private\s+|protected\s+)?(?:class|interface|enum)\s+(\w+)",
            Verbatim,
        ),
        ExtractionRule::new(
            Function,
            r"(?:public|private|protected)\s+(?:static\s+)?\w+\s+(\w+)\s*\(",
            Verbatim,
        ),
    ]
});

static GO: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    use PostProcess::*;
    use Role::*;
    vec![
        ExtractionRule::new(Import, r#"(?m)^import\s+(?:\w+\s+)?"([^"]+)""#, Verbatim),
        ExtractionRule::new(Import, r"(?ms)^import\s*\((.*?)\)", QuotedPaths),
        ExtractionRule::new(Function, r"(?m)^func\s+(?:\([^)]+\)\s+)?(\w+)", Verbatim),
        ExtractionRule::new(Class, r"type\s+(\w+)\s+(?:struct|interface)", Verbatim),
    ]
});

static RUST: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    use PostProcess::*;
    use Role::*;
    vec![
        ExtractionRule::new(Import, r"(?m)^use\s+([^;]+)", Trim),
        ExtractionRule::new(
            Function,
            r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?(?:unsafe\s+)?fn\s+(\w+)",
            Verbatim,
        ),
        ExtractionRule::new(Class, r"(?:struct|enum|trait)\s+(\w+)", Verbatim),
    ]
});

const INCLUDE_PATTERN: &str = r#"(?m)^\s*#\s*include\s*[<"]([^>"]+)[>"]"#;

static C: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    use PostProcess::*;
    use Role::*;
    vec![
        ExtractionRule::new(Import, INCLUDE_PATTERN, Verbatim),
        ExtractionRule::new(Class, r"struct\s+(\w+)\s*\{", Verbatim),
    ]
});

static CPP: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    use PostProcess::*;
    use Role::*;
    vec![
        ExtractionRule::new(Import, INCLUDE_PATTERN, Verbatim),
        ExtractionRule::new(Class, r"(?:struct|class)\s+(\w+)\s*\{", Verbatim),
    ]
});

/// Rules for `language`, in application order. Empty when the language has
/// no extraction support.
pub fn rules_for(language: Language) -> &'static [ExtractionRule] {
    match language {
        Language::Python => &PYTHON,
        Language::JavaScript => &JAVASCRIPT,
        Language::TypeScript => &TYPESCRIPT,
        Language::Java => &JAVA,
        Language::Go => &GO,
        Language::Rust => &RUST,
        Language::C => &C,
        Language::Cpp => &CPP,
        _ => &[],
    }
}

/// Apply a rule's post-processing to one capture, pushing results to `out`.
pub(super) fn emit(post: PostProcess, capture: &str, out: &mut Vec<String>) {
    match post {
        PostProcess::Verbatim => out.push(capture.to_string()),
        PostProcess::Trim => {
            let trimmed = capture.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
        PostProcess::FirstSegment => {
            let head = capture.split('.').next().unwrap_or(capture);
            out.push(head.to_string());
        }
        PostProcess::QuotedPaths => {
            out.extend(
                QUOTED
                    .captures_iter(capture)
                    .filter_map(|c| c.get(1))
                    .map(|m| m.as_str().to_string()),
            );
        }
    }
}
