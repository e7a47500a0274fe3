//! Line and regex checks for Java sources.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::ReviewCategory;
use crate::issues::{IssueRecord, Severity};

/// Longest method body, in lines, before it is flagged.
pub const MAX_METHOD_LINES: usize = 50;
/// Longest file, in lines, before it is flagged.
pub const MAX_FILE_LINES: usize = 500;
/// Most parameters a call or declaration may take.
pub const MAX_PARAMETERS: usize = 5;
/// Lines searched for a `try (` before a stream is opened, the opening line
/// included.
pub const TRY_WINDOW: usize = 5;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in review pattern should compile")
}

fn re_ci(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("built-in review pattern should compile")
}

static PUBLIC_CLASS: LazyLock<Regex> = LazyLock::new(|| re(r"public\s+class\s+(\w+)"));
static CAMEL_METHOD: LazyLock<Regex> =
    LazyLock::new(|| re(r"\b(?:public|private|protected)\s+\w+\s+[a-z]\w*\s*\("));
static PASCAL_METHOD: LazyLock<Regex> =
    LazyLock::new(|| re(r"\b(?:public|private|protected)\s+\w+\s+[A-Z]\w*\s*\("));

static METHOD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?:public|private|protected).*?\s+(\w+)\s*\([^)]*\)\s*\{"));
static CALL_ARGS: LazyLock<Regex> = LazyLock::new(|| re(r"\w+\s*\(([^)]+)\)"));

static SQL_CONCAT: LazyLock<Regex> = LazyLock::new(|| {
    re_ci(r#"["']SELECT.*?\+.*?["']|["']INSERT.*?\+.*?["']|["']UPDATE.*?\+.*?["']|["']DELETE.*?\+.*?["']"#)
});
static HARDCODED_SECRET: LazyLock<Regex> =
    LazyLock::new(|| re_ci(r#"(?:password|passwd|pwd|secret)\s*[=:]\s*["'][^"']+["']"#));
static USER_INPUT: LazyLock<Regex> =
    LazyLock::new(|| re(r"\.getParameter\([^)]+\)|request\([^)]+\)"));

static LOOKUP_IN_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    re_ci(r"for\s*\([^)]+\)\s*\{[^}]*\.find\([^)]*\)|for\s*\([^)]+\)\s*\{[^}]*\.get\([^)]*\)")
});
static OPENS_STREAM: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?:new\s+FileInputStream|new\s+FileOutputStream|new\s+BufferedReader|new\s+InputStreamReader)\s*\(")
});

static UNSAFE_COLLECTION: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?:HashMap|ArrayList|HashSet)\s*<[^>]+>\s+\w+\s*="));
static SYNCHRONIZED_METHOD: LazyLock<Regex> =
    LazyLock::new(|| re(r"public\s+synchronized\s+\w+"));

/// One file being checked.
pub(super) struct JavaFile<'a> {
    pub path: &'a str,
    pub stem: &'a str,
    pub content: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> JavaFile<'a> {
    pub fn new(path: &'a str, stem: &'a str, content: &'a str) -> Self {
        Self {
            path,
            stem,
            content,
            lines: content.split('\n').collect(),
        }
    }

    fn at_line(&self, line: usize) -> String {
        format!("{}:{}", self.path, line)
    }

    /// 1-based line of a byte offset.
    fn line_of(&self, offset: usize) -> usize {
        memchr::memchr_iter(b'\n', &self.content.as_bytes()[..offset]).count() + 1
    }

    fn numbered(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines.iter().enumerate().map(|(i, line)| (i + 1, *line))
    }
}

fn issue(
    severity: Severity,
    category: ReviewCategory,
    description: impl Into<String>,
    location: impl Into<String>,
) -> IssueRecord {
    IssueRecord::new(severity, category.as_str(), description, location)
}

pub(super) fn check_naming(file: &JavaFile<'_>, out: &mut Vec<IssueRecord>) {
    if let Some(caps) = PUBLIC_CLASS.captures(file.content) {
        let class_name = &caps[1];
        if class_name != file.stem {
            out.push(
                issue(
                    Severity::Major,
                    ReviewCategory::Naming,
                    format!("Class name {class_name} does not match file name"),
                    file.path,
                )
                .with_suggestion("Rename the class or the file so they match"),
            );
        }
    }

    for (number, line) in file.numbered() {
        if !CAMEL_METHOD.is_match(line) && PASCAL_METHOD.is_match(line) {
            out.push(
                issue(
                    Severity::Minor,
                    ReviewCategory::Naming,
                    "Method names should be camelCase",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("Start method names with a lower-case letter"),
            );
        }
    }
}

pub(super) fn check_code_smell(file: &JavaFile<'_>, out: &mut Vec<IssueRecord>) {
    let bytes = file.content.as_bytes();

    for caps in METHOD_HEADER.captures_iter(file.content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let start = whole.end();
        let mut depth = 1usize;
        let mut end = start;
        for (offset, &byte) in bytes[start..].iter().enumerate() {
            match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        end = start + offset;
                        break;
                    }
                }
                _ => {}
            }
        }

        let body_lines = memchr::memchr_iter(b'\n', &bytes[start..end]).count();
        if body_lines > MAX_METHOD_LINES {
            out.push(
                issue(
                    Severity::Major,
                    ReviewCategory::CodeSmell,
                    format!("Method too long: {}() ({} lines)", name.as_str(), body_lines),
                    file.at_line(file.line_of(whole.start())),
                )
                .with_suggestion(format!(
                    "Split into smaller methods (fewer than {MAX_METHOD_LINES} lines)"
                )),
            );
        }
    }

    if file.lines.len() > MAX_FILE_LINES {
        out.push(
            issue(
                Severity::Major,
                ReviewCategory::CodeSmell,
                format!("Class too large ({} lines)", file.lines.len()),
                file.path,
            )
            .with_suggestion(format!(
                "Split by responsibility (fewer than {MAX_FILE_LINES} lines)"
            )),
        );
    }

    for caps in CALL_ARGS.captures_iter(file.content) {
        let (Some(whole), Some(args)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let count = args.as_str().split(',').count();
        if count > MAX_PARAMETERS && !whole.as_str().contains("class") {
            out.push(
                issue(
                    Severity::Minor,
                    ReviewCategory::CodeSmell,
                    format!("Too many parameters ({count})"),
                    file.at_line(file.line_of(whole.start())),
                )
                .with_suggestion("Introduce a parameter object or a builder"),
            );
        }
    }
}

pub(super) fn check_security(file: &JavaFile<'_>, out: &mut Vec<IssueRecord>) {
    for (number, line) in file.numbered() {
        if SQL_CONCAT.is_match(line) {
            out.push(
                issue(
                    Severity::Critical,
                    ReviewCategory::Security,
                    "SQL injection risk: query built by string concatenation",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("Use PreparedStatement or parameterized queries"),
            );
        }
    }

    for (number, line) in file.numbered() {
        if HARDCODED_SECRET.is_match(line) {
            out.push(
                issue(
                    Severity::Critical,
                    ReviewCategory::Security,
                    "Hard-coded password or secret",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("Read credentials from the environment or a secret store"),
            );
        }
    }

    for (number, line) in file.numbered() {
        if USER_INPUT.is_match(line) && !line.contains("escape") && !line.contains("encode") {
            out.push(
                issue(
                    Severity::Major,
                    ReviewCategory::Security,
                    "Possible XSS: user input used without escaping",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("HTML-escape user input before output"),
            );
        }
    }
}

pub(super) fn check_performance(file: &JavaFile<'_>, out: &mut Vec<IssueRecord>) {
    for (number, line) in file.numbered() {
        if LOOKUP_IN_LOOP.is_match(line) {
            out.push(
                issue(
                    Severity::Major,
                    ReviewCategory::Performance,
                    "N+1 query risk: lookup inside a loop",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("Batch the lookups or use a JOIN"),
            );
        }
    }

    for (number, line) in file.numbered() {
        if !OPENS_STREAM.is_match(line) {
            continue;
        }
        let window = &file.lines[number.saturating_sub(TRY_WINDOW)..number];
        let guarded = window
            .iter()
            .any(|l| l.contains("try (") || l.contains("try("));
        if !guarded {
            out.push(
                issue(
                    Severity::Major,
                    ReviewCategory::Performance,
                    "Resource may not be closed",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("Use try-with-resources"),
            );
        }
    }

    for (number, line) in file.numbered() {
        if line.contains("String") && line.contains("+=") {
            out.push(
                issue(
                    Severity::Minor,
                    ReviewCategory::Performance,
                    "String concatenation with +=",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("Use StringBuilder"),
            );
        }
    }
}

pub(super) fn check_concurrency(file: &JavaFile<'_>, out: &mut Vec<IssueRecord>) {
    for (number, line) in file.numbered() {
        if UNSAFE_COLLECTION.is_match(line) && (line.contains("static") || line.contains("public"))
        {
            out.push(
                issue(
                    Severity::Major,
                    ReviewCategory::Concurrency,
                    "Shared collection is not thread-safe",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("Use ConcurrentHashMap or CopyOnWriteArrayList"),
            );
        }
    }

    for (number, line) in file.numbered() {
        if SYNCHRONIZED_METHOD.is_match(line) {
            out.push(
                issue(
                    Severity::Minor,
                    ReviewCategory::Concurrency,
                    "Synchronized method may limit throughput",
                    file.at_line(number),
                )
                .with_code(line.trim())
                .with_suggestion("Use finer-grained locks or lock-free structures"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(check: fn(&JavaFile<'_>, &mut Vec<IssueRecord>), stem: &str, src: &str) -> Vec<IssueRecord> {
        let path = format!("{stem}.java");
        let file = JavaFile::new(&path, stem, src);
        let mut out = Vec::new();
        check(&file, &mut out);
        out
    }

    #[test]
    fn test_class_name_mismatch() {
        let issues = run(check_naming, "Foo", "public class Bar {}\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Major);
        assert_eq!(issues[0].location, "Foo.java");

        assert!(run(check_naming, "Bar", "public class Bar {}\n").is_empty());
    }

    #[test]
    fn test_pascal_case_method() {
        let src = "public class A {\n    public void DoWork() {}\n    public void doWork() {}\n}\n";
        let issues = run(check_naming, "A", src);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "A.java:2");
        assert_eq!(issues[0].code.as_deref(), Some("public void DoWork() {}"));
    }

    #[test]
    fn test_long_method() {
        let body = "        x++;\n".repeat(MAX_METHOD_LINES + 1);
        let src = format!("public class A {{\n    public void run() {{\n{body}    }}\n}}\n");
        let issues = run(check_code_smell, "A", &src);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].description.contains("run()"));
        assert_eq!(issues[0].location, "A.java:2");

        let short = "public class A {\n    public void run() {\n        x++;\n    }\n}\n";
        assert!(run(check_code_smell, "A", short).is_empty());
    }

    #[test]
    fn test_too_many_parameters() {
        let src = "class A {\n    void f(int a, int b, int c, int d, int e, int g) {}\n}\n";
        let issues = run(check_code_smell, "A", src);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].description, "Too many parameters (6)");
    }

    #[test]
    fn test_large_file() {
        let src = "// filler\n".repeat(MAX_FILE_LINES + 1);
        let issues = run(check_code_smell, "A", &src);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].description.starts_with("Class too large"));
    }

    #[test]
    fn test_security_rules() {
        let src = "\
String q = \"SELECT * FROM users WHERE name='\" + name + \"'\";
String password = \"hunter2\";
String name = request.getParameter(\"name\");
String safe = escape(request.getParameter(\"name\"));
";
        let issues = run(check_security, "A", src);
        let severities: Vec<Severity> = issues.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Critical, Severity::Critical, Severity::Major]
        );
        assert_eq!(issues[2].location, "A.java:3");
    }

    #[test]
    fn test_stream_outside_try() {
        let src = "\
void a() {
    InputStream in = new FileInputStream(f);
}
void b() {
    try (InputStream in = new FileInputStream(f)) {
    }
}
";
        let issues = run(check_performance, "A", src);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "A.java:2");
    }

    #[test]
    fn test_loop_lookup_and_concat() {
        let src = "for (User u : users) { repo.find(u.id()); }\nString s = \"\"; s += x; // String\n";
        let issues = run(check_performance, "A", src);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::Major);
        assert_eq!(issues[1].severity, Severity::Minor);
    }

    #[test]
    fn test_concurrency_rules() {
        let src = "\
public static HashMap<String, User> cache = new HashMap<>();
private HashMap<String, User> local = new HashMap<>();
public synchronized void update() {}
";
        let issues = run(check_concurrency, "A", src);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].location, "A.java:1");
        assert_eq!(issues[1].severity, Severity::Minor);
    }
}
