//! Type declarations found in a source file.
//!
//! A declaration's body is the text between it and the next declaration in
//! the same file. Methods are searched in that span; fields only inside the
//! declaration's own brace block (or, for Python, its indented body).

use std::sync::LazyLock;

use regex::Regex;

use crate::language::Language;
use crate::source::SourceFile;

/// A class-like declaration with the names found around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Relative path of the declaring file.
    pub file: String,
    pub language: Language,
    /// `class`, `struct`, `trait`, `interface`, ...
    pub keyword: String,
    /// Python base classes, verbatim.
    pub bases: Vec<String>,
    pub methods: Vec<String>,
    pub fields: Vec<String>,
    /// Text from the declaration up to the next one.
    pub body: String,
}

impl Declaration {
    pub fn is_interface(&self) -> bool {
        matches!(self.keyword.as_str(), "trait" | "interface")
            || (self.language == Language::Python
                && (self.body.contains("abstractmethod")
                    || self.body.contains("Protocol")
                    || PYTHON_STUB_BODY.is_match(&self.body)))
    }
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in declaration pattern should compile")
}

/// Groups: 1 keyword, 2 name, 3 optional Python bases.
static PYTHON_DECL: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)^[ \t]*(class)[ \t]+(\w+)[ \t]*(?:\(([^)]*)\))?[ \t]*:"));
static RUST_DECL: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?[ \t]+)?(struct|trait)[ \t]+(\w+)"));
static SCRIPT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?m)^[ \t]*(?:export[ \t]+)?(?:default[ \t]+)?(?:abstract[ \t]+)?(class|interface)[ \t]+(\w+)")
});
static JAVA_DECL: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?m)^[ \t]*(?:(?:public|private|protected|abstract|final|static|sealed)[ \t]+)*(class|interface|record)[ \t]+(\w+)")
});
static GO_DECL: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)^type[ \t]+(\w+)[ \t]+(struct|interface)\b"));

static PYTHON_METHOD: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)^[ \t]+(?:async[ \t]+)?def[ \t]+(\w+)"));
static RUST_METHOD: LazyLock<Regex> = LazyLock::new(|| re(r"\bfn[ \t]+(\w+)"));
/// Groups: 1 return type or last modifier, 2 name.
static JAVA_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?m)^[ \t]+(?:(?:public|private|protected|static|final|abstract|synchronized|default)[ \t]+)*([\w<>\[\],.?]+)[ \t]+(\w+)[ \t]*\(")
});
static SCRIPT_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?m)^[ \t]+(?:(?:public|private|protected|static|async|readonly|abstract|get|set)[ \t]+)*(\w+)[ \t]*(?:<[^>\n]*>)?\([^)\n]*\)[ \t]*(?::[^{;\n]*)?[{;]")
});
static GO_METHOD: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)^func[ \t]+\([^)]*\)[ \t]+(\w+)"));

static PYTHON_FIELD: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)^[ \t]+(\w+)[ \t]*:[ \t]*[\w\[]"));
static RUST_FIELD: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)^[ \t]+(?:pub(?:\([^)]*\))?[ \t]+)?(\w+)[ \t]*:[ \t]*[\w&\[(]"));
static SCRIPT_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?m)^[ \t]+(?:(?:public|private|protected|readonly|static)[ \t]+)*(\w+)[ \t]*[?!]?:[ \t]*[^;\n(]+;")
});
static JAVA_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?m)^[ \t]+(?:(?:private|protected|public|static|final|transient|volatile)[ \t]+)+[\w<>\[\],.? ]+?[ \t]+(\w+)[ \t]*(?:=[^;]*)?;")
});
static GO_FIELD: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)^[ \t]+([A-Za-z_]\w*)[ \t]+[\w*\[\].]+"));

static PYTHON_STUB_BODY: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?m)def[ \t]+\w+\([^)]*\)[^:\n]*:[ \t]*\n?[ \t]*(?:pass|\.\.\.)[ \t]*$"));

const NOT_METHODS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "new", "throw", "else", "function",
    "super", "this",
];

const IDENTITY_FIELDS: &[&str] = &["id", "uuid", "entity_id"];

/// Field that identifies an entity, if any.
pub fn identity_field(fields: &[String]) -> Option<String> {
    fields
        .iter()
        .find(|f| IDENTITY_FIELDS.contains(&f.as_str()))
        .cloned()
}

/// Find declarations in a file. Languages without declaration patterns
/// yield nothing.
pub fn scan(source: &SourceFile) -> Vec<Declaration> {
    let text = source.text();
    let language = source.language;

    // (keyword group, name group)
    let (decl, groups) = match language {
        Language::Python => (&*PYTHON_DECL, (1, 2)),
        Language::Rust => (&*RUST_DECL, (1, 2)),
        Language::TypeScript | Language::JavaScript => (&*SCRIPT_DECL, (1, 2)),
        Language::Java => (&*JAVA_DECL, (1, 2)),
        Language::Go => (&*GO_DECL, (2, 1)),
        _ => return Vec::new(),
    };

    let found: Vec<_> = decl
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let keyword = caps.get(groups.0)?.as_str().to_string();
            let name = caps.get(groups.1)?.as_str().to_string();
            let bases = caps
                .get(3)
                .filter(|_| language == Language::Python)
                .map(|m| split_bases(m.as_str()))
                .unwrap_or_default();
            Some((whole.start(), whole.end(), keyword, name, bases))
        })
        .collect();

    let mut declarations = Vec::with_capacity(found.len());
    for (idx, (start, end, keyword, name, bases)) in found.iter().enumerate() {
        let span_end = found.get(idx + 1).map_or(text.len(), |next| next.0);
        let span = &text[*start..span_end];
        let after = &text[*end..span_end];

        let methods = find_methods(language, span);
        let fields = match language {
            Language::Python => capture_all(&PYTHON_FIELD, python_body(after)),
            Language::Rust => capture_all(&RUST_FIELD, brace_block(after)),
            Language::TypeScript | Language::JavaScript => {
                capture_all(&SCRIPT_FIELD, brace_block(after))
            }
            Language::Java => capture_all(&JAVA_FIELD, brace_block(after)),
            Language::Go => capture_all(&GO_FIELD, brace_block(after)),
            _ => Vec::new(),
        };

        declarations.push(Declaration {
            name: name.clone(),
            file: source.relative_path.clone(),
            language,
            keyword: keyword.clone(),
            bases: bases.clone(),
            methods,
            fields,
            body: span.to_string(),
        });
    }

    declarations
}

fn find_methods(language: Language, span: &str) -> Vec<String> {
    match language {
        Language::Python => capture_all(&PYTHON_METHOD, span),
        Language::Rust => capture_all(&RUST_METHOD, span),
        Language::Go => capture_all(&GO_METHOD, span),
        Language::Java => JAVA_METHOD
            .captures_iter(span)
            .filter(|caps| !NOT_METHODS.contains(&&caps[1]) && !NOT_METHODS.contains(&&caps[2]))
            .map(|caps| caps[2].to_string())
            .collect(),
        Language::TypeScript | Language::JavaScript => capture_all(&SCRIPT_METHOD, span)
            .into_iter()
            .filter(|name| !NOT_METHODS.contains(&name.as_str()))
            .collect(),
        _ => Vec::new(),
    }
}

fn capture_all(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn split_bases(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text inside the first `{ ... }` block, or empty when a `;` comes first
/// (unit and tuple structs).
fn brace_block(text: &str) -> &str {
    let Some(open) = text.find(['{', ';']) else {
        return "";
    };
    if text.as_bytes()[open] == b';' {
        return "";
    }

    let mut depth = 0usize;
    for (offset, ch) in text[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return &text[open + 1..open + offset];
                }
            }
            _ => {}
        }
    }
    &text[open + 1..]
}

/// Indented lines following a Python class header, stopping at the first
/// non-blank line with no indentation.
fn python_body(text: &str) -> &str {
    let mut end = 0;
    let mut first = true;
    for line in text.split_inclusive('\n') {
        if !first && !line.trim().is_empty() && !line.starts_with([' ', '\t']) {
            break;
        }
        first = false;
        end += line.len();
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn source(path: &str, language: Language, content: &str) -> SourceFile {
        SourceFile::from_bytes(PathBuf::from(path), path.to_string(), language, content.as_bytes())
    }

    #[test]
    fn test_python_declarations() {
        let src = "\
from dataclasses import dataclass

class OrderAggregate(AggregateRoot):
    id: str
    items: list[OrderItem]

    def add_item(self, item):
        pass

    async def confirm(self):
        return True

def helper():
    pass

@dataclass(frozen=True)
class Money:
    amount: int
";
        let decls = scan(&source("orders/order.py", Language::Python, src));
        assert_eq!(decls.len(), 2);

        let order = &decls[0];
        assert_eq!(order.name, "OrderAggregate");
        assert_eq!(order.bases, vec!["AggregateRoot"]);
        assert_eq!(order.methods, vec!["add_item", "confirm"]);
        assert_eq!(order.fields, vec!["id", "items"]);
        assert_eq!(identity_field(&order.fields), Some("id".to_string()));

        assert_eq!(decls[1].name, "Money");
        assert_eq!(decls[1].fields, vec!["amount"]);
    }

    #[test]
    fn test_rust_struct_and_trait() {
        let src = "\
pub struct Order {
    pub id: OrderId,
    lines: Vec<Line>,
}

impl Order {
    pub fn add(&mut self) {}
    fn total(&self) -> u32 { 0 }
}

pub struct OrderId(String);

pub trait OrderRepository {
    fn find(&self, id: &OrderId) -> Option<Order>;
}
";
        let decls = scan(&source("src/order.rs", Language::Rust, src));
        let names: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Order", "OrderId", "OrderRepository"]);

        assert_eq!(decls[0].fields, vec!["id", "lines"]);
        assert_eq!(decls[0].methods, vec!["add", "total"]);
        assert!(decls[1].fields.is_empty());
        assert!(decls[2].is_interface());
        assert_eq!(decls[2].methods, vec!["find"]);
    }

    #[test]
    fn test_typescript_class() {
        let src = "\
export class UserEntity {
  private readonly id: string;
  name?: string;

  constructor(id: string) {
    if (id) {
      this.id = id;
    }
  }

  rename(name: string): void {
    this.name = name;
  }
}

export interface UserRepository {
  findById(id: string): Promise<UserEntity>;
}
";
        let decls = scan(&source("users/user.ts", Language::TypeScript, src));
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].fields, vec!["id", "name"]);
        assert_eq!(decls[0].methods, vec!["constructor", "rename"]);
        assert_eq!(decls[1].keyword, "interface");
        assert_eq!(decls[1].methods, vec!["findById"]);
    }

    #[test]
    fn test_java_class() {
        let src = "\
public class OrderService {
    private final OrderRepository repository;

    public Order place(Cart cart) {
        if (cart.isEmpty()) {
            return null;
        }
        return repository.save(cart.toOrder());
    }

    void cancel(String id) {}
}
";
        let decls = scan(&source("Order.java", Language::Java, src));
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].fields, vec!["repository"]);
        assert_eq!(decls[0].methods, vec!["place", "cancel"]);
    }

    #[test]
    fn test_go_types() {
        let src = "\
package orders

type Order struct {
\tID    string
\tTotal int
}

func (o *Order) Confirm() error { return nil }

type Store interface {
\tSave(o *Order) error
}
";
        let decls = scan(&source("orders/order.go", Language::Go, src));
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].keyword, "struct");
        assert_eq!(decls[0].fields, vec!["ID", "Total"]);
        assert_eq!(decls[0].methods, vec!["Confirm"]);
        assert!(decls[1].is_interface());
    }

    #[test]
    fn test_unsupported_language() {
        assert!(scan(&source("a.rb", Language::Ruby, "class Foo\nend\n")).is_empty());
    }

    #[test]
    fn test_python_stub_is_interface() {
        let src = "class UserRepo:\n    def find(self, id):\n        pass\n";
        let decls = scan(&source("repo.py", Language::Python, src));
        assert!(decls[0].is_interface());
    }
}
