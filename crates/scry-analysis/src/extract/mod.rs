//! Regex-based extraction of imports, functions and classes.
//!
//! This is pattern matching over raw text, not parsing. Each language maps to
//! a fixed, ordered table of [`ExtractionRule`]s; rules run in table order
//! and names are appended in match order. Duplicates are kept.
//!
//! ```
//! use scry_analysis::{extract, Language};
//!
//! let found = extract("import os\n\ndef main():\n    pass\n", Language::Python);
//! assert_eq!(found.imports, vec!["os"]);
//! assert_eq!(found.functions, vec!["main"]);
//! ```

mod rules;

pub use rules::{ExtractionRule, PostProcess, Role, rules_for};

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Names found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub imports: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
}

impl Extraction {
    fn bucket(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::Import => &mut self.imports,
            Role::Function => &mut self.functions,
            Role::Class => &mut self.classes,
        }
    }
}

/// Run the table for `language` over `content`.
///
/// Never fails: languages without rules, and empty content, yield an empty
/// [`Extraction`].
pub fn extract(content: &str, language: Language) -> Extraction {
    let mut found = Extraction::default();

    for rule in rules_for(language) {
        let out = found.bucket(rule.role);
        for caps in rule.pattern.captures_iter(content) {
            // Alternations leave all but one group unset.
            if let Some(m) = caps.iter().skip(1).flatten().next() {
                rules::emit(rule.post, m.as_str(), out);
            }
        }
    }

    found
}
