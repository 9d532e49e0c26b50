//! Corpus-wide signals feeding the level gate

use crate::analyzer::rules::{cyclomatic_complexity, pattern};
use crate::{FileKind, FileRecord};

/// A corpus-wide practice probe worth `weight` points out of 100
pub struct PracticeCheck {
    pub name: &'static str,
    pub weight: u8,
    pub check: fn(&[FileRecord]) -> bool,
}

/// Weights sum to 100
pub const PRACTICE_CHECKS: &[PracticeCheck] = &[
    PracticeCheck {
        name: "TypeScript Usage",
        weight: 20,
        check: uses_typescript,
    },
    PracticeCheck {
        name: "Error Handling",
        weight: 15,
        check: handles_errors,
    },
    PracticeCheck {
        name: "Async/Await",
        weight: 10,
        check: uses_async,
    },
    PracticeCheck {
        name: "Modern ES6+",
        weight: 10,
        check: uses_modern_syntax,
    },
    PracticeCheck {
        name: "Documentation",
        weight: 15,
        check: has_doc_comments,
    },
    PracticeCheck {
        name: "Testing",
        weight: 20,
        check: has_tests,
    },
    PracticeCheck {
        name: "Code Organization",
        weight: 10,
        check: is_organized,
    },
];

fn uses_typescript(files: &[FileRecord]) -> bool {
    files.iter().any(FileRecord::is_typescript)
}

fn handles_errors(files: &[FileRecord]) -> bool {
    let re = pattern!(r"try\s*\{|catch\s*\(");
    files.iter().any(|f| re.is_match(&f.content))
}

fn uses_async(files: &[FileRecord]) -> bool {
    let re = pattern!(r"async\s+|await\s+");
    files.iter().any(|f| re.is_match(&f.content))
}

fn uses_modern_syntax(files: &[FileRecord]) -> bool {
    let re = pattern!(r"const\s+|let\s+|arrow functions|destructuring");
    files.iter().any(|f| re.is_match(&f.content))
}

fn has_doc_comments(files: &[FileRecord]) -> bool {
    let re = pattern!(r"/\*\*[\s\S]*?\*/");
    files.iter().any(|f| re.is_match(&f.content))
}

fn has_tests(files: &[FileRecord]) -> bool {
    files.iter().any(|f| f.kind == FileKind::Test)
}

/// Components alongside services or utilities
fn is_organized(files: &[FileRecord]) -> bool {
    let has = |kind: FileKind| files.iter().any(|f| f.kind == kind);
    has(FileKind::Component) && (has(FileKind::Service) || has(FileKind::Utility))
}

/// Sum of the weights of passing practice checks (0-100)
pub fn practice_score(files: &[FileRecord]) -> u8 {
    PRACTICE_CHECKS
        .iter()
        .filter(|c| (c.check)(files))
        .map(|c| c.weight)
        .sum()
}

/// Mean per-file cyclomatic complexity, `None` for an empty corpus
pub fn mean_complexity(files: &[FileRecord]) -> Option<f64> {
    if files.is_empty() {
        return None;
    }
    let total: usize = files.iter().map(|f| cyclomatic_complexity(&f.content)).sum();
    Some(total as f64 / files.len() as f64)
}

/// Inverted complexity band: lower mean complexity scores higher.
/// An empty corpus has no mean and lands in the lowest band.
pub fn complexity_score(files: &[FileRecord]) -> u8 {
    match mean_complexity(files) {
        Some(mean) if mean <= 5.0 => 100,
        Some(mean) if mean <= 10.0 => 80,
        Some(mean) if mean <= 15.0 => 60,
        Some(mean) if mean <= 20.0 => 40,
        _ => 20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::test_support::{record, record_as};
    use crate::Framework;

    #[test]
    fn practice_weights_sum_to_100() {
        let total: u32 = PRACTICE_CHECKS.iter().map(|c| u32::from(c.weight)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn practice_score_of_empty_corpus_is_zero() {
        assert_eq!(practice_score(&[]), 0);
    }

    #[test]
    fn practice_score_accumulates_checks() {
        let files = vec![
            record_as(
                "src/App.tsx",
                "/** App */\nexport default function App() { const x = 1; }",
                Framework::React,
                FileKind::Component,
            ),
            record_as(
                "src/api.ts",
                "export async function load() { try { await go(); } catch (e) {} }",
                Framework::Unknown,
                FileKind::Service,
            ),
        ];
        // everything except testing
        assert_eq!(practice_score(&files), 80);
    }

    #[test]
    fn organization_needs_component_and_helper() {
        let component = record_as("src/A.jsx", "", Framework::React, FileKind::Component);
        let utility = record_as("src/u.js", "", Framework::Unknown, FileKind::Utility);
        assert!(!is_organized(std::slice::from_ref(&component)));
        assert!(is_organized(&[component, utility]));
    }

    #[test]
    fn complexity_bands() {
        assert_eq!(complexity_score(&[record("a.js", "x();")]), 100);
        let branches = |n: usize| record("a.js", &"if (a) {}\n".repeat(n));
        // mean 1 + n
        assert_eq!(complexity_score(&[branches(4)]), 100);
        assert_eq!(complexity_score(&[branches(9)]), 80);
        assert_eq!(complexity_score(&[branches(14)]), 60);
        assert_eq!(complexity_score(&[branches(19)]), 40);
        assert_eq!(complexity_score(&[branches(20)]), 20);
    }

    #[test]
    fn empty_corpus_has_lowest_complexity_band() {
        assert_eq!(mean_complexity(&[]), None);
        assert_eq!(complexity_score(&[]), 20);
    }
}
