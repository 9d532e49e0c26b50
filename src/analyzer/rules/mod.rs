//! Rule records and the per-category rule tables

pub mod architecture;
pub mod best_practices;
pub mod code_quality;
pub mod maintainability;
pub mod performance;

use crate::{Category, FileRecord, Severity};
use regex::Regex;

/// Compile a pattern once and hand out a `&'static Regex`
macro_rules! pattern {
    ($re:expr $(,)?) => {{
        static RE: std::sync::LazyLock<::regex::Regex> =
            std::sync::LazyLock::new(|| ::regex::Regex::new($re).expect("valid rule pattern"));
        &*RE
    }};
}
pub(crate) use pattern;

/// One weighted, named, pure check.
///
/// `check` must be total: it reads the record and never panics. When it finds
/// no evidence of a problem it passes.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable id, unique within its category (e.g. `CQ001`)
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    /// Points at stake for each file
    pub weight: u32,
    pub check: fn(&FileRecord) -> RuleOutcome,
}

impl Rule {
    pub fn evaluate(&self, file: &FileRecord) -> RuleOutcome {
        (self.check)(file)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Result of running one rule on one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub passed: bool,
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl RuleOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// The ordered rule table of a category
pub fn for_category(category: Category) -> &'static [Rule] {
    match category {
        Category::CodeQuality => code_quality::RULES,
        Category::Performance => performance::RULES,
        Category::Architecture => architecture::RULES,
        Category::BestPractices => best_practices::RULES,
        Category::Maintainability => maintainability::RULES,
    }
}

/// Fail at the first match of `pattern`, pass otherwise
pub fn check_regex_in_file(content: &str, pattern: &Regex, message: &str) -> RuleOutcome {
    match pattern.find(content) {
        Some(m) => {
            let (line, column) = line_column(content, m.start());
            RuleOutcome::fail(message).at(line, column)
        }
        None => RuleOutcome::pass("OK"),
    }
}

/// 1-indexed line and 0-indexed column (in characters) of a byte offset
pub fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (line, before[line_start..].chars().count())
}

/// Number of non-overlapping matches
pub fn count_matches(content: &str, pattern: &Regex) -> usize {
    pattern.find_iter(content).count()
}

/// Approximate cyclomatic complexity: 1 plus one per branch, loop, catch,
/// case and logical operator token. `else if` counts twice (once as `if`).
pub fn cyclomatic_complexity(content: &str) -> usize {
    let patterns: [&Regex; 8] = [
        pattern!(r"if\s*\("),
        pattern!(r"else\s*if\s*\("),
        pattern!(r"while\s*\("),
        pattern!(r"for\s*\("),
        pattern!(r"catch\s*\("),
        pattern!(r"case\s+"),
        pattern!(r"&&"),
        pattern!(r"\|\|"),
    ];
    1 + patterns
        .iter()
        .map(|re| count_matches(content, re))
        .sum::<usize>()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::detector::{classify_type, detect_framework};
    use crate::{FileKind, FileRecord, Framework};

    /// Record with detection applied, like the classifier would build it
    pub fn record(path: &str, content: &str) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            content: content.to_string(),
            size: content.len(),
            lines: content.split('\n').count(),
            framework: detect_framework(content, path),
            kind: classify_type(path, content),
        }
    }

    /// Record with an explicit framework and kind
    pub fn record_as(path: &str, content: &str, framework: Framework, kind: FileKind) -> FileRecord {
        FileRecord {
            framework,
            kind,
            ..record(path, content)
        }
    }
}
