//! Code quality rules (CQ001-CQ006)

use super::{check_regex_in_file, count_matches, cyclomatic_complexity, pattern, Rule, RuleOutcome};
use crate::{FileKind, FileRecord, Severity};
use std::collections::HashMap;

pub const RULES: &[Rule] = &[
    Rule {
        id: "CQ001",
        name: "Naming Conventions",
        description: "Variables and functions use camelCase names",
        severity: Severity::Warning,
        weight: 10,
        check: naming_conventions,
    },
    Rule {
        id: "CQ002",
        name: "Function Length",
        description: "Named functions stay under 50 lines",
        severity: Severity::Warning,
        weight: 15,
        check: function_length,
    },
    Rule {
        id: "CQ003",
        name: "Cyclomatic Complexity",
        description: "Branching stays within 15 (components) or 10 (other files)",
        severity: Severity::Error,
        weight: 20,
        check: complexity,
    },
    Rule {
        id: "CQ004",
        name: "Magic Numbers",
        description: "Numeric literals are named constants",
        severity: Severity::Info,
        weight: 5,
        check: magic_numbers,
    },
    Rule {
        id: "CQ005",
        name: "Code Duplication",
        description: "Few lines repeat within a file",
        severity: Severity::Warning,
        weight: 12,
        check: duplication,
    },
    Rule {
        id: "CQ006",
        name: "Comments Quality",
        description: "Comment density is neither too low nor too high",
        severity: Severity::Info,
        weight: 8,
        check: comments_quality,
    },
];

fn naming_conventions(file: &FileRecord) -> RuleOutcome {
    check_regex_in_file(
        &file.content,
        pattern!(r"\b(var|let|const|function)\s+[A-Z_][a-zA-Z0-9_]*\s*[=\(]"),
        "Variables and functions should use camelCase naming",
    )
}

fn function_length(file: &FileRecord) -> RuleOutcome {
    let long = pattern!(r"function\s+\w+[^{]*\{[^}]*\}")
        .find_iter(&file.content)
        .filter(|m| m.as_str().split('\n').count() > 50)
        .count();
    if long > 0 {
        return RuleOutcome::fail(format!("Found {} functions longer than 50 lines", long));
    }
    RuleOutcome::pass("Function length is acceptable")
}

fn complexity(file: &FileRecord) -> RuleOutcome {
    let complexity = cyclomatic_complexity(&file.content);
    let max = if file.kind == FileKind::Component { 15 } else { 10 };
    if complexity > max {
        return RuleOutcome::fail(format!(
            "Cyclomatic complexity {} exceeds the maximum of {}",
            complexity, max
        ));
    }
    RuleOutcome::pass("Complexity is acceptable")
}

fn magic_numbers(file: &FileRecord) -> RuleOutcome {
    // Two or more digits not starting with 0, 1 or 2
    let count = count_matches(&file.content, pattern!(r"\b[3-9]\d+\b"));
    if count > 3 {
        return RuleOutcome::fail(format!(
            "Found {} magic numbers; extract them into named constants",
            count
        ));
    }
    RuleOutcome::pass("No magic numbers found")
}

fn duplication(file: &FileRecord) -> RuleOutcome {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for line in file.content.split('\n').map(str::trim) {
        if line.chars().count() > 10 && !line.starts_with("//") && !line.starts_with('*') {
            *seen.entry(line).or_default() += 1;
        }
    }
    let duplicated = seen.values().filter(|&&n| n > 1).count();
    if duplicated as f64 > file.lines as f64 * 0.1 {
        return RuleOutcome::fail(format!("Found {} duplicated lines", duplicated));
    }
    RuleOutcome::pass("Code duplication is acceptable")
}

fn comments_quality(file: &FileRecord) -> RuleOutcome {
    let markers = count_matches(&file.content, pattern!(r"//|/\*|\*/"));
    let ratio = markers as f64 / file.lines.max(1) as f64;
    if ratio < 0.1 && file.lines > 50 {
        return RuleOutcome::fail("Add comments to explain complex logic");
    }
    if ratio > 0.5 {
        return RuleOutcome::fail("Too many comments. Code may need simplification");
    }
    RuleOutcome::pass("Comments quality is acceptable")
}
