//! Maintainability rules (MAINT001-MAINT006)

use super::{count_matches, pattern, Rule, RuleOutcome};
use crate::{FileRecord, Severity};
use regex::Regex;

pub const RULES: &[Rule] = &[
    Rule {
        id: "MAINT001",
        name: "Documentation",
        description: "Functions and classes carry JSDoc comments",
        severity: Severity::Info,
        weight: 12,
        check: documentation,
    },
    Rule {
        id: "MAINT002",
        name: "Code Readability",
        description: "Short lines and shallow nesting",
        severity: Severity::Warning,
        weight: 15,
        check: readability,
    },
    Rule {
        id: "MAINT003",
        name: "Naming Consistency",
        description: "One identifier style per file",
        severity: Severity::Warning,
        weight: 10,
        check: naming_consistency,
    },
    Rule {
        id: "MAINT004",
        name: "Dead Code",
        description: "No unused imports or commented-out code",
        severity: Severity::Warning,
        weight: 8,
        check: dead_code,
    },
    Rule {
        id: "MAINT005",
        name: "Configuration Management",
        description: "URLs and paths live in configuration",
        severity: Severity::Info,
        weight: 7,
        check: configuration_management,
    },
    Rule {
        id: "MAINT006",
        name: "Error Messages",
        description: "Thrown errors carry specific messages",
        severity: Severity::Info,
        weight: 8,
        check: error_messages,
    },
];

fn documentation(file: &FileRecord) -> RuleOutcome {
    let docs = count_matches(&file.content, pattern!(r"/\*\*[\s\S]*?\*/"));
    let functions = count_matches(&file.content, pattern!(r"function\s+\w+|const\s+\w+\s*=\s*\("));
    let classes = count_matches(&file.content, pattern!(r"class\s+\w+"));
    let items = functions + classes;
    if items > 3 && (docs as f64 / items as f64) < 0.3 {
        return RuleOutcome::fail("Not enough JSDoc comments for public functions and classes");
    }
    RuleOutcome::pass("Documentation looks fine")
}

fn readability(file: &FileRecord) -> RuleOutcome {
    let lines: Vec<&str> = file.content.split('\n').collect();
    let long = lines.iter().filter(|l| l.chars().count() > 120).count();
    if long as f64 / lines.len() as f64 > 0.1 {
        return RuleOutcome::fail(format!("{} lines exceed 120 characters; wrap them", long));
    }
    // 16+ whitespace characters, roughly four levels of nesting
    if count_matches(&file.content, pattern!(r"\s{16,}")) > 5 {
        return RuleOutcome::fail("Deep nesting makes the code hard to read");
    }
    RuleOutcome::pass("Code readability is fine")
}

fn naming_consistency(file: &FileRecord) -> RuleOutcome {
    let camel = count_matches(&file.content, pattern!(r"\b[a-z][a-zA-Z0-9]*\b"));
    let snake = count_matches(&file.content, pattern!(r"\b[a-z]+_[a-z_]+\b"));
    if camel > 0 && snake > 0 && snake as f64 / camel as f64 > 0.3 {
        return RuleOutcome::fail("Mixed camelCase and snake_case naming; pick one style");
    }
    RuleOutcome::pass("Naming is consistent")
}

fn dead_code(file: &FileRecord) -> RuleOutcome {
    let unused = pattern!(r#"import\s+(?:\{[^}]+\}|\w+)\s+from\s+['"][^'"]+['"]"#)
        .find_iter(&file.content)
        .filter(|m| import_is_unused(&file.content, m.as_str()))
        .count();
    if unused > 0 {
        return RuleOutcome::fail(format!("Found {} unused imports", unused));
    }

    let commented = file
        .content
        .split('\n')
        .map(str::trim)
        .filter(|l| {
            l.starts_with("//")
                && (l.contains("function") || l.contains("const ") || l.contains("let "))
        })
        .count();
    if commented > 3 {
        return RuleOutcome::fail(format!(
            "Found {} lines of commented-out code; remove them",
            commented
        ));
    }
    RuleOutcome::pass("No dead code found")
}

/// An import is unused when one of its names never appears as a whole word in
/// the content with the first copy of the import statement removed
fn import_is_unused(content: &str, statement: &str) -> bool {
    let Some(caps) = pattern!(r"import\s+(?:\{([^}]+)\}|(\w+))").captures(statement) else {
        return false;
    };
    let names: Vec<&str> = match (caps.get(1), caps.get(2)) {
        (Some(list), _) => list.as_str().split(',').map(str::trim).collect(),
        (None, Some(name)) => vec![name.as_str()],
        (None, None) => return false,
    };
    let rest = content.replacen(statement, "", 1);
    names.iter().any(|name| match Regex::new(&format!(r"\b{}\b", regex::escape(name))) {
        Ok(re) => !re.is_match(&rest),
        Err(_) => false,
    })
}

fn configuration_management(file: &FileRecord) -> RuleOutcome {
    let urls = count_matches(&file.content, pattern!(r#"https?://[^\s'"]+"#));
    let paths = count_matches(&file.content, pattern!(r#"['"][A-Za-z]:\\[^'"]*['"]"#));
    if urls > 2 || paths > 0 {
        return RuleOutcome::fail("Hardcoded URLs or paths found; move them to configuration");
    }
    RuleOutcome::pass("Configuration is managed correctly")
}

fn error_messages(file: &FileRecord) -> RuleOutcome {
    // whole `throw new Error(...)` statements, so "Error" always counts as generic
    let messages: Vec<&str> = pattern!(r#"throw\s+new\s+Error\s*\(\s*['"`]([^'"`]+)['"`]\s*\)"#)
        .find_iter(&file.content)
        .map(|m| m.as_str())
        .collect();
    let generic = messages
        .iter()
        .filter(|m| m.contains("Error") || m.contains("Something went wrong") || m.contains("Failed"))
        .count();
    if !messages.is_empty() && generic as f64 > messages.len() as f64 * 0.5 {
        return RuleOutcome::fail("Use more specific error messages");
    }
    RuleOutcome::pass("Error messages are informative")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::test_support::record;

    #[test]
    fn undocumented_functions() {
        let content = "function a() {}\nfunction b() {}\nfunction c() {}\nfunction d() {}";
        assert!(!documentation(&record("src/a.js", content)).passed);

        let documented = "/** a */\nfunction a() {}\n/** b */\nfunction b() {}\nfunction c() {}\nfunction d() {}";
        assert!(documentation(&record("src/a.js", documented)).passed);
    }

    #[test]
    fn long_lines_reported_with_count() {
        let long = "x".repeat(130);
        let content = format!("{}\nshort\n{}", long, long);
        assert_eq!(
            readability(&record("src/a.js", &content)).message,
            "2 lines exceed 120 characters; wrap them"
        );
    }

    #[test]
    fn deep_nesting() {
        let content = format!("{}{}", "\n", "                    x();\n".repeat(6));
        assert_eq!(
            readability(&record("src/a.js", &content)).message,
            "Deep nesting makes the code hard to read"
        );
    }

    #[test]
    fn mixed_naming_styles() {
        let mixed = "let user_name = 1; let item_count = 2; let fooBar = 3;";
        assert!(!naming_consistency(&record("src/a.js", mixed)).passed);
        let camel = "let userName = 1; let itemCount = 2;";
        assert!(naming_consistency(&record("src/a.js", camel)).passed);
    }

    #[test]
    fn unused_named_import() {
        let content = "import { useState, useEffect } from 'react';\nconst [a, b] = useState(0);";
        assert_eq!(dead_code(&record("src/a.js", content)).message, "Found 1 unused imports");

        let used = "import { useState } from 'react';\nconst [a, b] = useState(0);";
        assert!(dead_code(&record("src/a.js", used)).passed);
    }

    #[test]
    fn unused_default_import() {
        let content = "import lodash from 'lodash';\nconsole.log(1);";
        assert!(!dead_code(&record("src/a.js", content)).passed);
    }

    #[test]
    fn commented_out_code() {
        let content = "// const a = 1;\n// let b = 2;\n// function c() {}\n// const d = 4;\nrun();";
        assert_eq!(
            dead_code(&record("src/a.js", content)).message,
            "Found 4 lines of commented-out code; remove them"
        );
    }

    #[test]
    fn hardcoded_urls_and_paths() {
        let urls = "a('https://a.io'); b('https://b.io'); c('http://c.io');";
        assert!(!configuration_management(&record("src/a.js", urls)).passed);
        let path = r#"const dir = "C:\\data";"#;
        assert!(!configuration_management(&record("src/a.js", path)).passed);
        assert!(configuration_management(&record("src/a.js", "fetch(API_URL);")).passed);
    }

    #[test]
    fn generic_error_messages() {
        let generic = "throw new Error('Something went wrong');\nthrow new Error('Failed');";
        assert!(!error_messages(&record("src/a.js", generic)).passed);
        assert!(error_messages(&record("src/a.js", "return null;")).passed);
    }

    #[test]
    fn any_string_error_throw_counts_as_generic() {
        let single = "throw new Error('User not found');";
        let outcome = error_messages(&record("src/a.js", single));
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "Use more specific error messages");

        let mixed = "if (!user) {\n  throw new Error('User not found');\n}\nthrow new Error(`Invalid id ${id}`);";
        assert!(!error_messages(&record("src/a.js", mixed)).passed);
    }

    #[test]
    fn custom_error_types_are_not_counted() {
        let custom = "throw new NotFoundError('User not found');\nthrow new Error(reason);";
        assert!(error_messages(&record("src/a.js", custom)).passed);
    }
}
