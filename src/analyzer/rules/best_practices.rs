//! Best practice rules (BP001-BP006)

use super::{pattern, Rule, RuleOutcome};
use crate::{FileKind, FileRecord, Framework, Severity};
use regex::Regex;

pub const RULES: &[Rule] = &[
    Rule {
        id: "BP001",
        name: "TypeScript Usage",
        description: "Large files use TypeScript and TypeScript files declare types",
        severity: Severity::Warning,
        weight: 20,
        check: typescript_usage,
    },
    Rule {
        id: "BP002",
        name: "Error Handling",
        description: "Asynchronous code handles errors",
        severity: Severity::Error,
        weight: 18,
        check: error_handling,
    },
    Rule {
        id: "BP003",
        name: "Security Practices",
        description: "No innerHTML, eval or document.write",
        severity: Severity::Error,
        weight: 15,
        check: security_practices,
    },
    Rule {
        id: "BP004",
        name: "Testing Coverage",
        description: "Components carry tests",
        severity: Severity::Warning,
        weight: 12,
        check: testing_coverage,
    },
    Rule {
        id: "BP005",
        name: "Accessibility",
        description: "Images, buttons and inputs are labelled",
        severity: Severity::Warning,
        weight: 10,
        check: accessibility,
    },
    Rule {
        id: "BP006",
        name: "Framework Conventions",
        description: "React hook rules and Vue single-file component layout",
        severity: Severity::Warning,
        weight: 15,
        check: framework_conventions,
    },
];

fn typescript_usage(file: &FileRecord) -> RuleOutcome {
    let typescript = file.is_typescript();
    if !typescript && file.lines > 50 {
        return RuleOutcome::fail("Consider migrating large files to TypeScript");
    }
    if typescript && file.lines > 20 {
        let annotated = pattern!(r":\s*\w+(\[\])?(\s*\|\s*\w+(\[\])?)*\s*[=;,\)]")
            .is_match(&file.content);
        if !annotated {
            return RuleOutcome::fail("TypeScript files should declare types");
        }
    }
    RuleOutcome::pass("TypeScript usage is correct")
}

fn error_handling(file: &FileRecord) -> RuleOutcome {
    let asynchronous = pattern!(r"async\s+|await\s+|\.then\s*\(|\.catch\s*\(|fetch\s*\(")
        .is_match(&file.content);
    let handled = pattern!(r"try\s*\{|catch\s*\(|\.catch\s*\(").is_match(&file.content);
    if asynchronous && !handled {
        return RuleOutcome::fail("Asynchronous operations should handle errors");
    }
    RuleOutcome::pass("Errors are handled")
}

fn security_practices(file: &FileRecord) -> RuleOutcome {
    let checks: [(&Regex, &str); 4] = [
        (pattern!(r"innerHTML\s*="), "Using innerHTML can lead to XSS"),
        (pattern!(r"eval\s*\("), "eval is unsafe"),
        (pattern!(r"document\.write\s*\("), "document.write is deprecated and unsafe"),
        (pattern!(r"dangerouslySetInnerHTML"), "Be careful with dangerouslySetInnerHTML"),
    ];
    match checks.iter().find(|(re, _)| re.is_match(&file.content)) {
        Some((_, message)) => RuleOutcome::fail(*message),
        None => RuleOutcome::pass("No security problems found"),
    }
}

fn testing_coverage(file: &FileRecord) -> RuleOutcome {
    if file.kind == FileKind::Test {
        return RuleOutcome::pass("This is a test file");
    }
    let has_tests = pattern!(r"describe\s*\(|it\s*\(|test\s*\(").is_match(&file.content);
    if file.kind == FileKind::Component && !has_tests && file.lines > 30 {
        return RuleOutcome::fail("Components should have tests");
    }
    RuleOutcome::pass("Testing looks fine")
}

fn accessibility(file: &FileRecord) -> RuleOutcome {
    if file.kind != FileKind::Component {
        return RuleOutcome::pass("Not applicable");
    }
    if unlabelled(&file.content, pattern!(r"<img[^>]*"), pattern!(r"alt\s*=")) {
        return RuleOutcome::fail("Images should have an alt attribute");
    }
    if pattern!(r"<button[^>]*>\s*</button>").is_match(&file.content) {
        return RuleOutcome::fail("Buttons should have text or an aria-label");
    }
    if unlabelled(
        &file.content,
        pattern!(r"<input[^>]*"),
        pattern!(r"(?:aria-label|placeholder)\s*="),
    ) {
        return RuleOutcome::fail("Inputs should have labels or an aria-label");
    }
    RuleOutcome::pass("Accessibility looks fine")
}

/// True when some tag opening matched by `tag` lacks `attribute` before its closing `>`
fn unlabelled(content: &str, tag: &Regex, attribute: &Regex) -> bool {
    tag.find_iter(content)
        .any(|m| !attribute.is_match(m.as_str()))
}

fn framework_conventions(file: &FileRecord) -> RuleOutcome {
    match file.framework {
        Framework::React => {
            let hooks = pattern!(r"use\w+\s*\(").is_match(&file.content);
            let class_component = pattern!(r"class\s+\w+\s+extends\s+(React\.)?Component")
                .is_match(&file.content);
            if class_component && hooks {
                return RuleOutcome::fail("Don't mix class components with hooks");
            }
            if hooks && pattern!(r"if\s*\([^)]+\)\s*\{[^}]*use\w+").is_match(&file.content) {
                return RuleOutcome::fail("Hooks must not be called conditionally");
            }
        }
        Framework::Vue if file.path.ends_with(".vue") => {
            let script = file.content.contains("<script");
            let template = file.content.contains("<template");
            if !script || !template {
                return RuleOutcome::fail(
                    "Vue components should contain <script> and <template> sections",
                );
            }
        }
        _ => {}
    }
    RuleOutcome::pass("Framework conventions are followed")
}
