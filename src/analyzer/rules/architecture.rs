//! Architecture rules (ARCH001-ARCH006)

use super::{count_matches, pattern, Rule, RuleOutcome};
use crate::{FileKind, FileRecord, Severity};
use regex::Regex;

pub const RULES: &[Rule] = &[
    Rule {
        id: "ARCH001",
        name: "Separation of Concerns",
        description: "Components delegate data access to services",
        severity: Severity::Warning,
        weight: 20,
        check: separation_of_concerns,
    },
    Rule {
        id: "ARCH002",
        name: "Dependency Injection",
        description: "Services receive their dependencies instead of constructing them",
        severity: Severity::Info,
        weight: 15,
        check: dependency_injection,
    },
    Rule {
        id: "ARCH003",
        name: "Single Responsibility",
        description: "Files export few entities and classes have few methods",
        severity: Severity::Warning,
        weight: 18,
        check: single_responsibility,
    },
    Rule {
        id: "ARCH004",
        name: "Layered Architecture",
        description: "Components and views do not import the data layer",
        severity: Severity::Info,
        weight: 12,
        check: layered_architecture,
    },
    Rule {
        id: "ARCH005",
        name: "Design Patterns",
        description: "Singleton services and observer-style event handling",
        severity: Severity::Info,
        weight: 10,
        check: design_patterns,
    },
    Rule {
        id: "ARCH006",
        name: "Module Coupling",
        description: "Most imports are not parent-relative",
        severity: Severity::Warning,
        weight: 14,
        check: module_coupling,
    },
];

fn separation_of_concerns(file: &FileRecord) -> RuleOutcome {
    if file.kind == FileKind::Component {
        let patterns: [&Regex; 6] = [
            pattern!(r"fetch\s*\("),
            pattern!(r"axios\."),
            pattern!(r"\$http\."),
            pattern!(r"XMLHttpRequest"),
            pattern!(r"localStorage\."),
            pattern!(r"sessionStorage\."),
        ];
        let violations: usize = patterns.iter().map(|re| count_matches(&file.content, re)).sum();
        if violations > 2 {
            return RuleOutcome::fail(
                "Component contains too much business logic; move it into services",
            );
        }
    }
    RuleOutcome::pass("Concerns are separated")
}

fn dependency_injection(file: &FileRecord) -> RuleOutcome {
    if file.kind == FileKind::Service {
        let hardcoded = pattern!(r"new\s+\w+Service\s*\(").is_match(&file.content);
        let injected = pattern!(r"constructor\s*\([^)]*\w+Service").is_match(&file.content);
        if hardcoded && !injected {
            return RuleOutcome::fail(
                "Use dependency injection instead of instantiating services directly",
            );
        }
    }
    RuleOutcome::pass("Dependency injection looks fine")
}

fn single_responsibility(file: &FileRecord) -> RuleOutcome {
    let exports = count_matches(&file.content, pattern!(r"export\s+(class|function|const)"));
    if exports > 5 {
        return RuleOutcome::fail(format!(
            "File exports {} entities; consider splitting it into modules",
            exports
        ));
    }
    if count_matches(&file.content, pattern!(r"class\s+\w+")) > 0 {
        let methods = count_matches(&file.content, pattern!(r"\s+\w+\s*\([^)]*\)\s*\{"));
        if methods > 15 {
            return RuleOutcome::fail(format!(
                "Class has {} methods; consider decomposing it",
                methods
            ));
        }
    }
    RuleOutcome::pass("Single responsibility is respected")
}

fn layered_architecture(file: &FileRecord) -> RuleOutcome {
    let path = file.path.to_lowercase();
    if path.contains("component") || path.contains("view") {
        let direct = pattern!(r#"import.*from.*['"](.*/)?api/|.*/data/|.*/repository/"#)
            .is_match(&file.content);
        if direct {
            return RuleOutcome::fail(
                "Components should not access the data layer directly; go through services",
            );
        }
    }
    RuleOutcome::pass("Layering is respected")
}

fn design_patterns(file: &FileRecord) -> RuleOutcome {
    match file.kind {
        FileKind::Service => {
            let singleton = pattern!(r"private\s+static\s+instance|getInstance\s*\(")
                .is_match(&file.content);
            let instantiates = pattern!(r"new\s+\w*Service\s*\(").is_match(&file.content);
            if instantiates && !singleton {
                return RuleOutcome::fail("Consider the Singleton pattern for services");
            }
        }
        FileKind::Component => {
            let events = pattern!(r"emit\s*\(|addEventListener|on\(").is_match(&file.content);
            let observer = pattern!(r"(?i)observer|subscribe|unsubscribe").is_match(&file.content);
            if events && file.lines > 100 && !observer {
                return RuleOutcome::fail(
                    "Consider the Observer pattern for complex components with events",
                );
            }
        }
        _ => {}
    }
    RuleOutcome::pass("Design patterns are used correctly")
}

fn module_coupling(file: &FileRecord) -> RuleOutcome {
    let imports: Vec<&str> = pattern!(r#"import\s+.*from\s+['"][^'"]+['"]"#)
        .find_iter(&file.content)
        .map(|m| m.as_str())
        .collect();
    let relative = imports.iter().filter(|imp| imp.contains("../")).count();
    if !imports.is_empty() && relative as f64 / imports.len() as f64 > 0.7 {
        return RuleOutcome::fail("High module coupling; consider restructuring");
    }
    RuleOutcome::pass("Module coupling is acceptable")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::test_support::record_as;
    use crate::Framework;

    fn component(path: &str, content: &str) -> FileRecord {
        record_as(path, content, Framework::React, FileKind::Component)
    }

    fn service(content: &str) -> FileRecord {
        record_as("src/userService.js", content, Framework::Unknown, FileKind::Service)
    }

    #[test]
    fn component_with_data_access_is_flagged() {
        let content = "fetch('/a');\nfetch('/b');\nlocalStorage.setItem('k', v);";
        assert!(!separation_of_concerns(&component("src/List.jsx", content)).passed);
        // Same content in a service is fine
        assert!(separation_of_concerns(&service(content)).passed);
    }

    #[test]
    fn service_constructing_dependencies() {
        let hardcoded = "const api = new ApiService();";
        assert!(!dependency_injection(&service(hardcoded)).passed);

        let injected = "class UserService { constructor(apiService) {} }\nconst api = new ApiService();";
        assert!(dependency_injection(&service(injected)).passed);
    }

    #[test]
    fn too_many_exports() {
        let content: String = (0..6).map(|i| format!("export const v{} = {};\n", i, i)).collect();
        let file = record_as("src/u.js", &content, Framework::Unknown, FileKind::Utility);
        assert_eq!(
            single_responsibility(&file).message,
            "File exports 6 entities; consider splitting it into modules"
        );
    }

    #[test]
    fn too_many_methods_in_class() {
        let methods: String = (0..16).map(|i| format!("  m{}() {{ return {}; }}\n", i, i)).collect();
        let content = format!("class Big {{\n{}}}\n", methods);
        let file = record_as("src/big.js", &content, Framework::Unknown, FileKind::Other);
        assert!(!single_responsibility(&file).passed);
    }

    #[test]
    fn component_path_importing_api_layer() {
        let content = "import { getUsers } from '../api/users';";
        assert!(!layered_architecture(&component("src/components/List.jsx", content)).passed);
        // Only component/view paths are checked
        let other = record_as("src/hooks/useUsers.js", content, Framework::React, FileKind::Utility);
        assert!(layered_architecture(&other).passed);
    }

    #[test]
    fn services_without_singleton() {
        assert!(!design_patterns(&service("export const s = new UserService();")).passed);
        let singleton = "static getInstance() {}\nexport const s = new UserService();";
        assert!(design_patterns(&service(singleton)).passed);
    }

    #[test]
    fn large_component_with_events_needs_observer() {
        let content = format!("emit('change');\n{}", "x();\n".repeat(120));
        assert!(!design_patterns(&component("src/Big.vue", &content)).passed);
        let small = "emit('change');";
        assert!(design_patterns(&component("src/Small.vue", small)).passed);
    }

    #[test]
    fn mostly_relative_imports_mean_coupling() {
        let coupled = "import a from '../a';\nimport b from '../../b';\nimport c from '../c';";
        let file = record_as("src/x/y.js", coupled, Framework::Unknown, FileKind::Other);
        assert!(!module_coupling(&file).passed);

        let mixed = "import a from '../a';\nimport React from 'react';";
        let file = record_as("src/x/y.js", mixed, Framework::Unknown, FileKind::Other);
        assert!(module_coupling(&file).passed);
    }
}
