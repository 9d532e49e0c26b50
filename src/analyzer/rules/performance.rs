//! Performance rules (PERF001-PERF006)

use super::{count_matches, pattern, Rule, RuleOutcome};
use crate::{FileKind, FileRecord, Framework, Severity};
use regex::Regex;

pub const RULES: &[Rule] = &[
    Rule {
        id: "PERF001",
        name: "Bundle Size",
        description: "Files stay under 20KB (components) or 10KB (other files)",
        severity: Severity::Warning,
        weight: 15,
        check: bundle_size,
    },
    Rule {
        id: "PERF002",
        name: "Lazy Loading",
        description: "Import-heavy components load modules lazily",
        severity: Severity::Info,
        weight: 10,
        check: lazy_loading,
    },
    Rule {
        id: "PERF003",
        name: "Heavy Operations",
        description: "No expensive work inline in render output",
        severity: Severity::Error,
        weight: 20,
        check: heavy_operations,
    },
    Rule {
        id: "PERF004",
        name: "Memory Leaks",
        description: "Timers and listeners are cleaned up",
        severity: Severity::Warning,
        weight: 18,
        check: memory_leaks,
    },
    Rule {
        id: "PERF005",
        name: "Unnecessary Renders",
        description: "Framework-specific render optimizations are used",
        severity: Severity::Warning,
        weight: 12,
        check: unnecessary_renders,
    },
    Rule {
        id: "PERF006",
        name: "Image Optimization",
        description: "Modern image formats are used",
        severity: Severity::Info,
        weight: 8,
        check: image_optimization,
    },
];

fn bundle_size(file: &FileRecord) -> RuleOutcome {
    let max = if file.kind == FileKind::Component { 20_000 } else { 10_000 };
    if file.size > max {
        return RuleOutcome::fail(format!(
            "File size {}KB exceeds the recommended {}KB",
            (file.size + 500) / 1000,
            max / 1000
        ));
    }
    RuleOutcome::pass("File size is acceptable")
}

fn lazy_loading(file: &FileRecord) -> RuleOutcome {
    if file.kind != FileKind::Component {
        return RuleOutcome::pass("Not applicable");
    }
    let has_lazy = pattern!(r#"import\s*\(\s*['"`][^'"`]+['"`]\s*\)|React\.lazy|defineAsyncComponent"#)
        .is_match(&file.content);
    let many_imports = count_matches(&file.content, pattern!(r"(?m)^import\s+")) > 5;
    if !has_lazy && many_imports {
        return RuleOutcome::fail("Consider lazy loading for heavy components and modules");
    }
    RuleOutcome::pass("Lazy loading is used correctly")
}

fn heavy_operations(file: &FileRecord) -> RuleOutcome {
    let patterns: [&Regex; 5] = [
        // nested map
        pattern!(r"\{\s*\w+\.map\([^}]+\.map\("),
        pattern!(r"\{\s*\w+\.filter\([^}]+\.map\("),
        pattern!(r"\{\s*\w+\.sort\("),
        pattern!(r"JSON\.parse\s*\("),
        pattern!(r"new\s+Date\s*\("),
    ];
    let count: usize = patterns.iter().map(|re| count_matches(&file.content, re)).sum();
    if count > 0 {
        return RuleOutcome::fail(format!(
            "Found {} potentially heavy operations in render",
            count
        ));
    }
    RuleOutcome::pass("No heavy operations found")
}

fn memory_leaks(file: &FileRecord) -> RuleOutcome {
    let acquired: [&Regex; 4] = [
        pattern!(r"setInterval\s*\("),
        pattern!(r"setTimeout\s*\("),
        pattern!(r"addEventListener\s*\("),
        pattern!(r"\$on\s*\("),
    ];
    let released: [&Regex; 5] = [
        pattern!(r"clearInterval\s*\("),
        pattern!(r"clearTimeout\s*\("),
        pattern!(r"removeEventListener\s*\("),
        pattern!(r"\$off\s*\("),
        // effect returning a cleanup
        pattern!(r"useEffect\s*\([^,]+,\s*\[[^\]]*\]\s*\)\s*=>\s*\{[^}]*return\s+"),
    ];
    let leaks: usize = acquired.iter().map(|re| count_matches(&file.content, re)).sum();
    let cleanups: usize = released.iter().map(|re| count_matches(&file.content, re)).sum();
    if leaks > cleanups {
        return RuleOutcome::fail(format!(
            "Found {} potential memory leaks (timers or listeners without cleanup)",
            leaks - cleanups
        ));
    }
    RuleOutcome::pass("No memory leaks found")
}

fn unnecessary_renders(file: &FileRecord) -> RuleOutcome {
    match file.framework {
        Framework::React => {
            let memoized = pattern!(r"React\.memo|useMemo|useCallback").is_match(&file.content);
            let complex_props = pattern!(r"props\.\w+\.\w+").is_match(&file.content);
            if complex_props && !memoized && file.kind == FileKind::Component {
                return RuleOutcome::fail("Components with complex props should use memoization");
            }
        }
        Framework::Vue => {
            let computed = pattern!(r"computed\s*\(").is_match(&file.content);
            let interpolations = count_matches(&file.content, pattern!(r"\{\{[^}]+\}\}"));
            if interpolations > 5 && !computed {
                return RuleOutcome::fail(
                    "Complex template expressions should use computed properties",
                );
            }
        }
        _ => {}
    }
    RuleOutcome::pass("Render optimization looks fine")
}

fn image_optimization(file: &FileRecord) -> RuleOutcome {
    let legacy = count_matches(&file.content, pattern!(r"(?i)\.(jpg|jpeg|png|gif|bmp)\b"));
    let modern = count_matches(&file.content, pattern!(r"(?i)\.(webp|avif)\b"));
    if legacy > 0 && modern == 0 {
        return RuleOutcome::fail("Consider modern image formats (WebP, AVIF)");
    }
    RuleOutcome::pass("Image optimization looks fine")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::test_support::{record, record_as};

    #[test]
    fn size_limit_depends_on_kind() {
        let content = "x".repeat(15_000);
        let other = record_as("src/big.js", &content, Framework::Unknown, FileKind::Other);
        let outcome = bundle_size(&other);
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "File size 15KB exceeds the recommended 10KB");

        let component = record_as("src/Big.jsx", &content, Framework::React, FileKind::Component);
        assert!(bundle_size(&component).passed);
    }

    #[test]
    fn lazy_loading_only_for_import_heavy_components() {
        let imports: String = (0..6).map(|i| format!("import m{} from './m{}';\n", i, i)).collect();
        let component = record_as("src/App.jsx", &imports, Framework::React, FileKind::Component);
        assert!(!lazy_loading(&component).passed);

        let lazy = format!("{}const Page = React.lazy(() => import('./Page'));", imports);
        let component = record_as("src/App.jsx", &lazy, Framework::React, FileKind::Component);
        assert!(lazy_loading(&component).passed);

        let utility = record_as("src/u.js", &imports, Framework::Unknown, FileKind::Utility);
        assert_eq!(lazy_loading(&utility).message, "Not applicable");
    }

    #[test]
    fn heavy_operations_counted() {
        let file = record("src/a.jsx", "const d = new Date();\nconst o = JSON.parse(s);");
        let outcome = heavy_operations(&file);
        assert!(!outcome.passed);
        assert!(outcome.message.starts_with("Found 2 "));
        assert!(heavy_operations(&record("src/b.js", "const x = 1;")).passed);
    }

    #[test]
    fn leaks_without_cleanup() {
        let leaky = "setInterval(tick, 1000);\nwindow.addEventListener('resize', f);";
        assert!(!memory_leaks(&record("src/a.js", leaky)).passed);

        let clean = "const id = setInterval(tick, 1000);\nclearInterval(id);";
        assert!(memory_leaks(&record("src/a.js", clean)).passed);
    }

    #[test]
    fn react_complex_props_need_memo() {
        let content = "export default function Card(props) { return <p>{props.user.name}</p>; }";
        let file = record_as("src/Card.jsx", content, Framework::React, FileKind::Component);
        assert!(!unnecessary_renders(&file).passed);

        let memo = format!("{}\nexport const M = React.memo(Card);", content);
        let file = record_as("src/Card.jsx", &memo, Framework::React, FileKind::Component);
        assert!(unnecessary_renders(&file).passed);
    }

    #[test]
    fn vue_interpolations_need_computed() {
        let template = "<template>{{ a }}{{ b }}{{ c }}{{ d }}{{ e }}{{ f }}</template>";
        let file = record_as("src/A.vue", template, Framework::Vue, FileKind::Component);
        assert!(!unnecessary_renders(&file).passed);

        // Other frameworks always pass
        let file = record_as("src/A.svelte.js", template, Framework::Svelte, FileKind::Component);
        assert!(unnecessary_renders(&file).passed);
    }

    #[test]
    fn image_formats_case_insensitive() {
        assert!(!image_optimization(&record("src/a.js", "import logo from './LOGO.PNG';")).passed);
        let mixed = "import a from './a.png';\nimport b from './b.webp';";
        assert!(image_optimization(&record("src/a.js", mixed)).passed);
    }
}
