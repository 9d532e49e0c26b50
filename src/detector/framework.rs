//! Framework detection from file content and extension

use crate::Framework;
use regex::Regex;
use std::sync::LazyLock;

/// One framework family: its tag, signature patterns, and the number of
/// patterns that must match for the family to be selected.
pub struct FrameworkSignature {
    pub framework: Framework,
    pub patterns: Vec<Regex>,
    pub threshold: usize,
}

fn signature(framework: Framework, patterns: &[&str]) -> FrameworkSignature {
    FrameworkSignature {
        framework,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("framework signature pattern"))
            .collect(),
        threshold: 2,
    }
}

/// Families in priority order. The first family reaching its threshold wins,
/// regardless of how many patterns later families would match.
static SIGNATURES: LazyLock<Vec<FrameworkSignature>> = LazyLock::new(|| {
    vec![
        signature(
            Framework::React,
            &[
                r#"import\s+React\s+from\s+['"]react['"]"#,
                r#"import\s+.*\s+from\s+['"]react['"]"#,
                r"(?i)jsx|tsx",
                r"<[A-Z][a-zA-Z0-9]*[^>]*>",
                r"React\.",
                r"useState|useEffect|useContext",
                r"ReactDOM",
            ],
        ),
        signature(
            Framework::Vue,
            &[
                r#"import\s+.*\s+from\s+['"]vue['"]"#,
                r"<template>",
                r"<script.*setup.*>",
                r"defineComponent|createApp",
                r"ref\s*\(|reactive\s*\(|computed\s*\(",
                r"\$emit|\$props|\$slots",
                r"v-if|v-for|v-model|v-show",
            ],
        ),
        signature(
            Framework::Angular,
            &[
                r#"import\s+.*\s+from\s+['"]@angular"#,
                r"@Component|@Injectable|@NgModule",
                r"selector\s*:|template\s*:|templateUrl\s*:",
                r"ngOnInit|ngOnDestroy",
            ],
        ),
        signature(
            Framework::Svelte,
            &[
                r#"import\s+.*\s+from\s+['"]svelte"#,
                r"<script.*svelte.*>",
                r"\$:",
                r"export\s+let",
            ],
        ),
    ]
});

static DOM_GLOBALS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"document\.",
        r"window\.",
        r"addEventListener",
        r"querySelector",
        r"getElementById",
        r"createElement",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("dom global pattern"))
    .collect()
});

/// The ordered signature table
pub fn signatures() -> &'static [FrameworkSignature] {
    &SIGNATURES
}

/// Detect the framework a file is written for.
///
/// A `.vue` extension decides outright. Otherwise the first family in
/// [`signatures`] order with enough matching patterns wins; failing that the
/// file is `vanilla` when it touches any DOM global, else `unknown`.
pub fn detect_framework(content: &str, path: &str) -> Framework {
    if path.ends_with(".vue") {
        return Framework::Vue;
    }

    for family in signatures() {
        let matches = family
            .patterns
            .iter()
            .filter(|re| re.is_match(content))
            .count();
        if matches >= family.threshold {
            return family.framework;
        }
    }

    if DOM_GLOBALS.iter().any(|re| re.is_match(content)) {
        return Framework::Vanilla;
    }

    Framework::Unknown
}
