//! Frontend Assessor: heuristic quality scoring for frontend source trees
//!
//! Every discovered file is turned into an immutable [`FileRecord`], run through
//! five fixed batteries of weighted pattern checks, and the resulting category
//! percentages are combined into one overall score and a coarse skill level.
//! The scoring is deliberately approximate: there is no AST and no data flow,
//! only text patterns.

pub mod analyzer;
pub mod config;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod i18n;
pub mod level;
pub mod reporter;

pub use error::AssessError;
pub use level::LevelAnalysis;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Framework a file is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
    Vanilla,
    Unknown,
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framework::React => write!(f, "react"),
            Framework::Vue => write!(f, "vue"),
            Framework::Angular => write!(f, "angular"),
            Framework::Svelte => write!(f, "svelte"),
            Framework::Vanilla => write!(f, "vanilla"),
            Framework::Unknown => write!(f, "unknown"),
        }
    }
}

/// Structural role of a file inside the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Service,
    Utility,
    Config,
    Test,
    Other,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Component => write!(f, "component"),
            FileKind::Service => write!(f, "service"),
            FileKind::Utility => write!(f, "utility"),
            FileKind::Config => write!(f, "config"),
            FileKind::Test => write!(f, "test"),
            FileKind::Other => write!(f, "other"),
        }
    }
}

/// Normalized per-file unit consumed by every rule.
///
/// Built once per discovered file by [`detector::classify_file`] and only ever
/// handed out by shared reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the project root; the stable key of the file
    pub path: String,
    /// Full text content
    pub content: String,
    /// Size in bytes
    pub size: usize,
    /// Number of lines (`\n`-separated segments, never 0)
    pub lines: usize,
    /// Detected (or configured) framework
    pub framework: Framework,
    /// Structural type
    pub kind: FileKind,
}

impl FileRecord {
    /// True for `.ts` / `.tsx` sources
    pub fn is_typescript(&self) -> bool {
        self.path.ends_with(".ts") || self.path.ends_with(".tsx")
    }
}

/// Severity levels for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A failed rule outcome tied to one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Id of the rule that failed
    pub rule: String,
    /// Relative path of the file the rule failed on
    pub file: String,
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed), when the rule can point at one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Column (0-indexed offset within the line)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Issue {
    /// Composite key `<ruleId>:<filePath>`
    pub fn key(&self) -> String {
        format!("{}:{}", self.rule, self.file)
    }
}

/// Quality dimensions, in their canonical reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    CodeQuality,
    Performance,
    Architecture,
    BestPractices,
    Maintainability,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CodeQuality,
        Category::Performance,
        Category::Architecture,
        Category::BestPractices,
        Category::Maintainability,
    ];

    /// Stable camelCase key used in output structures
    pub fn key(self) -> &'static str {
        match self {
            Category::CodeQuality => "codeQuality",
            Category::Performance => "performance",
            Category::Architecture => "architecture",
            Category::BestPractices => "bestPractices",
            Category::Maintainability => "maintainability",
        }
    }

    /// English display name
    pub fn display_name(self) -> &'static str {
        match self {
            Category::CodeQuality => "Code Quality",
            Category::Performance => "Performance",
            Category::Architecture => "Architecture",
            Category::BestPractices => "Best Practices",
            Category::Maintainability => "Maintainability",
        }
    }

    /// Weight in the overall score, in percent. The five weights sum to 100.
    pub fn weight_pct(self) -> u32 {
        match self {
            Category::CodeQuality => 25,
            Category::Performance => 20,
            Category::Architecture => 20,
            Category::BestPractices => 20,
            Category::Maintainability => 15,
        }
    }

    /// Parse a camelCase key or a loose name ("best-practices", "code quality")
    pub fn from_key(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key().to_lowercase() == normalized)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Accumulated result of one category over the whole file set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    /// Sum of weights of passed (file, rule) pairs
    pub score: u32,
    /// Sum of weights of all evaluated (file, rule) pairs
    pub max_score: u32,
    /// round(100 * score / max_score), 100 when nothing was evaluated
    pub percentage: u8,
    /// Failures in (file, rule) evaluation order
    pub issues: Vec<Issue>,
}

impl CategoryResult {
    pub fn new(score: u32, max_score: u32, issues: Vec<Issue>) -> Self {
        Self {
            score,
            max_score,
            percentage: percentage(score, max_score),
            issues,
        }
    }
}

/// Rounded (half-up) percentage of `score` over `max`; vacuously 100 for `max == 0`
pub fn percentage(score: u32, max: u32) -> u8 {
    if max == 0 {
        return 100;
    }
    let score = u64::from(score.min(max));
    let max = u64::from(max);
    ((200 * score + max) / (2 * max)) as u8
}

/// The five category results, keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResults {
    pub code_quality: CategoryResult,
    pub performance: CategoryResult,
    pub architecture: CategoryResult,
    pub best_practices: CategoryResult,
    pub maintainability: CategoryResult,
}

impl CategoryResults {
    pub fn get(&self, category: Category) -> &CategoryResult {
        match category {
            Category::CodeQuality => &self.code_quality,
            Category::Performance => &self.performance,
            Category::Architecture => &self.architecture,
            Category::BestPractices => &self.best_practices,
            Category::Maintainability => &self.maintainability,
        }
    }

    /// Results in canonical category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryResult)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// All issues in canonical (category, file, rule) order
    pub fn all_issues(&self) -> impl Iterator<Item = &Issue> {
        self.iter().flat_map(|(_, r)| r.issues.iter())
    }
}

/// Coarse skill tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Junior,
    Middle,
    Senior,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Junior, Level::Middle, Level::Senior];

    /// Minimum overall score associated with the tier
    pub fn min_score(self) -> u8 {
        match self {
            Level::Junior => 60,
            Level::Middle => 75,
            Level::Senior => 85,
        }
    }

    /// Next tier up, `None` at the top
    pub fn next(self) -> Option<Level> {
        match self {
            Level::Junior => Some(Level::Middle),
            Level::Middle => Some(Level::Senior),
            Level::Senior => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Junior => write!(f, "junior"),
            Level::Middle => write!(f, "middle"),
            Level::Senior => write!(f, "senior"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "junior" => Ok(Level::Junior),
            "middle" => Ok(Level::Middle),
            "senior" => Ok(Level::Senior),
            other => Err(format!(
                "unknown level '{}' (expected junior, middle or senior)",
                other
            )),
        }
    }
}

/// Recommendation urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
        }
    }
}

/// Advice for a category scoring below 70%
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: Category,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

/// Per-file rollup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub path: String,
    /// max(0, 100 - 10 * issue count)
    pub score: u8,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
}

/// Everything one run produces; the sole hand-off to reporters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Weighted overall score (0-100)
    pub overall_score: u8,
    pub level: Level,
    pub categories: CategoryResults,
    pub file_results: Vec<FileResult>,
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
    pub level_analysis: LevelAnalysis,
}

/// Public API: discover, classify and assess every matching file under `root`.
///
/// Fails before any analysis when the root is missing or a glob pattern is
/// invalid. Unreadable files are logged and skipped.
pub fn assess_project(root: &Path, config: &config::Config) -> Result<Assessment, AssessError> {
    let files = discovery::discover(root, config)?;
    let engine = analyzer::AssessmentEngine::new().with_target_level(config.target_level);
    Ok(engine.assess(&files))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        // 0.5% rounds up
        assert_eq!(percentage(1, 200), 1);
        assert_eq!(percentage(0, 10), 0);
        assert_eq!(percentage(10, 10), 100);
    }

    #[test]
    fn percentage_vacuous_is_100() {
        assert_eq!(percentage(0, 0), 100);
    }

    #[test]
    fn category_weights_sum_to_100() {
        let sum: u32 = Category::ALL.iter().map(|c| c.weight_pct()).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn category_from_key_accepts_loose_names() {
        assert_eq!(Category::from_key("bestPractices"), Some(Category::BestPractices));
        assert_eq!(Category::from_key("best-practices"), Some(Category::BestPractices));
        assert_eq!(Category::from_key("Code Quality"), Some(Category::CodeQuality));
        assert_eq!(Category::from_key("security"), None);
    }

    #[test]
    fn issue_key_joins_rule_and_path() {
        let issue = Issue {
            rule: "CQ001".to_string(),
            file: "src/a.js".to_string(),
            severity: Severity::Warning,
            message: "m".to_string(),
            line: None,
            column: None,
        };
        assert_eq!(issue.key(), "CQ001:src/a.js");
    }

    #[test]
    fn level_ordering_and_next() {
        assert!(Level::Junior < Level::Middle && Level::Middle < Level::Senior);
        assert_eq!(Level::Junior.next(), Some(Level::Middle));
        assert_eq!(Level::Senior.next(), None);
        assert_eq!("Senior".parse::<Level>(), Ok(Level::Senior));
        assert!("lead".parse::<Level>().is_err());
    }
}
