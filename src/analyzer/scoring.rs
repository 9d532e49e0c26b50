//! Score aggregation, file rollups, recommendations and the summary text

use crate::i18n::{Messages, Text};
use crate::{
    Category, CategoryResults, FileKind, FileRecord, FileResult, Issue, Level, Priority,
    Recommendation, Severity,
};
use std::collections::HashMap;

/// Points a file loses for each issue keyed to it
const FILE_PENALTY_PER_ISSUE: usize = 10;
/// Categories below this percentage get a recommendation
const RECOMMENDATION_THRESHOLD: u8 = 70;
/// Below this, the recommendation is high priority
const HIGH_PRIORITY_THRESHOLD: u8 = 50;

const LONG_FILE_LINES: usize = 300;
const LARGE_COMPONENT_BYTES: usize = 10_000;

/// Calculator for assessment scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Weighted mean of the category percentages, rounded half-up.
    /// Computed on integers: sum(pct * weight%) over a weight total of 100.
    pub fn overall_score(categories: &CategoryResults) -> u8 {
        let weighted: u32 = categories
            .iter()
            .map(|(c, r)| u32::from(r.percentage) * c.weight_pct())
            .sum();
        ((weighted + 50) / 100) as u8
    }

    /// max(0, 100 - 10 * issues)
    pub fn file_score(issue_count: usize) -> u8 {
        100usize.saturating_sub(issue_count.saturating_mul(FILE_PENALTY_PER_ISSUE)) as u8
    }

    /// `None` at or above 70%
    pub fn recommendation_priority(percentage: u8) -> Option<Priority> {
        if percentage < HIGH_PRIORITY_THRESHOLD {
            Some(Priority::High)
        } else if percentage < RECOMMENDATION_THRESHOLD {
            Some(Priority::Medium)
        } else {
            None
        }
    }

    /// One recommendation per category below 70%, in category order
    pub fn recommendations(categories: &CategoryResults) -> Vec<Recommendation> {
        categories
            .iter()
            .filter_map(|(category, result)| {
                let priority = Self::recommendation_priority(result.percentage)?;
                Some(Recommendation {
                    category,
                    priority,
                    title: format!("Improve {}", category.display_name()),
                    description: format!(
                        "Current result: {}%. Needs attention.",
                        result.percentage
                    ),
                    examples: Self::category_examples(category)
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                })
            })
            .collect()
    }

    pub fn category_examples(category: Category) -> [&'static str; 3] {
        match category {
            Category::CodeQuality => [
                "Use linters (ESLint, Prettier)",
                "Follow SOLID principles",
                "Write clean and readable code",
            ],
            Category::Performance => [
                "Use lazy loading for components",
                "Optimize images",
                "Minimize bundle size",
            ],
            Category::Architecture => [
                "Apply design patterns",
                "Separate responsibilities",
                "Use modular architecture",
            ],
            Category::BestPractices => [
                "Follow framework conventions",
                "Use TypeScript",
                "Cover code with tests",
            ],
            Category::Maintainability => [
                "Document code",
                "Use descriptive names",
                "Avoid code duplication",
            ],
        }
    }

    /// Per-file rollups in file order; issues keep category then rule order
    pub fn file_results(files: &[FileRecord], categories: &CategoryResults) -> Vec<FileResult> {
        let mut by_file: HashMap<&str, Vec<&Issue>> = HashMap::new();
        for issue in categories.all_issues() {
            by_file.entry(issue.file.as_str()).or_default().push(issue);
        }

        files
            .iter()
            .map(|file| {
                let issues: Vec<Issue> = by_file
                    .get(file.path.as_str())
                    .map(|found| found.iter().map(|issue| (*issue).clone()).collect())
                    .unwrap_or_default();
                FileResult {
                    path: file.path.clone(),
                    score: Self::file_score(issues.len()),
                    suggestions: Self::file_suggestions(file, &issues),
                    issues,
                }
            })
            .collect()
    }

    pub fn file_suggestions(file: &FileRecord, issues: &[Issue]) -> Vec<String> {
        let mut suggestions = Vec::new();
        if file.lines > LONG_FILE_LINES {
            suggestions.push("Consider splitting file into smaller modules".to_string());
        }
        if issues.iter().any(|i| i.severity == Severity::Error) {
            suggestions.push("Fix critical errors first".to_string());
        }
        if file.kind == FileKind::Component && file.size > LARGE_COMPONENT_BYTES {
            suggestions.push("Component is too large, consider decomposition".to_string());
        }
        suggestions
    }

    /// Plain-text summary: score, level, level description and category percentages
    pub fn summary(
        overall: u8,
        level: Level,
        categories: &CategoryResults,
        messages: &Messages,
    ) -> String {
        let mut lines = vec![
            format!(
                "{}: {}/100 ({})",
                messages.text(Text::OverallScore),
                overall,
                messages.level_name(level)
            ),
            messages.level_description(level).to_string(),
            String::new(),
            format!("{}:", messages.text(Text::CategoryDetails)),
        ];
        lines.extend(
            categories
                .iter()
                .map(|(c, r)| format!("- {}: {}%", messages.category(c), r.percentage)),
        );
        lines.join("\n")
    }
}
