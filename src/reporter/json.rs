//! JSON reporter for machine-readable output

use crate::{Assessment, Category, FileResult, Issue, Level, Priority, Recommendation, Severity};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Full report document, stamped with the current time
    pub fn report(&self, assessment: &Assessment) -> String {
        self.report_at(assessment, Utc::now())
    }

    pub fn report_at(&self, assessment: &Assessment, generated_at: DateTime<Utc>) -> String {
        let document = JsonReport::new(assessment, generated_at);
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        json.unwrap_or_else(|_| "{}".to_string())
    }

    /// Write the report to `path`
    pub fn write(&self, assessment: &Assessment, path: &Path) -> Result<()> {
        fs::write(path, self.report(assessment))
            .with_context(|| format!("Failed to write JSON report: {}", path.display()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    meta: Meta,
    assessment: Overview<'a>,
    categories: Vec<JsonCategory<'a>>,
    files: Vec<JsonFile<'a>>,
    recommendations: &'a [Recommendation],
    level_analysis: &'a crate::LevelAnalysis,
    statistics: Statistics,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Meta {
    generated_at: String,
    version: &'static str,
    tool: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Overview<'a> {
    overall_score: u8,
    level: Level,
    summary: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonCategory<'a> {
    name: Category,
    score: u32,
    max_score: u32,
    percentage: u8,
    issues_count: usize,
    issues: Vec<JsonIssue<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonIssue<'a> {
    rule: &'a str,
    file: &'a str,
    severity: Severity,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
}

#[derive(Serialize)]
struct Location {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFile<'a> {
    path: &'a str,
    score: u8,
    issues_count: usize,
    issues: Vec<JsonIssue<'a>>,
    suggestions: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    total_files: usize,
    total_issues: usize,
    severity_breakdown: SeverityBreakdown,
    category_scores: BTreeMap<&'static str, u8>,
    average_file_score: u8,
    recommendations_count: usize,
    high_priority_recommendations: usize,
}

#[derive(Debug, Default, Serialize)]
struct SeverityBreakdown {
    error: usize,
    warning: usize,
    info: usize,
}

impl<'a> JsonReport<'a> {
    fn new(assessment: &'a Assessment, generated_at: DateTime<Utc>) -> Self {
        Self {
            meta: Meta {
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                version: env!("CARGO_PKG_VERSION"),
                tool: env!("CARGO_PKG_NAME"),
            },
            assessment: Overview {
                overall_score: assessment.overall_score,
                level: assessment.level,
                summary: &assessment.summary,
            },
            categories: assessment
                .categories
                .iter()
                .map(|(name, result)| JsonCategory {
                    name,
                    score: result.score,
                    max_score: result.max_score,
                    percentage: result.percentage,
                    issues_count: result.issues.len(),
                    issues: result.issues.iter().map(JsonIssue::from).collect(),
                })
                .collect(),
            files: assessment.file_results.iter().map(JsonFile::from).collect(),
            recommendations: &assessment.recommendations,
            level_analysis: &assessment.level_analysis,
            statistics: Statistics::from(assessment),
        }
    }
}

impl<'a> From<&'a Issue> for JsonIssue<'a> {
    fn from(issue: &'a Issue) -> Self {
        Self {
            rule: &issue.rule,
            file: &issue.file,
            severity: issue.severity,
            message: &issue.message,
            location: issue.line.map(|line| Location {
                line,
                column: issue.column,
            }),
        }
    }
}

impl<'a> From<&'a FileResult> for JsonFile<'a> {
    fn from(file: &'a FileResult) -> Self {
        Self {
            path: &file.path,
            score: file.score,
            issues_count: file.issues.len(),
            issues: file.issues.iter().map(JsonIssue::from).collect(),
            suggestions: &file.suggestions,
        }
    }
}

impl From<&Assessment> for Statistics {
    fn from(assessment: &Assessment) -> Self {
        let mut severity_breakdown = SeverityBreakdown::default();
        let mut total_issues = 0;
        for issue in assessment.categories.all_issues() {
            total_issues += 1;
            match issue.severity {
                Severity::Error => severity_breakdown.error += 1,
                Severity::Warning => severity_breakdown.warning += 1,
                Severity::Info => severity_breakdown.info += 1,
            }
        }

        let files = &assessment.file_results;
        let average_file_score = if files.is_empty() {
            0
        } else {
            let total: usize = files.iter().map(|f| usize::from(f.score)).sum();
            ((2 * total + files.len()) / (2 * files.len())) as u8
        };

        Self {
            total_files: files.len(),
            total_issues,
            severity_breakdown,
            category_scores: assessment
                .categories
                .iter()
                .map(|(c, r)| (c.key(), r.percentage))
                .collect(),
            average_file_score,
            recommendations_count: assessment.recommendations.len(),
            high_priority_recommendations: assessment
                .recommendations
                .iter()
                .filter(|r| r.priority == Priority::High)
                .count(),
        }
    }
}
