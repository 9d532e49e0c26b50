//! Assessment engine - runs every category and assembles the result

use super::{CategoryAnalyzer, ScoreCalculator};
use crate::i18n::Messages;
use crate::level::LevelEvaluator;
use crate::{Assessment, Category, CategoryResults, FileRecord, Level};

/// Main engine that orchestrates the five category analyzers
pub struct AssessmentEngine {
    analyzers: [CategoryAnalyzer; 5],
    /// Evaluate files on the rayon pool
    parallel: bool,
    /// Level the next steps lead to (default: the next tier)
    target_level: Option<Level>,
}

impl AssessmentEngine {
    /// Create an engine with the built-in rule tables
    pub fn new() -> Self {
        Self {
            analyzers: Category::ALL.map(CategoryAnalyzer::new),
            parallel: true,
            target_level: None,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_target_level(mut self, target: Option<Level>) -> Self {
        self.target_level = target;
        self
    }

    /// Run every category over the files
    pub fn analyze_categories(&self, files: &[FileRecord]) -> CategoryResults {
        let [code_quality, performance, architecture, best_practices, maintainability] =
            self.analyzers.each_ref().map(|analyzer| {
                let result = if self.parallel {
                    analyzer.analyze_parallel(files)
                } else {
                    analyzer.analyze(files)
                };
                tracing::debug!(
                    category = analyzer.category().key(),
                    score = result.score,
                    max_score = result.max_score,
                    issues = result.issues.len(),
                    "category analyzed"
                );
                result
            });
        CategoryResults {
            code_quality,
            performance,
            architecture,
            best_practices,
            maintainability,
        }
    }

    /// Assess a classified file set. Never fails; an empty set yields a
    /// vacuously perfect score and the junior level.
    pub fn assess(&self, files: &[FileRecord]) -> Assessment {
        let categories = self.analyze_categories(files);
        let overall_score = ScoreCalculator::overall_score(&categories);

        let evaluator = LevelEvaluator::new(files);
        let level_analysis =
            evaluator.detailed_analysis(overall_score, &categories, self.target_level);
        let level = level_analysis.current_level;

        tracing::info!(
            files = files.len(),
            overall_score,
            %level,
            practice = level_analysis.practice_score,
            complexity = level_analysis.complexity_score,
            "assessment complete"
        );

        Assessment {
            overall_score,
            level,
            file_results: ScoreCalculator::file_results(files, &categories),
            recommendations: ScoreCalculator::recommendations(&categories),
            summary: ScoreCalculator::summary(
                overall_score,
                level,
                &categories,
                &Messages::english(),
            ),
            categories,
            level_analysis,
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
