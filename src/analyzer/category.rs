//! Category analyzer: runs one rule table over the file set

use super::rules::{self, Rule};
use crate::{Category, CategoryResult, FileRecord, Issue};

/// Accumulated tally for one file
#[derive(Debug, Default)]
struct Tally {
    score: u32,
    max_score: u32,
    issues: Vec<Issue>,
}

/// Evaluates every rule of one category on every file
#[derive(Debug, Clone)]
pub struct CategoryAnalyzer {
    category: Category,
    rules: &'static [Rule],
}

impl CategoryAnalyzer {
    /// Analyzer with the built-in rule table of `category`
    pub fn new(category: Category) -> Self {
        Self {
            category,
            rules: rules::for_category(category),
        }
    }

    /// Analyzer with a custom rule table
    pub fn with_rules(category: Category, rules: &'static [Rule]) -> Self {
        Self { category, rules }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Analyze files in order, rules in table order within each file
    pub fn analyze(&self, files: &[FileRecord]) -> CategoryResult {
        let tally = files
            .iter()
            .map(|f| self.evaluate_file(f))
            .fold(Tally::default(), merge);
        CategoryResult::new(tally.score, tally.max_score, tally.issues)
    }

    /// Same result as [`analyze`](Self::analyze), with files evaluated on the rayon pool
    pub fn analyze_parallel(&self, files: &[FileRecord]) -> CategoryResult {
        use rayon::prelude::*;

        // collect() keeps input order, so the merge below matches the sequential fold
        let per_file: Vec<Tally> = files.par_iter().map(|f| self.evaluate_file(f)).collect();
        let tally = per_file.into_iter().fold(Tally::default(), merge);
        CategoryResult::new(tally.score, tally.max_score, tally.issues)
    }

    fn evaluate_file(&self, file: &FileRecord) -> Tally {
        let mut tally = Tally::default();
        for rule in self.rules {
            tally.max_score += rule.weight;
            let outcome = rule.evaluate(file);
            if outcome.passed {
                tally.score += rule.weight;
            } else {
                tally.issues.push(Issue {
                    rule: rule.id.to_string(),
                    file: file.path.clone(),
                    severity: rule.severity,
                    message: outcome.message,
                    line: outcome.line,
                    column: outcome.column,
                });
            }
        }
        tally
    }
}

fn merge(mut acc: Tally, next: Tally) -> Tally {
    acc.score += next.score;
    acc.max_score += next.max_score;
    acc.issues.extend(next.issues);
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::test_support::record;
    use crate::analyzer::rules::RuleOutcome;
    use crate::Severity;

    fn never_fails(_: &FileRecord) -> RuleOutcome {
        RuleOutcome::pass("ok")
    }

    fn fails_on_todo(file: &FileRecord) -> RuleOutcome {
        if file.content.contains("TODO") {
            RuleOutcome::fail("todo left").at(1, 0)
        } else {
            RuleOutcome::pass("ok")
        }
    }

    const TABLE: &[Rule] = &[
        Rule {
            id: "T001",
            name: "Always",
            description: "",
            severity: Severity::Info,
            weight: 5,
            check: never_fails,
        },
        Rule {
            id: "T002",
            name: "Todo",
            description: "",
            severity: Severity::Warning,
            weight: 15,
            check: fails_on_todo,
        },
    ];

    #[test]
    fn scores_and_issues_accumulate() {
        let files = vec![
            record("src/a.js", "// TODO"),
            record("src/b.js", "ok();"),
        ];
        let result = CategoryAnalyzer::with_rules(Category::CodeQuality, TABLE).analyze(&files);
        assert_eq!(result.max_score, 40);
        assert_eq!(result.score, 25);
        assert_eq!(result.percentage, 63);
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.key(), "T002:src/a.js");
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.line, Some(1));
    }

    #[test]
    fn empty_file_set_is_vacuously_perfect() {
        let result = CategoryAnalyzer::new(Category::Performance).analyze(&[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.max_score, 0);
        assert_eq!(result.percentage, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn max_score_is_rule_weights_times_files() {
        let files: Vec<FileRecord> = (0..7)
            .map(|i| record(&format!("src/f{}.js", i), "export const a = 1;"))
            .collect();
        for category in Category::ALL {
            let analyzer = CategoryAnalyzer::new(category);
            let per_file: u32 = analyzer.rules().iter().map(|r| r.weight).sum();
            let result = analyzer.analyze(&files);
            assert_eq!(result.max_score, per_file * files.len() as u32);
            assert!(result.score <= result.max_score);
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let files: Vec<FileRecord> = (0..25)
            .map(|i| {
                let content = if i % 3 == 0 {
                    format!("var Bad{} = eval(x);\nfetch('/a').then(r => r);", i)
                } else {
                    format!("export const value{} = compute();", i)
                };
                record(&format!("src/f{:02}.js", i), &content)
            })
            .collect();
        for category in Category::ALL {
            let analyzer = CategoryAnalyzer::new(category);
            assert_eq!(analyzer.analyze(&files), analyzer.analyze_parallel(&files));
        }
    }
}
