//! Console reporter with colored output

use crate::analyzer::ScoreCalculator;
use crate::i18n::{Messages, Text};
use crate::{Assessment, Issue, Level, Priority, Severity};
use colored::Colorize;
use std::fmt;

/// Reporter for terminal output
pub struct ConsoleReporter {
    messages: Messages,
    /// Whether to use colors
    use_colors: bool,
    /// Whether to list every file with its issues
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new(messages: Messages) -> Self {
        Self {
            messages,
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Print the report to stdout
    pub fn report(&self, assessment: &Assessment) {
        print!("{}", self.display(assessment));
    }

    /// Render the full report
    pub fn render(&self, assessment: &Assessment) -> String {
        self.display(assessment).to_string()
    }

    /// Report view that formats lazily
    pub fn display<'a>(&'a self, assessment: &'a Assessment) -> ConsoleReport<'a> {
        ConsoleReport {
            reporter: self,
            assessment,
        }
    }

    fn write_header(&self, out: &mut fmt::Formatter<'_>, assessment: &Assessment) -> fmt::Result {
        let m = &self.messages;
        writeln!(out)?;
        writeln!(out, "{}", self.bold(&format!("🔍 {}", m.text(Text::ReportTitle))))?;
        writeln!(out, "{}", "=".repeat(50))?;
        writeln!(
            out,
            "📊 {}: {}",
            m.text(Text::OverallScore),
            self.by_score(&format!("{}/100", assessment.overall_score), assessment.overall_score)
        )?;
        writeln!(
            out,
            "🎯 {}: {} {}",
            m.text(Text::DeveloperLevel),
            level_emoji(assessment.level),
            self.bold(m.level_name(assessment.level))
        )?;
        writeln!(out)
    }

    fn write_categories(&self, out: &mut fmt::Formatter<'_>, assessment: &Assessment) -> fmt::Result {
        let m = &self.messages;
        self.write_section(out, &format!("📈 {}", m.text(Text::CategoriesBreakdown)))?;
        for (category, result) in assessment.categories.iter() {
            writeln!(
                out,
                "{:<18} {} {}",
                m.category(category),
                self.by_score(&format!("{:>3}%", result.percentage), result.percentage),
                create_progress_bar(result.percentage)
            )?;
        }
        writeln!(out)
    }

    /// First five error-severity issues in canonical order
    fn write_top_issues(&self, out: &mut fmt::Formatter<'_>, assessment: &Assessment) -> fmt::Result {
        let errors: Vec<&Issue> = assessment
            .categories
            .all_issues()
            .filter(|i| i.severity == Severity::Error)
            .take(5)
            .collect();
        if errors.is_empty() {
            return Ok(());
        }
        let m = &self.messages;
        self.write_section(out, &format!("🚨 {}", m.text(Text::TopIssues)))?;
        for (index, issue) in errors.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, issue.message)?;
            writeln!(out, "   📁 {}: {}", m.text(Text::File), issue.file)?;
            writeln!(out, "   🔧 {}: {}", m.text(Text::Rule), issue.rule)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_recommendations(
        &self,
        out: &mut fmt::Formatter<'_>,
        assessment: &Assessment,
    ) -> fmt::Result {
        if assessment.recommendations.is_empty() {
            return Ok(());
        }
        let m = &self.messages;
        self.write_section(out, &format!("💡 {}", m.text(Text::Recommendations)))?;
        let high = assessment
            .recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .take(3);
        for (index, rec) in high.enumerate() {
            writeln!(out, "{}. {}", index + 1, rec.title)?;
            writeln!(out, "   {}", rec.description)?;
            for example in &rec.examples {
                writeln!(out, "   {} {}", self.cyan("→"), example)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_level_analysis(
        &self,
        out: &mut fmt::Formatter<'_>,
        assessment: &Assessment,
    ) -> fmt::Result {
        let m = &self.messages;
        let analysis = &assessment.level_analysis;
        self.write_section(out, &format!("🧭 {}", m.text(Text::DetailedAnalysis)))?;
        writeln!(
            out,
            "{}: {}  {}: {}",
            m.text(Text::PracticeScore),
            analysis.practice_score,
            m.text(Text::ComplexityScore),
            analysis.complexity_score
        )?;
        if !analysis.strengths.is_empty() {
            writeln!(out, "{}:", m.text(Text::Strengths))?;
            for finding in &analysis.strengths {
                writeln!(out, "  {} {}", self.green("+"), m.finding(*finding, true))?;
            }
        }
        if !analysis.weaknesses.is_empty() {
            writeln!(out, "{}:", m.text(Text::Weaknesses))?;
            for finding in &analysis.weaknesses {
                writeln!(out, "  {} {}", self.red("-"), m.finding(*finding, false))?;
            }
        }
        if !analysis.next_steps.is_empty() {
            writeln!(out, "{}:", m.text(Text::NextSteps))?;
            for step in &analysis.next_steps {
                writeln!(out, "  {} {}", self.cyan("→"), step)?;
            }
        }
        writeln!(
            out,
            "{}: {}",
            m.text(Text::TimeToNextLevel),
            m.time_band(analysis.time_to_next_level)
        )?;
        writeln!(out)
    }

    fn write_files(&self, out: &mut fmt::Formatter<'_>, assessment: &Assessment) -> fmt::Result {
        let m = &self.messages;
        self.write_section(out, &format!("📁 {}", m.text(Text::FileAnalysis)))?;
        for file in &assessment.file_results {
            writeln!(
                out,
                "{} {}",
                self.by_score(&format!("{:>3}", file.score), file.score),
                file.path
            )?;
            for issue in &file.issues {
                let location = match (issue.line, issue.column) {
                    (Some(line), Some(column)) => format!(" L{}:{}", line, column),
                    _ => String::new(),
                };
                writeln!(
                    out,
                    "    {} [{}]{} {}",
                    self.severity_icon(issue.severity),
                    issue.rule,
                    location,
                    issue.message
                )?;
            }
            for suggestion in &file.suggestions {
                writeln!(out, "    {} {}", self.cyan("→"), suggestion)?;
            }
        }
        writeln!(out)
    }

    /// Summary re-rendered in the reporter's locale
    fn write_summary(&self, out: &mut fmt::Formatter<'_>, assessment: &Assessment) -> fmt::Result {
        let m = &self.messages;
        self.write_section(out, &format!("📋 {}", m.text(Text::Summary)))?;
        let summary = ScoreCalculator::summary(
            assessment.overall_score,
            assessment.level,
            &assessment.categories,
            m,
        );
        writeln!(out, "{}", summary)?;
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(50))
    }

    fn write_section(&self, out: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(out, "{}:", self.bold(title))?;
        writeln!(out, "{}", "-".repeat(30))
    }

    fn severity_icon(&self, severity: Severity) -> String {
        match severity {
            Severity::Error => self.red("✗"),
            Severity::Warning => self.yellow("⚠"),
            Severity::Info => self.blue("ℹ"),
        }
    }

    fn by_score(&self, s: &str, score: u8) -> String {
        if score >= 80 {
            self.green(s)
        } else if score >= 60 {
            self.yellow(s)
        } else {
            self.red(s)
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.use_colors {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn green(&self, s: &str) -> String {
        if self.use_colors {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    fn yellow(&self, s: &str) -> String {
        if self.use_colors {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    fn red(&self, s: &str) -> String {
        if self.use_colors {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    fn blue(&self, s: &str) -> String {
        if self.use_colors {
            s.blue().to_string()
        } else {
            s.to_string()
        }
    }

    fn cyan(&self, s: &str) -> String {
        if self.use_colors {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(Messages::english())
    }
}

/// A rendered console report for one assessment
pub struct ConsoleReport<'a> {
    reporter: &'a ConsoleReporter,
    assessment: &'a Assessment,
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (reporter, assessment) = (self.reporter, self.assessment);
        reporter.write_header(f, assessment)?;
        reporter.write_categories(f, assessment)?;
        reporter.write_top_issues(f, assessment)?;
        reporter.write_recommendations(f, assessment)?;
        reporter.write_level_analysis(f, assessment)?;
        if reporter.verbose {
            reporter.write_files(f, assessment)?;
        }
        reporter.write_summary(f, assessment)
    }
}

fn level_emoji(level: Level) -> &'static str {
    match level {
        Level::Junior => "🌱",
        Level::Middle => "🌿",
        Level::Senior => "🌳",
    }
}

fn create_progress_bar(percentage: u8) -> String {
    const BAR_LENGTH: usize = 20;
    let filled = (usize::from(percentage.min(100)) * BAR_LENGTH + 50) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_LENGTH - filled))
}
