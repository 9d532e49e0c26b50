//! Level classifier: maps the overall score and corpus signals onto a tier
//!
//! The gate is an AND over four signals per tier. Missing any one threshold
//! demotes the run a full tier, however far the others exceed theirs.

pub mod signals;

pub use signals::{complexity_score, mean_complexity, practice_score, PracticeCheck, PRACTICE_CHECKS};

use crate::{Category, CategoryResults, FileRecord, Level};
use serde::{Deserialize, Serialize};

/// The four signals the gate looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSignals {
    pub overall: u8,
    pub practice: u8,
    pub architecture: u8,
    pub complexity: u8,
}

/// Minimum value of each signal for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierGate {
    pub level: Level,
    pub min_overall: u8,
    pub min_practice: u8,
    pub min_architecture: u8,
    pub min_complexity: u8,
}

impl TierGate {
    pub fn admits(&self, signals: &LevelSignals) -> bool {
        signals.overall >= self.min_overall
            && signals.practice >= self.min_practice
            && signals.architecture >= self.min_architecture
            && signals.complexity >= self.min_complexity
    }
}

/// Gates from the highest tier down; junior is the fallback
pub const GATES: [TierGate; 2] = [
    TierGate {
        level: Level::Senior,
        min_overall: 85,
        min_practice: 80,
        min_architecture: 80,
        min_complexity: 70,
    },
    TierGate {
        level: Level::Middle,
        min_overall: 75,
        min_practice: 65,
        min_architecture: 60,
        min_complexity: 50,
    },
];

/// Highest tier whose gate admits the signals
pub fn classify(signals: &LevelSignals) -> Level {
    GATES
        .iter()
        .find(|gate| gate.admits(signals))
        .map(|gate| gate.level)
        .unwrap_or(Level::Junior)
}

/// Strength or weakness entry of the detailed analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Finding {
    Category(Category),
    ModernPractices,
}

/// Coarse estimate of the time needed to reach the next tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeToNextLevel {
    /// Gap of at most 5 points
    OneToTwoMonths,
    /// At most 15
    ThreeToSixMonths,
    /// At most 25
    SixToTwelveMonths,
    OneToTwoYears,
    /// Already senior
    MaxLevelReached,
}

impl TimeToNextLevel {
    /// Band for `overall` against the minimum score of the tier above `current`
    pub fn estimate(current: Level, overall: u8) -> Self {
        let Some(next) = current.next() else {
            return TimeToNextLevel::MaxLevelReached;
        };
        let gap = i32::from(next.min_score()) - i32::from(overall);
        match gap {
            g if g <= 5 => TimeToNextLevel::OneToTwoMonths,
            g if g <= 15 => TimeToNextLevel::ThreeToSixMonths,
            g if g <= 25 => TimeToNextLevel::SixToTwelveMonths,
            _ => TimeToNextLevel::OneToTwoYears,
        }
    }
}

impl std::fmt::Display for TimeToNextLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeToNextLevel::OneToTwoMonths => write!(f, "1-2 months"),
            TimeToNextLevel::ThreeToSixMonths => write!(f, "3-6 months"),
            TimeToNextLevel::SixToTwelveMonths => write!(f, "6-12 months"),
            TimeToNextLevel::OneToTwoYears => write!(f, "1-2 years"),
            TimeToNextLevel::MaxLevelReached => write!(f, "maximum level reached"),
        }
    }
}

/// Detailed view of the level decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelAnalysis {
    pub current_level: Level,
    pub practice_score: u8,
    pub complexity_score: u8,
    /// Categories at or above 80% and a practice score of 80+
    pub strengths: Vec<Finding>,
    /// Categories below 60% and a practice score under 60
    pub weaknesses: Vec<Finding>,
    pub next_steps: Vec<String>,
    pub time_to_next_level: TimeToNextLevel,
}

/// Computes signals once and derives the level and its analysis from them
pub struct LevelEvaluator {
    practice: u8,
    complexity: u8,
}

impl LevelEvaluator {
    pub fn new(files: &[FileRecord]) -> Self {
        Self {
            practice: practice_score(files),
            complexity: complexity_score(files),
        }
    }

    pub fn practice_score(&self) -> u8 {
        self.practice
    }

    pub fn complexity_score(&self) -> u8 {
        self.complexity
    }

    pub fn signals(&self, overall: u8, categories: &CategoryResults) -> LevelSignals {
        LevelSignals {
            overall,
            practice: self.practice,
            architecture: categories.architecture.percentage,
            complexity: self.complexity,
        }
    }

    pub fn determine_level(&self, overall: u8, categories: &CategoryResults) -> Level {
        classify(&self.signals(overall, categories))
    }

    /// Level plus strengths, weaknesses, next steps and a time band.
    /// Next steps lead to `target` when given, otherwise to the next tier.
    pub fn detailed_analysis(
        &self,
        overall: u8,
        categories: &CategoryResults,
        target: Option<Level>,
    ) -> LevelAnalysis {
        let current_level = self.determine_level(overall, categories);

        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        for (category, result) in categories.iter() {
            if result.percentage >= 80 {
                strengths.push(Finding::Category(category));
            } else if result.percentage < 60 {
                weaknesses.push(Finding::Category(category));
            }
        }
        if self.practice >= 80 {
            strengths.push(Finding::ModernPractices);
        } else if self.practice < 60 {
            weaknesses.push(Finding::ModernPractices);
        }

        LevelAnalysis {
            current_level,
            practice_score: self.practice,
            complexity_score: self.complexity,
            strengths,
            weaknesses,
            next_steps: level_recommendations(current_level, target),
            time_to_next_level: TimeToNextLevel::estimate(current_level, overall),
        }
    }
}

/// Steps for each tier transition between `current` and `target`
/// (default: the next tier). Empty at or above the target.
pub fn level_recommendations(current: Level, target: Option<Level>) -> Vec<String> {
    let Some(target) = target.or_else(|| current.next()) else {
        return Vec::new();
    };
    let mut steps = Vec::new();
    let mut level = current;
    while level < target {
        let Some(next) = level.next() else { break };
        steps.extend(transition_steps(level).iter().map(|s| s.to_string()));
        level = next;
    }
    steps
}

fn transition_steps(from: Level) -> &'static [&'static str] {
    match from {
        Level::Junior => &[
            "Study advanced JavaScript/TypeScript concepts",
            "Learn testing (Jest, Testing Library)",
            "Study design patterns",
            "Improve code architecture",
            "Learn build and optimization tooling",
        ],
        Level::Middle => &[
            "Deepen your knowledge of architectural patterns",
            "Study SOLID principles and Clean Code",
            "Master performance optimization",
            "Develop code review skills",
            "Study security best practices",
            "Work on soft skills and mentoring",
        ],
        Level::Senior => &[],
    }
}
