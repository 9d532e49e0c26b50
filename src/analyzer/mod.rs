//! Analyzer module - rule tables, category analysis and scoring

pub mod category;
pub mod engine;
pub mod rules;
pub mod scoring;

pub use category::CategoryAnalyzer;
pub use engine::AssessmentEngine;
pub use scoring::ScoreCalculator;
