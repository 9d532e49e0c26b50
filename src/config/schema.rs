//! Config schema and deserialization

use crate::{Framework, Level};
use serde::{Deserialize, Serialize};

/// Framework override: auto-detect or force a specific framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkHint {
    #[default]
    Auto,
    React,
    Vue,
    Angular,
    Svelte,
    Vanilla,
}

impl FrameworkHint {
    /// The forced framework, or `None` for auto-detection
    pub fn as_framework(self) -> Option<Framework> {
        match self {
            FrameworkHint::Auto => None,
            FrameworkHint::React => Some(Framework::React),
            FrameworkHint::Vue => Some(Framework::Vue),
            FrameworkHint::Angular => Some(Framework::Angular),
            FrameworkHint::Svelte => Some(Framework::Svelte),
            FrameworkHint::Vanilla => Some(Framework::Vanilla),
        }
    }
}

impl std::fmt::Display for FrameworkHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_framework() {
            Some(framework) => write!(f, "{}", framework),
            None => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for FrameworkHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(FrameworkHint::Auto),
            "react" => Ok(FrameworkHint::React),
            "vue" => Ok(FrameworkHint::Vue),
            "angular" => Ok(FrameworkHint::Angular),
            "svelte" => Ok(FrameworkHint::Svelte),
            "vanilla" => Ok(FrameworkHint::Vanilla),
            other => Err(format!(
                "unknown framework '{}' (expected auto, react, vue, angular, svelte or vanilla)",
                other
            )),
        }
    }
}

/// Root config structure for frontend-assessor.config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Force a specific framework (default: auto)
    #[serde(default)]
    pub framework: FrameworkHint,

    /// Glob patterns of files to analyze, relative to the project root
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// Glob patterns of files/directories to skip
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Level to plan next steps towards (default: the next tier up)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_level: Option<Level>,

    /// Minimum overall score (exit 1 if below)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
}

pub fn default_include_patterns() -> Vec<String> {
    vec!["**/*.{js,jsx,ts,tsx,vue}".to_string()]
}

pub fn default_exclude_patterns() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/dist/**",
        "**/build/**",
        "**/*.test.*",
        "**/*.spec.*",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            framework: FrameworkHint::Auto,
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            target_level: None,
            threshold: None,
        }
    }
}

impl Config {
    /// Merge CLI flags into this config (CLI wins when provided)
    pub fn merge_with_cli(
        mut self,
        framework: Option<FrameworkHint>,
        include: Option<Vec<String>>,
        exclude: Option<Vec<String>>,
        target_level: Option<Level>,
        threshold: Option<u8>,
    ) -> Self {
        if let Some(framework) = framework {
            self.framework = framework;
        }
        if let Some(include) = include.filter(|p| !p.is_empty()) {
            self.include_patterns = include;
        }
        if let Some(exclude) = exclude.filter(|p| !p.is_empty()) {
            self.exclude_patterns = exclude;
        }
        if target_level.is_some() {
            self.target_level = target_level;
        }
        if threshold.is_some() {
            self.threshold = threshold;
        }
        self
    }
}
