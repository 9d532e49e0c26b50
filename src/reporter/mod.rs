//! Reporter module for output formatting

pub mod console;
pub mod html;
pub mod json;

pub use console::{ConsoleReport, ConsoleReporter};
pub use html::HtmlReporter;
pub use json::JsonReporter;

use std::path::{Path, PathBuf};

/// Base name of report files written without an explicit `--path`
pub const DEFAULT_REPORT_STEM: &str = "frontend-assessment-report";

/// Selected output format(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Html,
    /// Console plus both report files
    All,
}

impl OutputFormat {
    pub fn console(self) -> bool {
        matches!(self, OutputFormat::Console | OutputFormat::All)
    }

    pub fn json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::All)
    }

    pub fn html(self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::All)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "all" => Ok(OutputFormat::All),
            other => Err(format!(
                "unknown format '{}' (expected console, json, html or all)",
                other
            )),
        }
    }
}

/// Where a file report with `extension` goes: `requested` with its extension
/// replaced, or the default report name in the working directory
pub fn report_path(requested: Option<&Path>, extension: &str) -> PathBuf {
    match requested {
        Some(path) => path.with_extension(extension),
        None => PathBuf::from(DEFAULT_REPORT_STEM).with_extension(extension),
    }
}
