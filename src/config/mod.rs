//! Configuration loading

mod schema;

pub use schema::{default_exclude_patterns, default_include_patterns, Config, FrameworkHint};

use crate::AssessError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "frontend-assessor.config.json";

/// Load the config for a project.
///
/// An explicit `custom_path` (relative paths resolve against `project_root`)
/// must exist. Without one, `frontend-assessor.config.json` in the project root
/// is used when present, defaults otherwise.
pub fn load_config(project_root: &Path, custom_path: Option<&Path>) -> Result<Config, AssessError> {
    let path = match custom_path {
        Some(p) => {
            let path = if p.is_absolute() {
                p.to_path_buf()
            } else {
                project_root.join(p)
            };
            if !path.exists() {
                return Err(AssessError::ConfigRead {
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                    path,
                });
            }
            Some(path)
        }
        None => {
            let candidate = project_root.join(CONFIG_FILENAME);
            candidate.is_file().then_some(candidate)
        }
    };

    match path {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading config");
            parse_config_file(&path)
        }
        None => Ok(Config::default()),
    }
}

fn parse_config_file(path: &Path) -> Result<Config, AssessError> {
    let content = fs::read_to_string(path).map_err(|source| AssessError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AssessError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that the project root exists and is a directory
pub fn validate_project_root(root: &Path) -> Result<PathBuf, AssessError> {
    if !root.exists() {
        return Err(AssessError::ProjectNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(AssessError::NotADirectory(root.to_path_buf()));
    }
    Ok(root.to_path_buf())
}

/// Build a GlobSet from patterns for path matching
pub fn build_glob_set(patterns: &[String]) -> Result<GlobSet, AssessError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| AssessError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| AssessError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

/// Pretty JSON for a fresh config file (used by `init`)
pub fn default_config_json(framework: FrameworkHint) -> String {
    let config = Config {
        framework,
        target_level: Some(crate::Level::Middle),
        ..Config::default()
    };
    let mut json = serde_json::to_string_pretty(&config).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.framework, FrameworkHint::Auto);
        assert_eq!(config.include_patterns, vec!["**/*.{js,jsx,ts,tsx,vue}".to_string()]);
    }

    #[test]
    fn loads_config_from_project_root() {
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"{{
                "framework": "vue",
                "excludePatterns": ["**/legacy/**"],
                "targetLevel": "senior",
                "customRules": []
            }}"#
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.framework, FrameworkHint::Vue);
        assert_eq!(config.exclude_patterns, vec!["**/legacy/**".to_string()]);
        // Missing keys keep their defaults
        assert_eq!(config.include_patterns, default_include_patterns());
        assert_eq!(config.target_level, Some(crate::Level::Senior));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("nope.json"))).unwrap_err();
        assert!(matches!(err, AssessError::ConfigRead { .. }));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(matches!(err, AssessError::ConfigParse { .. }));
    }

    #[test]
    fn unknown_framework_is_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{ "framework": "ember" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_root() {
        let dir = TempDir::new().unwrap();
        assert!(validate_project_root(dir.path()).is_ok());

        let missing = dir.path().join("missing");
        assert!(matches!(
            validate_project_root(&missing),
            Err(AssessError::ProjectNotFound(_))
        ));

        let file = dir.path().join("file.js");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            validate_project_root(&file),
            Err(AssessError::NotADirectory(_))
        ));
    }

    #[test]
    fn glob_set_matches_defaults() {
        let include = build_glob_set(&default_include_patterns()).unwrap();
        let exclude = build_glob_set(&default_exclude_patterns()).unwrap();
        assert!(include.is_match("src/App.tsx"));
        assert!(include.is_match("App.vue"));
        assert!(!include.is_match("src/styles.css"));
        assert!(exclude.is_match("node_modules/react/index.js"));
        assert!(exclude.is_match("src/App.test.tsx"));
        assert!(!exclude.is_match("src/App.tsx"));
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let err = build_glob_set(&["src/[".to_string()]).unwrap_err();
        assert!(matches!(err, AssessError::InvalidPattern { .. }));
    }

    #[test]
    fn cli_overrides_config() {
        let config = Config::default().merge_with_cli(
            Some(FrameworkHint::React),
            Some(vec!["src/**/*.ts".to_string()]),
            Some(vec![]),
            None,
            Some(70),
        );
        assert_eq!(config.framework, FrameworkHint::React);
        assert_eq!(config.include_patterns, vec!["src/**/*.ts".to_string()]);
        // Empty CLI list keeps the configured patterns
        assert_eq!(config.exclude_patterns, default_exclude_patterns());
        assert_eq!(config.threshold, Some(70));
    }

    #[test]
    fn default_config_json_round_trips() {
        let json = default_config_json(FrameworkHint::Vue);
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.framework, FrameworkHint::Vue);
        assert_eq!(config.target_level, Some(crate::Level::Middle));
    }
}
