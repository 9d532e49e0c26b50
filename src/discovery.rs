//! File discovery and reading
//!
//! Walks the project root, keeps files matching the include patterns and none
//! of the exclude patterns, and reads each into a [`FileRecord`]. A file that
//! cannot be read is logged and left out; it never aborts the run.

use crate::config::{build_glob_set, validate_project_root, Config};
use crate::detector::classify_file;
use crate::{AssessError, FileRecord};
use globset::GlobSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Discover, read and classify every matching file under `root`, sorted by path
pub fn discover(root: &Path, config: &Config) -> Result<Vec<FileRecord>, AssessError> {
    let root = validate_project_root(root)?;
    let include = build_glob_set(&config.include_patterns)?;
    let exclude = build_glob_set(&config.exclude_patterns)?;

    let paths = collect_paths(&root, &include, &exclude);
    tracing::info!(root = %root.display(), files = paths.len(), "discovered files");

    let records = paths
        .into_iter()
        .filter_map(|(absolute, relative)| match read_source(&absolute) {
            Ok(content) => Some(classify_file(&relative, content, config.framework)),
            Err(e) => {
                tracing::warn!(file = %absolute.display(), error = %e, "failed to read file, skipping");
                None
            }
        })
        .collect();

    Ok(records)
}

/// Matching files as (absolute, relative) pairs, sorted and de-duplicated by relative path
pub fn collect_paths(root: &Path, include: &GlobSet, exclude: &GlobSet) -> Vec<(PathBuf, String)> {
    let mut files: Vec<(PathBuf, String)> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        // dot-files and dot-directories (.next, .nuxt, .git) are never matched
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let relative = relative_path(root, entry.path())?;
            if include.is_match(&relative) && !exclude.is_match(&relative) {
                Some((entry.path().to_path_buf(), relative))
            } else {
                None
            }
        })
        .collect();

    // Sort for consistent output
    files.sort_by(|a, b| a.1.cmp(&b.1));
    files.dedup_by(|a, b| a.1 == b.1);
    files
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Project-relative path with `/` separators
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Read a file as text; invalid UTF-8 is replaced rather than rejected
fn read_source(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameworkHint;
    use crate::Framework;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn discovers_matching_files_sorted() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/b.js", "export const b = 1;");
        write(dir.path(), "src/a.ts", "export const a: number = 1;");
        write(dir.path(), "src/styles.css", "body {}");
        write(dir.path(), "src/a.test.ts", "it('x', () => {});");
        write(dir.path(), "node_modules/lib/index.js", "module.exports = 1;");
        write(dir.path(), "dist/bundle.js", "var x = 1;");

        let records = discover(dir.path(), &Config::default()).unwrap();
        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["src/a.ts", "src/b.js"]);
    }

    #[test]
    fn hidden_files_and_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app.js", "export const app = 1;");
        write(dir.path(), ".next/static/chunk.js", "var chunk = 1;");
        write(dir.path(), ".storybook/main.js", "module.exports = {};");
        write(dir.path(), "src/.eslintrc.js", "module.exports = {};");

        let records = discover(dir.path(), &Config::default()).unwrap();
        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["app.js"]);
    }

    #[test]
    fn hidden_project_root_is_still_walked() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(".workspace");
        write(&root, "src/app.js", "export const app = 1;");

        let records = discover(&root, &Config::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "src/app.js");
    }

    #[test]
    fn framework_hint_reaches_records() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "main.js", "console.log('hi');");
        let config = Config {
            framework: FrameworkHint::Svelte,
            ..Config::default()
        };
        let records = discover(dir.path(), &config).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].framework, Framework::Svelte);
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bin.js"), [0x66, 0x6f, 0xff, 0x6f]).unwrap();
        let records = discover(dir.path(), &Config::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].content.contains('\u{FFFD}'));
    }

    #[test]
    fn missing_root_fails_before_analysis() {
        let dir = TempDir::new().unwrap();
        let err = discover(&dir.path().join("nope"), &Config::default()).unwrap_err();
        assert!(matches!(err, AssessError::ProjectNotFound(_)));
    }

    #[test]
    fn empty_project_yields_no_records() {
        let dir = TempDir::new().unwrap();
        let records = discover(dir.path(), &Config::default()).unwrap();
        assert!(records.is_empty());
    }
}
