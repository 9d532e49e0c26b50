//! File classifier: framework and structural type detection

pub mod file_type;
pub mod framework;

pub use file_type::classify_type;
pub use framework::{detect_framework, FrameworkSignature};

use crate::config::FrameworkHint;
use crate::FileRecord;

/// Build the immutable record for one file.
///
/// `path` is the project-relative path. An explicit framework hint replaces
/// detection; `auto` runs [`detect_framework`].
pub fn classify_file(path: &str, content: String, hint: FrameworkHint) -> FileRecord {
    let framework = match hint.as_framework() {
        Some(framework) => framework,
        None => detect_framework(&content, path),
    };
    let kind = classify_type(path, &content);

    FileRecord {
        path: path.to_string(),
        size: content.len(),
        lines: content.split('\n').count(),
        framework,
        kind,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileKind, Framework};

    #[test]
    fn builds_record_with_detection() {
        let content = "import React, { useState } from 'react';\nexport default function App() {\n  return <Main />;\n}\n".to_string();
        let record = classify_file("src/App.jsx", content.clone(), FrameworkHint::Auto);
        assert_eq!(record.path, "src/App.jsx");
        assert_eq!(record.size, content.len());
        assert_eq!(record.lines, 5);
        assert_eq!(record.framework, Framework::React);
        assert_eq!(record.kind, FileKind::Component);
    }

    #[test]
    fn explicit_hint_skips_detection() {
        let record = classify_file("src/a.js", "document.title = 'x';".to_string(), FrameworkHint::Vue);
        assert_eq!(record.framework, Framework::Vue);
    }

    #[test]
    fn empty_file_has_one_line() {
        let record = classify_file("src/empty.js", String::new(), FrameworkHint::Auto);
        assert_eq!(record.lines, 1);
        assert_eq!(record.size, 0);
        assert_eq!(record.kind, FileKind::Other);
        assert_eq!(record.framework, Framework::Unknown);
    }
}
