//! Structural file type classification

use crate::FileKind;

const TEST_FRAGMENTS: &[&str] = &["test", "spec"];
const CONFIG_FRAGMENTS: &[&str] = &["config", "setup"];
const COMPONENT_MARKERS: &[&str] = &[
    "export default",
    "export class",
    "<template>",
    "function Component",
];
const SERVICE_MARKERS: &[&str] = &["service", "api", "fetch", "axios"];
const UTILITY_MARKERS: &[&str] = &["export function", "export const"];

/// Classify a file by walking an ordered decision list; the first hit wins.
///
/// Path fragments are checked case-insensitively against the relative path,
/// content markers are plain substring checks. Total: no signal means `Other`.
pub fn classify_type(path: &str, content: &str) -> FileKind {
    let path_lower = path.to_lowercase();

    if TEST_FRAGMENTS.iter().any(|f| path_lower.contains(f)) {
        return FileKind::Test;
    }
    if CONFIG_FRAGMENTS.iter().any(|f| path_lower.contains(f)) {
        return FileKind::Config;
    }
    if COMPONENT_MARKERS.iter().any(|m| content.contains(m)) {
        return FileKind::Component;
    }
    if SERVICE_MARKERS.iter().any(|m| content.contains(m)) {
        return FileKind::Service;
    }
    if UTILITY_MARKERS.iter().any(|m| content.contains(m)) {
        return FileKind::Utility;
    }

    FileKind::Other
}
