use crate::conf::error::ConfigError;
use glob::glob;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Resolves source patterns into the files to ingest.
///
/// Patterns containing glob metacharacters are expanded; anything else is
/// taken as a plain path and passed through even if it does not exist, so
/// that a missing file surfaces as an unreadable source rather than
/// silently vanishing. Directories are skipped. The result is sorted and
/// free of duplicates.
///
/// # Errors
///
/// Returns `ConfigError::Glob` if a pattern is malformed.
pub fn discover(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, ConfigError> {
    let mut found = BTreeSet::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            let path = root.join(pattern);
            if !path.is_dir() {
                found.insert(path);
            }
            continue;
        }

        let resolved = resolve_glob(root, pattern);
        let matches = glob(&resolved).map_err(|e| ConfigError::Glob {
            pattern: resolved.clone(),
            source: e,
        })?;

        found.extend(matches.filter_map(Result::ok).filter(|p| p.is_file()));
    }

    Ok(found.into_iter().collect())
}

/// Joins `pattern` onto `root`. Absolute patterns are kept as they are.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
