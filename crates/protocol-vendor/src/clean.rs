use std::path::{Path, PathBuf};

use crate::artifact::GeneratedFileRule;
use crate::error::VendorError;

/// Delete every generated file directly inside `dir`.
///
/// Only the immediate entries are considered. Matches are removed in file
/// name order and the removed paths are returned in that order. On the
/// first failed deletion the error is returned and earlier deletions stay.
pub async fn clean(dir: &Path, rule: &GeneratedFileRule) -> Result<Vec<PathBuf>, VendorError> {
    let unavailable = |source| VendorError::DirectoryUnavailable {
        path: dir.to_owned(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(unavailable)?;
    let mut matched = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(unavailable)? {
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| rule.matches(n)) {
            matched.push(entry.path());
        }
    }

    matched.sort();

    for path in &matched {
        tokio::fs::remove_file(path)
            .await
            .map_err(|source| VendorError::DeleteFailed {
                path: path.clone(),
                source,
            })?;
        tracing::info!(file = %path.display(), "deleted");
    }

    Ok(matched)
}
