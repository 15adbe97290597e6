use std::fmt;
use std::path::Path;

use serde::Deserialize;

/// Maps one remote document to one local file name.
///
/// `remote_path` is relative to the pinned revision root of the upstream
/// repository; `local_name` is a bare file name inside the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactSpec {
    pub remote_path: String,
    pub local_name: String,
}

impl ArtifactSpec {
    pub fn new(remote_path: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            remote_path: remote_path.into(),
            local_name: local_name.into(),
        }
    }

    /// `<base><revision>/<remote_path>`
    pub fn remote_url(&self, remote_base_url: &str, revision: &PinnedRevision) -> String {
        format!("{remote_base_url}{}/{}", revision.as_str(), self.remote_path)
    }
}

/// The upstream tag or ref every artifact of a run is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PinnedRevision(String);

impl PinnedRevision {
    pub fn new(revision: impl Into<String>) -> Self {
        Self(revision.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinnedRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PinnedRevision {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Naming convention that marks a file as owned by the vendoring tool.
///
/// There is no manifest: any file in the target directory whose name starts
/// with `prefix` and has extension `extension` is a generated file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratedFileRule {
    pub prefix: String,
    /// Extension without the leading dot.
    pub extension: String,
}

impl Default for GeneratedFileRule {
    fn default() -> Self {
        Self {
            prefix: "generated_".into(),
            extension: "go".into(),
        }
    }
}

impl GeneratedFileRule {
    pub fn matches(&self, file_name: &str) -> bool {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str());

        file_name.starts_with(&self.prefix) && extension == Some(self.extension.as_str())
    }
}
