use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::artifact::{ArtifactSpec, GeneratedFileRule, PinnedRevision};
use crate::error::VendorError;
use crate::fetch::StatusPolicy;

pub const DEFAULT_REVISION: &str = "gopls/v0.11.0";
pub const DEFAULT_REMOTE_BASE_URL: &str = "https://raw.githubusercontent.com/golang/tools/";
pub const DEFAULT_TARGET_DIR: &str = "lib/languageserver/internal/protocol";

const UPSTREAM_PROTOCOL_DIR: &str = "gopls/internal/lsp/protocol";

/// Everything a vendoring run needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VendorConfig {
    pub revision: PinnedRevision,
    pub remote_base_url: String,
    /// Relative paths are resolved by the caller, see [`VendorConfig::rooted_at`].
    pub target_dir: PathBuf,
    pub artifacts: Vec<ArtifactSpec>,
    pub generated: GeneratedFileRule,
    pub status_policy: StatusPolicy,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            revision: PinnedRevision::new(DEFAULT_REVISION),
            remote_base_url: DEFAULT_REMOTE_BASE_URL.into(),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            artifacts: default_artifacts(),
            generated: GeneratedFileRule::default(),
            status_policy: StatusPolicy::default(),
        }
    }
}

/// The gopls protocol bindings vendored by default.
pub fn default_artifacts() -> Vec<ArtifactSpec> {
    vec![
        ArtifactSpec::new(
            format!("{UPSTREAM_PROTOCOL_DIR}/tsdocument_changes.go"),
            "generated_protocol_document_changes.go",
        ),
        ArtifactSpec::new(
            format!("{UPSTREAM_PROTOCOL_DIR}/tsprotocol.go"),
            "generated_protocol.go",
        ),
    ]
}

impl VendorConfig {
    /// Resolve a relative `target_dir` against `root`.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        if self.target_dir.is_relative() {
            self.target_dir = root.join(&self.target_dir);
        }
        self
    }

    pub fn target_path(&self, artifact: &ArtifactSpec) -> PathBuf {
        self.target_dir.join(&artifact.local_name)
    }

    pub fn artifact_url(&self, artifact: &ArtifactSpec) -> String {
        artifact.remote_url(&self.remote_base_url, &self.revision)
    }

    /// Check the artifact list against the generated-file rule.
    ///
    /// A local name the cleaner would not recognise would survive every
    /// later run as an orphan, so it is rejected up front.
    pub fn validate(&self) -> Result<(), VendorError> {
        if self.artifacts.is_empty() {
            return Err(VendorError::Config("no artifacts configured".into()));
        }

        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            let name = artifact.local_name.as_str();

            if name.contains('/') || name.contains('\\') {
                return Err(VendorError::Config(format!(
                    "local name {name:?} must be a bare file name"
                )));
            }

            if !self.generated.matches(name) {
                return Err(VendorError::Config(format!(
                    "local name {name:?} does not match the generated file convention ({}*.{})",
                    self.generated.prefix, self.generated.extension
                )));
            }

            if !seen.insert(name) {
                return Err(VendorError::Config(format!(
                    "local name {name:?} is used by more than one artifact"
                )));
            }
        }

        Ok(())
    }
}
