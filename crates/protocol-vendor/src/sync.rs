use std::path::PathBuf;

use crate::clean::clean;
use crate::config::VendorConfig;
use crate::error::VendorError;
use crate::fetch::Fetcher;

/// One artifact written to disk by [`sync`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub url: String,
    pub path: PathBuf,
    pub status: u16,
    pub bytes: usize,
}

/// Outcome of a full clean + sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub removed: Vec<PathBuf>,
    pub written: Vec<WrittenArtifact>,
}

/// Fetch every configured artifact and write it into the target directory.
///
/// Artifacts are processed strictly one after another: the next fetch starts
/// only after the previous file has been written. The first failure stops
/// the sequence; files written before it are kept.
pub async fn sync(
    fetcher: &dyn Fetcher,
    config: &VendorConfig,
) -> Result<Vec<WrittenArtifact>, VendorError> {
    let mut written = Vec::with_capacity(config.artifacts.len());

    for artifact in &config.artifacts {
        let url = config.artifact_url(artifact);
        tracing::info!(%url, "downloading");

        let response = fetcher
            .fetch(&url)
            .await
            .map_err(|e| VendorError::transport(&url, e))?;

        config
            .status_policy
            .check(&response)
            .map_err(|message| VendorError::Transport {
                url: url.clone(),
                message,
            })?;

        if !response.is_success() {
            tracing::warn!(
                %url,
                status = response.status,
                redirect = response.redirect_target.as_deref().unwrap_or("-"),
                "writing non-success response as content"
            );
        }

        let path = config.target_path(artifact);
        tracing::info!(file = %path.display(), "writing");

        tokio::fs::write(&path, response.body.as_bytes())
            .await
            .map_err(|source| VendorError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        written.push(WrittenArtifact {
            url,
            path,
            status: response.status,
            bytes: response.body.len(),
        });
    }

    Ok(written)
}

/// Remove stale generated files, then download the pinned artifacts.
pub async fn run(fetcher: &dyn Fetcher, config: &VendorConfig) -> Result<SyncReport, VendorError> {
    config.validate()?;

    tracing::info!(
        revision = %config.revision,
        target = %config.target_dir.display(),
        artifacts = config.artifacts.len(),
        "vendoring protocol files"
    );

    let removed = clean(&config.target_dir, &config.generated).await?;
    let written = sync(fetcher, config).await?;

    Ok(SyncReport { removed, written })
}
