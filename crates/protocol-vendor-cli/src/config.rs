use std::path::Path;

use anyhow::{Context, Result};
use protocol_vendor::VendorConfig;

/// Load the vendoring config.
///
/// Without a path the built-in gopls config is used. A file only needs the
/// fields it overrides; everything else keeps its default. A file that was
/// asked for but cannot be read or parsed is an error.
pub fn load_config(path: Option<&Path>) -> Result<VendorConfig> {
    let Some(path) = path else {
        return Ok(VendorConfig::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let config: VendorConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    tracing::debug!(file = %path.display(), ?config, "loaded config");

    Ok(config)
}
