use anyhow::Result;
use protocol_vendor::VendorConfig;

/// One line per artifact: `<url> -> <path>`.
pub fn lines(config: &VendorConfig) -> Vec<String> {
    config
        .artifacts
        .iter()
        .map(|artifact| {
            format!(
                "{} -> {}",
                config.artifact_url(artifact),
                config.target_path(artifact).display()
            )
        })
        .collect()
}

/// Show what a sync would download and where, without touching anything.
pub fn run(config: &VendorConfig) -> Result<()> {
    config.validate()?;

    println!("Revision: {}", config.revision);
    for line in lines(config) {
        println!("{line}");
    }

    Ok(())
}
