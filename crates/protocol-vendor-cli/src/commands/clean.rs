use anyhow::Result;
use protocol_vendor::VendorConfig;

/// Remove generated files without downloading replacements.
pub async fn run(config: &VendorConfig) -> Result<()> {
    println!(
        "Cleaning LSP protocol files from {} ...",
        config.target_dir.display()
    );

    let removed = protocol_vendor::clean(&config.target_dir, &config.generated).await?;

    for path in &removed {
        println!("Deleted: {}", path.display());
    }
    println!("Removed {} generated files.", removed.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn removes_generated_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("generated_protocol.go"), "old").unwrap();
        std::fs::write(dir.path().join("custom_messages.go"), "keep").unwrap();
        let config = VendorConfig {
            target_dir: dir.path().to_owned(),
            ..VendorConfig::default()
        };

        run(&config).await.unwrap();

        assert!(!dir.path().join("generated_protocol.go").exists());
        assert!(dir.path().join("custom_messages.go").exists());
    }
}
