use anyhow::Result;
use protocol_vendor::{Fetcher, SyncReport, VendorConfig};

/// Print a finished run to stdout.
pub fn print_report(report: &SyncReport) {
    for path in &report.removed {
        println!("Deleted: {}", path.display());
    }
    for artifact in &report.written {
        println!(
            "Wrote {} ({} bytes) from {}",
            artifact.path.display(),
            artifact.bytes,
            artifact.url
        );
    }
}

/// Clean the target directory and download every pinned artifact.
pub async fn run(fetcher: &dyn Fetcher, config: &VendorConfig) -> Result<()> {
    println!("Downloading LSP protocol files for {}", config.revision);

    let report = protocol_vendor::run(fetcher, config).await?;

    print_report(&report);
    println!(
        "Vendored {} files into {} ({} stale removed).",
        report.written.len(),
        config.target_dir.display(),
        report.removed.len()
    );

    Ok(())
}
