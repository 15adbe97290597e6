pub mod artifact;
pub mod clean;
pub mod config;
pub mod error;
pub mod fetch;
pub mod sync;

pub use artifact::{ArtifactSpec, GeneratedFileRule, PinnedRevision};
pub use clean::clean;
pub use config::{VendorConfig, default_artifacts};
pub use error::VendorError;
pub use fetch::{FetchError, FetchResult, Fetcher, StatusPolicy};
pub use sync::{SyncReport, WrittenArtifact, run, sync};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
