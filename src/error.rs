use thiserror::Error;

/// Failures of the JSON file stores.
///
/// A missing store file is not an error (it loads as an empty collection);
/// that case is handled at the load site and never reaches this enum.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to decode stored json")]
    Decode(#[from] serde_json::Error),
    #[error("store i/o failed")]
    Io(#[from] std::io::Error),
}
