use std::path::{Path, PathBuf};

use crate::fetch::Fetcher;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::types::{FailureKind, FetchError};

pub const DEFAULT_DESTINATION: &str = "source.html";

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("The URL returned {0}!")]
    HttpStatus(u16),
    #[error("fetch failed: {0}")]
    Fetch(FetchError),
    #[error("destination has no file name: {0}")]
    Destination(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Download a page and store its raw, undecoded bytes at `destination`,
/// replacing any previous snapshot.
pub async fn save_page(
    fetcher: &dyn Fetcher,
    url: &str,
    destination: &Path,
) -> Result<PathBuf, SnapshotError> {
    let output = fetcher.fetch(url).await.map_err(|err| match err.kind {
        FailureKind::InvalidUrl => SnapshotError::InvalidUrl,
        FailureKind::HttpStatus(code) => SnapshotError::HttpStatus(code),
        _ => SnapshotError::Fetch(err),
    })?;

    let file_name = destination
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| SnapshotError::Destination(destination.display().to_string()))?;
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let writer = AtomicFileWriter::new(dir);
    Ok(writer.write(file_name, &output.bytes)?)
}
