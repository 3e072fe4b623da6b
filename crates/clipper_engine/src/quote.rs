use serde_json::Value;

use crate::fetch::Fetcher;
use crate::types::{FailureKind, FetchError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Invalid quote resource!")]
    InvalidResource,
}

/// Fetch a JSON quote endpoint and return the string under its
/// `content` key.
pub async fn fetch_quote(fetcher: &dyn Fetcher, url: &str) -> Result<String, QuoteError> {
    let output = fetcher.fetch(url).await.map_err(classify)?;
    let value: Value =
        serde_json::from_slice(&output.bytes).map_err(|_| QuoteError::InvalidResource)?;
    match value.get("content") {
        Some(Value::String(content)) => Ok(content.clone()),
        _ => Err(QuoteError::InvalidResource),
    }
}

fn classify(err: FetchError) -> QuoteError {
    match err.kind {
        FailureKind::InvalidUrl => QuoteError::InvalidUrl,
        _ => QuoteError::InvalidResource,
    }
}
