use scraper::{Html, Selector};

use crate::decode::decode_page;
use crate::fetch::{FetchSettings, Fetcher};

/// Language header IMDb expects for stable, untranslated titles.
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub title: String,
    pub description: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MovieError {
    #[error("Invalid movie page!")]
    InvalidPage,
}

/// Fetch settings for IMDb pages: HTML only, with the language header set.
pub fn fetch_settings() -> FetchSettings {
    FetchSettings {
        accept_language: Some(ACCEPT_LANGUAGE.to_string()),
        ..FetchSettings::default()
    }
}

/// Fetch an IMDb title page and return its name and meta description.
///
/// Only URLs containing both `imdb` and `title` are accepted; anything
/// else, and any page without a description, is an invalid movie page.
pub async fn fetch_movie(fetcher: &dyn Fetcher, url: &str) -> Result<MovieSummary, MovieError> {
    if !url.contains("imdb") || !url.contains("title") {
        return Err(MovieError::InvalidPage);
    }

    let output = fetcher.fetch(url).await.map_err(|_| MovieError::InvalidPage)?;
    let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())
        .map_err(|_| MovieError::InvalidPage)?;

    let doc = Html::parse_document(&decoded.html);
    let title_selector = Selector::parse("title").expect("static selector");
    let description_selector =
        Selector::parse(r#"meta[name="description"]"#).expect("static selector");

    let title = doc
        .select(&title_selector)
        .next()
        .map(|t| t.text().collect::<String>())
        .ok_or(MovieError::InvalidPage)?;
    let description = doc
        .select(&description_selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::to_string)
        .ok_or(MovieError::InvalidPage)?;

    Ok(MovieSummary { title, description })
}
