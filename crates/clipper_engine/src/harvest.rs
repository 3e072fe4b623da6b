use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use log::{info, warn};

use crate::article;
use crate::decode::decode_page;
use crate::fetch::Fetcher;
use crate::filename;
use crate::listing::{self, ArticleLink, ListingEntry};
use crate::persist::{ensure_output_dir, AtomicFileWriter, PersistError};
use crate::site::SiteProfile;

#[derive(Debug, Clone)]
pub struct HarvestOptions {
    pub page_count: u32,
    pub article_type: String,
    pub start_page: u32,
    /// When set, each page's files go into a `Page_<n>` subdirectory;
    /// otherwise everything lands directly in the output root.
    pub create_directories: bool,
    pub output_root: PathBuf,
}

impl HarvestOptions {
    pub fn new(page_count: u32, article_type: impl Into<String>) -> Self {
        Self {
            page_count,
            article_type: article_type.into(),
            start_page: 1,
            create_directories: true,
            output_root: PathBuf::from("."),
        }
    }
}

/// Where in the per-article pipeline a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Fetching or decoding the listing page itself.
    Listing,
    /// A defect in one listing entry (missing label, link, or href).
    Entry,
    /// Fetching, decoding, or extracting the detail page.
    Detail,
    /// Creating the page directory or writing the article file.
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArticle {
    pub page: u32,
    pub title: String,
    pub url: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFailure {
    pub page: u32,
    pub stage: FailureStage,
    pub title: Option<String>,
    pub url: Option<String>,
    pub message: String,
}

impl ArticleFailure {
    fn page_level(page: u32, stage: FailureStage, message: String) -> Self {
        Self {
            page,
            stage,
            title: None,
            url: None,
            message,
        }
    }
}

/// Aggregate outcome of a best-effort harvest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestReport {
    pub pages_visited: u32,
    pub saved: Vec<SavedArticle>,
    pub failures: Vec<ArticleFailure>,
}

#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("output root unusable: {0}")]
    OutputRoot(#[from] PersistError),
}

/// Walk the listing pages `[start_page, start_page + page_count)` in
/// ascending order, save every article whose type label equals
/// `article_type`, and report what happened.
///
/// Each listing fetch, detail fetch, and file write runs to completion
/// before the next begins. A failure on one article or one listing page
/// is recorded and the run continues; only an unusable output root
/// aborts the whole run.
pub async fn harvest(
    fetcher: &dyn Fetcher,
    profile: &SiteProfile,
    options: &HarvestOptions,
) -> Result<HarvestReport, HarvestError> {
    ensure_output_dir(&options.output_root)?;

    let mut report = HarvestReport::default();
    // Names handed out so far, per directory; a second article that
    // sanitizes to a used name gets a URL-hash discriminator instead of
    // silently overwriting the first.
    let mut used_names: HashMap<PathBuf, HashSet<String>> = HashMap::new();

    for page in options.start_page..options.start_page + options.page_count {
        report.pages_visited += 1;

        let page_dir = if options.create_directories {
            let dir = options.output_root.join(format!("Page_{page}"));
            if let Err(err) = ensure_output_dir(&dir) {
                warn!("page {page}: cannot prepare {}: {err}", dir.display());
                report.failures.push(ArticleFailure::page_level(
                    page,
                    FailureStage::Write,
                    err.to_string(),
                ));
                continue;
            }
            dir
        } else {
            options.output_root.clone()
        };

        let listing_url = profile.listing_url(page);
        info!("page {page}: fetching listing {listing_url}");
        let entries = match fetch_entries(fetcher, profile, &listing_url).await {
            Ok(entries) => entries,
            Err(message) => {
                warn!("page {page}: listing failed: {message}");
                report.failures.push(ArticleFailure::page_level(
                    page,
                    FailureStage::Listing,
                    message,
                ));
                continue;
            }
        };

        let writer = AtomicFileWriter::new(page_dir.clone());
        let names = used_names.entry(page_dir).or_default();
        for entry in entries {
            let link = match keep_entry(entry, &options.article_type) {
                Keep::Yes(link) => link,
                Keep::No => continue,
                Keep::Defect(message) => {
                    warn!("page {page}: skipping entry: {message}");
                    report.failures.push(ArticleFailure::page_level(
                        page,
                        FailureStage::Entry,
                        message,
                    ));
                    continue;
                }
            };

            match save_article(fetcher, profile, &writer, &link, names).await {
                Ok(path) => {
                    info!("page {page}: saved {:?} -> {}", link.title, path.display());
                    report.saved.push(SavedArticle {
                        page,
                        title: link.title,
                        url: link.detail_url,
                        path,
                    });
                }
                Err((stage, message)) => {
                    warn!("page {page}: {:?} failed: {message}", link.title);
                    report.failures.push(ArticleFailure {
                        page,
                        stage,
                        title: Some(link.title),
                        url: Some(link.detail_url),
                        message,
                    });
                }
            }
        }
    }

    info!(
        "harvest done: {} page(s), {} saved, {} failed",
        report.pages_visited,
        report.saved.len(),
        report.failures.len()
    );
    Ok(report)
}

enum Keep {
    Yes(ArticleLink),
    No,
    Defect(String),
}

/// Apply the type filter to one entry. An unreadable label is a defect;
/// a broken link only matters once the label has matched.
fn keep_entry(entry: ListingEntry, article_type: &str) -> Keep {
    let label = match entry.type_label {
        Ok(label) => label,
        Err(err) => return Keep::Defect(err.to_string()),
    };
    if label != article_type {
        return Keep::No;
    }
    match entry.link {
        Ok(link) => Keep::Yes(link),
        Err(err) => Keep::Defect(err.to_string()),
    }
}

async fn fetch_entries(
    fetcher: &dyn Fetcher,
    profile: &SiteProfile,
    url: &str,
) -> Result<Vec<ListingEntry>, String> {
    let output = fetcher.fetch(url).await.map_err(|err| err.to_string())?;
    let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())
        .map_err(|err| err.to_string())?;
    Ok(listing::parse_listing(&decoded.html, profile))
}

async fn save_article(
    fetcher: &dyn Fetcher,
    profile: &SiteProfile,
    writer: &AtomicFileWriter,
    link: &ArticleLink,
    names: &mut HashSet<String>,
) -> Result<PathBuf, (FailureStage, String)> {
    let output = fetcher
        .fetch(&link.detail_url)
        .await
        .map_err(|err| (FailureStage::Detail, err.to_string()))?;
    let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())
        .map_err(|err| (FailureStage::Detail, err.to_string()))?;
    let body = article::extract_body(&decoded.html, profile)
        .ok_or_else(|| (FailureStage::Detail, "no article body container".to_string()))?;
    if body.is_empty() {
        return Err((FailureStage::Detail, "article body is empty".to_string()));
    }

    let mut name = filename::article_file_name(&link.title);
    if !names.insert(name.clone()) {
        name = filename::disambiguated_file_name(&link.title, &link.detail_url);
        names.insert(name.clone());
    }

    writer
        .write(&name, body.as_bytes())
        .map_err(|err| (FailureStage::Write, err.to_string()))
}
