use scraper::{ElementRef, Html};
use url::Url;

use crate::site::SiteProfile;

/// Anchor data for one listing entry: visible text and resolved target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLink {
    pub title: String,
    pub detail_url: String,
}

/// One entry scraped from a listing page.
///
/// Both fields are resolved eagerly so the caller owns plain data once
/// the document is dropped; which defects matter depends on whether the
/// entry survives the type filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub type_label: Result<String, EntryError>,
    pub link: Result<ArticleLink, EntryError>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry has no type label element")]
    MissingTypeLabel,
    #[error("entry has no detail link element")]
    MissingLink,
    #[error("detail link has no href attribute")]
    MissingHref,
    #[error("unresolvable detail link {0:?}")]
    UnresolvableLink(String),
}

/// Scrape every article entry from a listing page.
///
/// A page with no entry elements yields an empty vector; that is not an
/// error.
pub fn parse_listing(html: &str, profile: &SiteProfile) -> Vec<ListingEntry> {
    let doc = Html::parse_document(html);
    doc.select(&profile.entry_selector)
        .map(|entry| ListingEntry {
            type_label: type_label(entry, profile),
            link: entry_link(entry, profile),
        })
        .collect()
}

fn type_label(entry: ElementRef<'_>, profile: &SiteProfile) -> Result<String, EntryError> {
    let label = entry
        .select(&profile.type_selector)
        .next()
        .ok_or(EntryError::MissingTypeLabel)?;
    Ok(label.text().collect())
}

fn entry_link(entry: ElementRef<'_>, profile: &SiteProfile) -> Result<ArticleLink, EntryError> {
    let anchor = entry
        .select(&profile.link_selector)
        .next()
        .ok_or(EntryError::MissingLink)?;
    let href = anchor
        .value()
        .attr("href")
        .ok_or(EntryError::MissingHref)?;
    let detail_url = resolve_detail_url(href, profile.site_root())
        .ok_or_else(|| EntryError::UnresolvableLink(href.to_string()))?;
    let title = anchor.text().collect::<String>().trim().to_string();
    Ok(ArticleLink { title, detail_url })
}

/// Absolute hrefs pass through; relative ones are joined onto the site root.
fn resolve_detail_url(href: &str, root: &str) -> Option<String> {
    if let Ok(url) = Url::parse(href) {
        return Some(String::from(url));
    }
    Url::parse(root).ok()?.join(href).ok().map(String::from)
}
