use regex::Regex;
use scraper::Selector;
use thiserror::Error;

/// Selector and URL strings describing one listing site's markup.
///
/// Compiled into a [`SiteProfile`] before use so selector mistakes
/// surface once, up front, instead of on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Listing URL prefix; the page number is appended verbatim.
    pub listing_url_base: String,
    /// Root used to resolve relative detail links.
    pub site_root: String,
    /// One article entry on a listing page.
    pub entry_selector: String,
    /// The element carrying the entry's type label.
    pub type_selector: String,
    /// The anchor pointing at the article detail page.
    pub link_selector: String,
    /// Candidate body containers on a detail page.
    pub body_selector: String,
    /// Matched against each candidate's `class` attribute; first hit wins.
    pub body_class_pattern: String,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid selector {0:?}")]
    Selector(String),
    #[error("invalid body class pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },
}

/// Compiled site knowledge injected into the harvest loop.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub(crate) listing_url_base: String,
    pub(crate) site_root: String,
    pub(crate) entry_selector: Selector,
    pub(crate) type_selector: Selector,
    pub(crate) link_selector: Selector,
    pub(crate) body_selector: Selector,
    pub(crate) body_class_pattern: Regex,
}

impl SiteProfile {
    pub fn from_config(config: SiteConfig) -> Result<Self, ProfileError> {
        Ok(Self {
            entry_selector: compile(&config.entry_selector)?,
            type_selector: compile(&config.type_selector)?,
            link_selector: compile(&config.link_selector)?,
            body_selector: compile(&config.body_selector)?,
            body_class_pattern: Regex::new(&config.body_class_pattern).map_err(|err| {
                ProfileError::Pattern {
                    pattern: config.body_class_pattern.clone(),
                    message: err.to_string(),
                }
            })?,
            listing_url_base: config.listing_url_base,
            site_root: config.site_root,
        })
    }

    /// Profile for the nature.com 2020 article listing.
    pub fn nature() -> Self {
        Self::from_config(SiteConfig {
            listing_url_base: "https://www.nature.com/nature/articles?sort=PubDate&year=2020&page="
                .to_string(),
            site_root: "https://www.nature.com".to_string(),
            entry_selector: "article".to_string(),
            type_selector: "span.c-meta__type".to_string(),
            link_selector: r#"a[data-track-action="view article"]"#.to_string(),
            body_selector: "div".to_string(),
            body_class_pattern: ".*article.*body".to_string(),
        })
        .expect("built-in profile")
    }

    pub fn listing_url(&self, page: u32) -> String {
        format!("{}{}", self.listing_url_base, page)
    }

    pub fn site_root(&self) -> &str {
        &self.site_root
    }
}

fn compile(selector: &str) -> Result<Selector, ProfileError> {
    Selector::parse(selector).map_err(|_| ProfileError::Selector(selector.to_string()))
}
