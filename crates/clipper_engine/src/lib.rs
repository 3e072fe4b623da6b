//! Clipper engine: fetch listing pages, filter articles by type, and
//! persist their body text.
mod article;
mod decode;
mod fetch;
mod filename;
mod harvest;
mod listing;
mod movie;
mod persist;
mod quote;
mod site;
mod snapshot;
mod types;

pub use article::extract_body;
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::{article_file_name, disambiguated_file_name};
pub use harvest::{
    harvest, ArticleFailure, FailureStage, HarvestError, HarvestOptions, HarvestReport,
    SavedArticle,
};
pub use listing::{parse_listing, ArticleLink, EntryError, ListingEntry};
pub use movie::{fetch_movie, fetch_settings as movie_fetch_settings, MovieError, MovieSummary};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use quote::{fetch_quote, QuoteError};
pub use site::{ProfileError, SiteConfig, SiteProfile};
pub use snapshot::{save_page, SnapshotError, DEFAULT_DESTINATION};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
