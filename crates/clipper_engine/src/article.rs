use scraper::Html;

use crate::site::SiteProfile;

/// Extract the trimmed body text of an article detail page.
///
/// The body container is the first candidate element whose `class`
/// attribute matches the profile's pattern; the match is an unanchored
/// substring search against the whole attribute value, mirroring the
/// markup this was observed to work on. Tags are dropped, text nodes
/// concatenated.
pub fn extract_body(html: &str, profile: &SiteProfile) -> Option<String> {
    let doc = Html::parse_document(html);
    let container = doc.select(&profile.body_selector).find(|candidate| {
        candidate
            .value()
            .attr("class")
            .map(|class| profile.body_class_pattern.is_match(class))
            .unwrap_or(false)
    })?;
    let text: String = container.text().collect();
    Some(text.trim().to_string())
}
