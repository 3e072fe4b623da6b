use sha2::{Digest, Sha256};

/// Derive a `.txt` file name from an article title.
///
/// Surrounding whitespace is dropped first, then every remaining
/// whitespace character becomes an underscore and every ASCII
/// punctuation character is removed.
pub fn article_file_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    for c in title.trim().chars() {
        if c.is_whitespace() {
            name.push('_');
        } else if !c.is_ascii_punctuation() {
            name.push(c);
        }
    }
    name.push_str(".txt");
    name
}

/// Collision form: the sanitized title with a short stable hash of the
/// source URL spliced in before the extension.
pub fn disambiguated_file_name(title: &str, url: &str) -> String {
    let base = article_file_name(title);
    let stem = base.strip_suffix(".txt").unwrap_or(&base);
    format!("{stem}--{}.txt", short_hash(url))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().take(4).map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trims_and_underscores() {
        assert_eq!(
            article_file_name("  Breakthrough in Quantum Computing!  "),
            "Breakthrough_in_Quantum_Computing.txt"
        );
    }

    #[test]
    fn inner_whitespace_becomes_underscores() {
        assert_eq!(article_file_name("a\tb\nc"), "a_b_c.txt");
    }

    #[test]
    fn punctuation_is_removed_including_underscores() {
        assert_eq!(article_file_name("a_b: c/d"), "ab_cd.txt");
    }

    #[test]
    fn result_has_no_whitespace_or_punctuation() {
        let name = article_file_name("  Sample, Title! (2020) -- draft?  ");
        let stem = name.strip_suffix(".txt").unwrap();
        assert!(!stem.chars().any(char::is_whitespace));
        assert!(!stem.chars().any(|c| c.is_ascii_punctuation() && c != '_'));
        assert_eq!(name, "Sample_Title_2020__draft.txt");
    }

    #[test]
    fn disambiguated_name_is_stable() {
        let a = disambiguated_file_name("Sample, Title!", "https://example.com/articles/1");
        let b = disambiguated_file_name("Sample, Title!", "https://example.com/articles/1");
        assert_eq!(a, b);
        assert!(a.starts_with("Sample_Title--"));
        assert!(a.ends_with(".txt"));

        let c = disambiguated_file_name("Sample, Title!", "https://example.com/articles/2");
        assert_ne!(a, c);
    }
}
