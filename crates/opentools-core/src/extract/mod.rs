//! Reference extraction from free-form issue text.

mod patterns;

pub use patterns::{BRACKETED_PATTERN, DATA_FILE_SUFFIX, URL_PATTERN};

use regex::Regex;

/// Extract every `.json` URL from `text`, in order of appearance.
pub fn extract_json_urls(text: &str) -> Vec<String> {
    let re = match Regex::new(URL_PATTERN) {
        Ok(r) => r,
        Err(_) => return Vec::new(),
    };

    re.find_iter(text)
        .map(|m| m.as_str())
        .filter(|url| url.ends_with(DATA_FILE_SUFFIX))
        .map(str::to_string)
        .collect()
}

/// Reduce a decorated label to its identifier.
///
/// `"MIT (mit-license)"` becomes `"mit-license"`. Only the first
/// parenthesized group counts. Text without one is returned unchanged.
pub fn extract_bracketed_identifier(text: &str) -> String {
    let re = match Regex::new(BRACKETED_PATTERN) {
        Ok(r) => r,
        Err(_) => return text.to_string(),
    };

    re.captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| text.to_string())
}

/// Slug used as an entity's file stem: lowercase, spaces become hyphens.
pub fn slugify_unique_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_link_stops_at_paren() {
        let urls = extract_json_urls("[data](https://host/x.json) done");
        assert_eq!(urls, vec!["https://host/x.json"]);
    }

    #[test]
    fn test_first_group_only() {
        assert_eq!(extract_bracketed_identifier("A (b) (c)"), "b");
    }

    #[test]
    fn test_slug_keeps_other_punctuation() {
        assert_eq!(slugify_unique_name("C++ Tools_2"), "c++-tools_2");
    }
}
