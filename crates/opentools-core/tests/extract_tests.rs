use opentools_core::{extract_bracketed_identifier, extract_json_urls, slugify_unique_name};

#[test]
fn test_only_json_urls_in_order() {
    let text = "see https://h/a.json and https://h/b.txt and http://h/c.json";
    assert_eq!(
        extract_json_urls(text),
        vec!["https://h/a.json", "http://h/c.json"]
    );
}

#[test]
fn test_no_urls() {
    assert!(extract_json_urls("").is_empty());
    assert!(extract_json_urls("just a plain comment about a.json").is_empty());
}

#[test]
fn test_url_with_trailing_text_is_not_json() {
    assert!(extract_json_urls("https://h/a.json.bak").is_empty());
}

#[test]
fn test_github_attachment_link() {
    let body = "Data file:\n\n[issue42.json](https://github.com/user-attachments/files/171/issue42.json)\n";
    assert_eq!(
        extract_json_urls(body),
        vec!["https://github.com/user-attachments/files/171/issue42.json"]
    );
}

#[test]
fn test_bracketed_identifier() {
    assert_eq!(extract_bracketed_identifier("MIT License (mit)"), "mit");
    assert_eq!(extract_bracketed_identifier("Apache-2.0"), "Apache-2.0");
    assert_eq!(extract_bracketed_identifier("Empty ()"), "");
}

#[test]
fn test_unclosed_paren_is_unchanged() {
    assert_eq!(extract_bracketed_identifier("GPL (v3"), "GPL (v3");
}

#[test]
fn test_slug() {
    assert_eq!(slugify_unique_name("My Tool Name"), "my-tool-name");
    assert_eq!(slugify_unique_name("Acme Corp"), "acme-corp");
}
