//! Regex patterns used to pick references out of issue text.

/// An HTTP(S) URL: scheme followed by anything up to whitespace or `)`.
///
/// The `)` stop keeps Markdown links like `[file](https://host/a.json)`
/// from swallowing the closing parenthesis.
pub const URL_PATTERN: &str = r"https?://[^\s)]+";

/// Suffix a URL must carry to count as a data file.
pub const DATA_FILE_SUFFIX: &str = ".json";

/// First parenthesized group, shortest match.
pub const BRACKETED_PATTERN: &str = r"\((.*?)\)";
