use std::sync::LazyLock;

use regex::Regex;

use super::attribute::interpret_tag;

// Matches class-name style references: literal `anticon` followed by one or
// more `-word` segments, e.g. `anticon-vertical-align`. Matches are maximal
// and emitted verbatim.
static ICON_CLASS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"anticon(?:-\w+)+").unwrap());

// Matches the shortest span from a tag carrying a type-family attribute
// (`type`, `nzType`, `[type]`, `[nzType]`) to the nearest closing tag. The
// closing tag's name is not verified (the regex crate has no
// backreferences); only the first element's attribute list is interpreted,
// so the span merely has to contain it.
static ICON_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<[^<>]*\[?(?:nzType|type)\]?\s*=[^<>]*>.*?</[^<>]*>").unwrap()
});

/// Extract every raw icon-reference token from one file's text content.
///
/// Emission order is not significant and duplicates are expected; the
/// result set is deduplicated and sorted downstream.
pub fn extract_tokens(content: &str) -> Vec<String> {
    let mut tokens: Vec<String> = ICON_CLASS_REGEX
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect();

    for m in ICON_TAG_REGEX.find_iter(content) {
        tokens.extend(interpret_tag(m.as_str()));
    }

    tokens
}
