//! Resolution: map a raw icon-reference token to its canonical identifier.
//!
//! The rules unify the naming schemes that accumulated across icon catalog
//! versions: legacy misspellings, the renamed `cross` family, abbreviated
//! `-o` outline suffixes, `#theme` markers produced by attribute
//! extraction, and the outline default for unthemed references.

use std::fmt;

/// A normalized icon identifier: PascalCase with a mandatory `Outline` or
/// `Fill` suffix, e.g. `HomeOutline`.
///
/// Ordered by its string form, which gives the manifest its lexicographic
/// order; set membership is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalIcon(String);

impl CanonicalIcon {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The spin animation helper class: shares the `anticon-` prefix but names
/// no icon.
const SPIN_MARKER: &str = "anticon-spin";

/// Identifiers never emitted regardless of usage: misspelled legacy names
/// that later catalog versions corrected and reserved.
const DENYLIST: &[&str] = &[
    "CanlendarFill",
    "CanlendarOutline",
    "ColumHeightFill",
    "ColumHeightOutline",
    "InterationFill",
    "InterationOutline",
];

/// Resolve a raw `anticon-*` token to its canonical icon identifier.
///
/// Returns `None` for non-icon tokens (the spin marker, `-o-` utility
/// classes) and for denylisted identifiers. Pure: the result depends on
/// the token alone.
pub fn resolve_icon_name(token: &str) -> Option<CanonicalIcon> {
    let rest = token.strip_prefix("anticon-")?;

    if token == SPIN_MARKER || rest.contains("-o-") {
        return None;
    }

    let aliased = apply_aliases(rest);
    let themed = apply_theme_suffix(&aliased);
    let icon = pascal_case(&themed);

    if DENYLIST.contains(&icon.as_str()) {
        return None;
    }

    Some(CanonicalIcon(icon))
}

/// Historical renames: the `verticle` misspelling and the `cross` family
/// that became `close`.
fn apply_aliases(rest: &str) -> String {
    let mut rest = rest.replacen("verticle", "vertical", 1);
    if rest.starts_with("cross") {
        rest = rest.replacen("cross", "close", 1);
    }
    rest
}

/// Rewrite the theme marker into a full suffix, first matching rule wins;
/// unthemed tokens default to outline.
fn apply_theme_suffix(rest: &str) -> String {
    if let Some(stem) = rest.strip_suffix("-o") {
        format!("{}-outline", stem)
    } else if let Some(stem) = rest.strip_suffix("#outline") {
        format!("{}-outline", stem)
    } else if let Some(stem) = rest.strip_suffix("#fill") {
        format!("{}-fill", stem)
    } else {
        format!("{}-outline", rest)
    }
}

/// Kebab-case to PascalCase: each `-<lowercase>` collapses to the
/// uppercase letter, then the first character is uppercased.
fn pascal_case(name: &str) -> String {
    let mut camel = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            camel.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            camel.push(c);
        }
    }

    let mut rest = camel.chars();
    match rest.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + rest.as_str(),
        None => camel,
    }
}
