//! Attribute interpretation for icon tag fragments.
//!
//! A tag fragment carries the icon "type" facet and optionally a "theme"
//! facet. Both come in two attribute-name families (the legacy bare names
//! `type`/`theme` and the framework-prefixed `nzType`/`nzTheme`) and two
//! syntactic forms: static (plain attribute, literal value) and bound
//! (bracket-wrapped attribute name, expression value). Expressions
//! contribute every single-quoted literal they contain, which captures both
//! branches of a conditional like `active ? 'home' : 'user'`.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::is_identifier_like;

/// Type-facet attribute names, most specific first.
const TYPE_ATTRIBUTES: &[&str] = &["nzType", "type"];

/// Theme-facet attribute names, most specific first.
const THEME_ATTRIBUTES: &[&str] = &["nzTheme", "theme"];

// Attributes of a single element: `name="value"` or `name='value'`, where
// the name may be bracket-wrapped for the bound form.
static ATTRIBUTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([\[\]\w-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

// Non-empty single-quoted literals inside an expression.
static QUOTED_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'([^']+)'").unwrap());

/// Literal alternatives extracted from one tag fragment, ordered as found.
#[derive(Debug, Default)]
struct AttributeFacets {
    type_candidates: Vec<String>,
    theme_candidates: Vec<String>,
}

impl AttributeFacets {
    /// Compose the facets into unprefixed candidate strings.
    ///
    /// No theme leaves the type candidates bare; any themes re-derive the
    /// set as `<type>#<theme>` for every type candidate, so a conditional
    /// over both themes yields both variants of every type.
    fn compose(self) -> Vec<String> {
        if self.theme_candidates.is_empty() {
            return self.type_candidates;
        }
        self.theme_candidates
            .iter()
            .flat_map(|theme| {
                self.type_candidates
                    .iter()
                    .map(move |ty| format!("{}#{}", ty, theme))
            })
            .collect()
    }
}

/// Interpret a tag fragment and produce raw icon-reference tokens.
///
/// Only the fragment's first element is inspected. A fragment that cannot
/// be parsed into an element, or that has no type attribute, produces
/// nothing: a theme alone never yields a token.
pub fn interpret_tag(fragment: &str) -> Vec<String> {
    let Some(attributes) = first_element_attributes(fragment) else {
        return Vec::new();
    };

    let facets = AttributeFacets {
        type_candidates: type_candidates(&attributes),
        theme_candidates: theme_candidates(&attributes),
    };
    if facets.type_candidates.is_empty() {
        return Vec::new();
    }

    facets
        .compose()
        .into_iter()
        .map(|candidate| {
            if candidate.starts_with("anticon-") {
                candidate
            } else {
                format!("anticon-{}", candidate)
            }
        })
        .collect()
}

/// Attribute name/value pairs of the fragment's first element, or None when
/// the fragment contains no element.
fn first_element_attributes(fragment: &str) -> Option<Vec<(String, String)>> {
    let start = fragment.find('<')?;
    let end = start + fragment[start..].find('>')?;
    let element = &fragment[start..=end];

    Some(
        ATTRIBUTE_REGEX
            .captures_iter(element)
            .map(|cap| {
                let name = cap[1].to_string();
                let value = cap
                    .get(2)
                    .or_else(|| cap.get(3))
                    .map_or(String::new(), |m| m.as_str().to_string());
                (name, value)
            })
            .collect(),
    )
}

fn attribute_value<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

/// Literal type alternatives from the type attribute.
///
/// A static value is the sole candidate when it is identifier-shaped;
/// otherwise the value is treated as an expression and every single-quoted
/// literal in it becomes a candidate. A bound value is always an
/// expression. An expression without literals yields nothing.
fn type_candidates(attributes: &[(String, String)]) -> Vec<String> {
    for name in TYPE_ATTRIBUTES {
        if let Some(value) = attribute_value(attributes, name) {
            if is_identifier_like(value) {
                return vec![value.to_string()];
            }
            return quoted_literals(value);
        }
        if let Some(expr) = attribute_value(attributes, &format!("[{}]", name)) {
            return quoted_literals(expr);
        }
    }
    Vec::new()
}

/// Literal theme alternatives from the theme attribute.
///
/// A static identifier-shaped value is taken as-is; expression values only
/// ever contribute their `'outline'` / `'fill'` literals.
fn theme_candidates(attributes: &[(String, String)]) -> Vec<String> {
    for name in THEME_ATTRIBUTES {
        if let Some(value) = attribute_value(attributes, name) {
            if is_identifier_like(value) {
                return vec![value.to_string()];
            }
            return theme_literals(value);
        }
        if let Some(expr) = attribute_value(attributes, &format!("[{}]", name)) {
            return theme_literals(expr);
        }
    }
    Vec::new()
}

fn theme_literals(expr: &str) -> Vec<String> {
    quoted_literals(expr)
        .into_iter()
        .filter(|theme| theme == "outline" || theme == "fill")
        .collect()
}

/// Every non-empty single-quoted literal inside an expression, in order.
fn quoted_literals(expr: &str) -> Vec<String> {
    QUOTED_LITERAL_REGEX
        .captures_iter(expr)
        .map(|cap| cap[1].to_string())
        .collect()
}
