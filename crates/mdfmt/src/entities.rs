//! Named character reference normalization for code content.

use std::borrow::Cow;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Named references of five or six ASCII letters, e.g. `&mdash;`
static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&[[:alpha:]]{5,6};").expect("entity pattern is valid"));

/// Replace every reference found in `replacements`; others pass through.
pub fn replace_entities<'t>(text: &'t str, replacements: &IndexMap<String, String>) -> Cow<'t, str> {
    if replacements.is_empty() {
        return Cow::Borrowed(text);
    }

    ENTITY.replace_all(text, |caps: &Captures| {
        let entity = &caps[0];
        replacements
            .get(entity)
            .cloned()
            .unwrap_or_else(|| entity.to_string())
    })
}
