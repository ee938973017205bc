//! Attribute blocks (`{#id .class key="value"}`)

use mdfmt_core::Attributes;

use crate::utilities::quote;

/// Format an attribute set as a `{...}` block
///
/// The id comes first, then one `.class` per class name, then every other
/// attribute in insertion order. Returns `None` for an empty set.
pub fn format_attributes(attributes: &Attributes) -> Option<String> {
    if attributes.is_empty() {
        return None;
    }

    let mut tokens = Vec::with_capacity(attributes.len());

    if let Some(id) = attributes.get("id") {
        tokens.push(format!("#{id}"));
    }

    if let Some(class) = attributes.get("class") {
        tokens.extend(class.split_whitespace().map(|name| format!(".{name}")));
    }

    for (name, value) in attributes {
        match name.as_str() {
            "id" | "class" => {}
            _ => tokens.push(format!("{name}={}", quote(value))),
        }
    }

    Some(format!("{{{}}}", tokens.join(" ").trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_attributes(&Attributes::new()), None);
    }

    #[test]
    fn test_id_and_classes_first() {
        let set = attrs(&[
            ("lang", "en"),
            ("class", "note  wide"),
            ("id", "intro"),
        ]);
        assert_eq!(
            format_attributes(&set).as_deref(),
            Some(r#"{#intro .note .wide lang="en"}"#)
        );
    }

    #[test]
    fn test_values_are_quoted() {
        let set = attrs(&[("title", r#"a "b""#)]);
        assert_eq!(
            format_attributes(&set).as_deref(),
            Some(r#"{title="a \"b\""}"#)
        );
    }

    #[test]
    fn test_blank_class_leaves_no_trailing_space() {
        let set = attrs(&[("class", "  ")]);
        assert_eq!(format_attributes(&set).as_deref(), Some("{}"));
    }
}
