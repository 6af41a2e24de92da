//! Attribute collections used while assembling markup.
//!
//! Two collections with deliberately different semantics live here:
//!
//! - [`AttrList`] is an append-only list of `(key, value)` pairs. Duplicates are
//!   allowed while a component is being assembled; only serialization resolves
//!   them, and the *last* occurrence of a key wins.
//! - [`WidgetAttrs`] is a small ordered dictionary handed to a form widget.
//!   Setting an existing key replaces its value in place.

use crate::escape::escape_html;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;

/// Formats one `key="value"` pair with the value escaped.
pub fn format_attr(key: &str, value: &str) -> String {
    format!("{}=\"{}\"", key, escape_html(value))
}

/// Ordered `(key, value)` pairs destined for a rendered tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrList {
    entries: Vec<(String, String)>,
}

impl AttrList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. An earlier pair with the same key is not removed.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The value that serialization would emit for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Resolves duplicate keys: the most recently pushed value of each key is
    /// kept, and kept entries stay in their original relative order.
    pub fn deduplicated(&self) -> Vec<(&str, &str)> {
        let mut seen = HashSet::new();
        let mut kept: Vec<(&str, &str)> = self
            .entries
            .iter()
            .rev()
            .filter(|(key, _)| seen.insert(key.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        kept.reverse();
        kept
    }

    /// Serializes to `key="value"` tokens separated by single spaces.
    pub fn to_html(&self) -> String {
        self.deduplicated()
            .into_iter()
            .map(|(k, v)| format_attr(k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for AttrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = AttrList::new();
        list.extend(iter);
        list
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for AttrList {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.push(k, v);
        }
    }
}

/// Attributes passed to a form widget when it is rendered.
///
/// CSS classes are kept as a token list so components can append to them
/// before they are joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    pub classes: Vec<String>,
    entries: Vec<(String, String)>,
}

impl WidgetAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the class list of a widget's declared attributes.
    ///
    /// Only `class` is carried over; the widget merges its other declared
    /// attributes itself when rendering.
    pub fn from_declared(declared: &BTreeMap<String, String>) -> Self {
        Self {
            classes: declared
                .get("class")
                .map(|c| c.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            entries: Vec::new(),
        }
    }

    /// Sets `key`, replacing an existing value. `class` goes to the token list.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key == "class" {
            self.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }

    /// All attributes in insertion order, `class` first when non-empty.
    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> {
        let class = (!self.classes.is_empty()).then(|| ("class", self.class_string()));
        class
            .into_iter()
            .chain(self.entries.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_duplicate_wins() {
        let mut props = AttrList::new();
        props.push("aria-pressed", "false");
        props.push("aria-pressed", "true");
        assert_eq!(props.to_html(), r#"aria-pressed="true""#);
    }

    #[test]
    fn dedup_keeps_relative_order_of_survivors() {
        let props: AttrList = [("a", "1"), ("b", "2"), ("a", "3"), ("c", "4")]
            .into_iter()
            .collect();
        assert_eq!(props.deduplicated(), vec![("b", "2"), ("a", "3"), ("c", "4")]);
        assert_eq!(props.get("a"), Some("3"));
    }

    #[test]
    fn empty_value_renders_as_empty_attribute() {
        let props: AttrList = [("download", "")].into_iter().collect();
        assert_eq!(props.to_html(), r#"download="""#);
    }

    #[test]
    fn values_are_escaped() {
        let props: AttrList = [("title", r#"Say "hi""#)].into_iter().collect();
        assert_eq!(props.to_html(), r#"title="Say &quot;hi&quot;""#);
    }

    #[test]
    fn widget_attrs_replace_in_place() {
        let declared = BTreeMap::from([("class".to_string(), "wide  tall".to_string())]);
        let mut attrs = WidgetAttrs::from_declared(&declared);
        attrs.set("aria-label", "one");
        attrs.set("required", "true");
        attrs.set("aria-label", "two");
        attrs.add_class("mdc-text-field__input");

        let all: Vec<_> = attrs.iter().collect();
        assert_eq!(
            all,
            vec![
                ("class", "wide tall mdc-text-field__input".to_string()),
                ("aria-label", "two".to_string()),
                ("required", "true".to_string()),
            ]
        );
        assert_eq!(attrs.remove("required").as_deref(), Some("true"));
        assert!(!attrs.contains("required"));
    }
}
