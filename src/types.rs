#![forbid(unsafe_code)]

//! Core value types shared by the configuration parser and the template engine

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Value of a single curl option line
///
/// Options written without an argument (e.g. `-s`) are flags; everything
/// else keeps its raw textual value, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Option present with no argument
    Flag,
    /// Option with a verbatim string argument
    Value(String),
}

impl OptionValue {
    /// Returns the string argument, or `None` for a flag
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => None,
            OptionValue::Value(value) => Some(value),
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, OptionValue::Flag)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Value(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Value(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Flag => write!(f, "true"),
            OptionValue::Value(value) => write!(f, "{}", value),
        }
    }
}

/// String-keyed map that iterates in first-insertion order
///
/// Re-inserting an existing key replaces its value but keeps the key at the
/// position where it was first inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts a value, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// Serialized as a map so JSON output keeps insertion order without
// relying on serde_json's preserve_order feature.
impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut map = OrderedMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        map.insert("c", 3);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reinsert_overwrites_in_place() {
        let mut map = OrderedMap::new();
        map.insert("first", "one".to_string());
        map.insert("second", "two".to_string());

        let previous = map.insert("first", "uno".to_string());

        assert_eq!(previous.as_deref(), Some("one"));
        assert_eq!(map.len(), 2);
        let entries: Vec<(&str, &String)> = map.iter().collect();
        assert_eq!(entries[0].0, "first");
        assert_eq!(entries[0].1, "uno");
        assert_eq!(entries[1].0, "second");
    }

    #[test]
    fn test_get_and_contains() {
        let map: OrderedMap<OptionValue> =
            [("-s", OptionValue::Flag), ("-o", OptionValue::from("/dev/null"))]
                .into_iter()
                .collect();

        assert!(map.contains_key("-s"));
        assert!(!map.contains_key("-S"));
        assert_eq!(map.get("-o").and_then(OptionValue::as_str), Some("/dev/null"));
        assert!(map.get("-s").is_some_and(OptionValue::is_flag));
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_empty_map() {
        let map: OrderedMap<String> = OrderedMap::default();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_option_value_display() {
        assert_eq!(OptionValue::Flag.to_string(), "true");
        assert_eq!(OptionValue::from("\"x\"").to_string(), "\"x\"");
    }
}
