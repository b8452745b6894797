//! Common types shared across tools

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every tag the generator knows about, in preview order.
pub const KNOWN_KEYS: [&str; 12] = [
    "title",
    "description",
    "og:url",
    "og:type",
    "og:title",
    "og:description",
    "og:image",
    "twitter:card",
    "twitter:url",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];

/// Keys exposed as editable fields.
pub const EDITABLE_KEYS: [&str; 6] = [
    "title",
    "description",
    "og:url",
    "twitter:url",
    "twitter:title",
    "twitter:description",
];

pub fn is_known_key(key: &str) -> bool {
    KNOWN_KEYS.contains(&key)
}

pub fn is_editable_key(key: &str) -> bool {
    EDITABLE_KEYS.contains(&key)
}

/// Tag name → value mapping.
///
/// Values are replaced, never mutated in place: [`MetaTagSet::with_value`]
/// hands back a new set so earlier snapshots stay valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaTagSet(BTreeMap<String, String>);

impl MetaTagSet {
    /// A set holding every known key with an empty value.
    pub fn empty() -> Self {
        Self(
            KNOWN_KEYS
                .iter()
                .map(|k| (k.to_string(), String::new()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key`, empty when missing.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Copy of this set with `key` set to `value`.
    pub fn with_value(&self, key: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.insert(key, value);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
