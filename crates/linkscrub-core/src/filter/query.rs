//! Ordered query model: key -> ordered value list.

use url::form_urlencoded;
use url::Url;

/// Query pairs grouped by key.
///
/// Occurrences of the same key (compared case-sensitively) accumulate into
/// one entry, preserving the order of first appearance across keys and the
/// order of values within a key. Denylist decisions lower-case separately;
/// here keys keep their original casing.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct QueryPairs {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryPairs {
    pub(crate) fn from_url(url: &Url) -> Self {
        let mut pairs = QueryPairs::default();
        for (key, value) in url.query_pairs() {
            pairs.push(key.into_owned(), value.into_owned());
        }
        pairs
    }

    fn push(&mut self, key: String, value: String) {
        if let Some((_, values)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            values.push(value);
        } else {
            self.entries.push((key, vec![value]));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry whose key fails `keep`; returns the removed keys,
    /// one per key, in their order of appearance.
    pub(crate) fn retain_keys(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<String> {
        let mut removed = Vec::new();
        self.entries.retain(|(key, _)| {
            if keep(key) {
                true
            } else {
                removed.push(key.clone());
                false
            }
        });
        removed
    }

    /// Deterministic `application/x-www-form-urlencoded` serialization of
    /// the surviving pairs. Stable across repeated parse/encode cycles.
    pub(crate) fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.entries {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}
