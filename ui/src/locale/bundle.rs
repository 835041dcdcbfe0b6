use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

/// Immutable mapping of grid text identifiers to translated strings.
///
/// Clones share the same storage, so handing a bundle to the cache, the view
/// state and the grid costs a reference count bump.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct LocaleBundle {
    entries: Arc<BTreeMap<String, String>>,
}

impl LocaleBundle {
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<BTreeMap<_, _>>()
            .into()
    }

    /// Parse a flat JSON object of `"identifier": "text"` pairs.
    pub fn from_json(raw: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for LocaleBundle {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_json() {
        let raw = r#"{"noRowsLabel":"Pas de résultats","footerRowsPerPage":"Lignes par page :"}"#.as_bytes();
        let bundle = LocaleBundle::from_json(raw).unwrap();
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("noRowsLabel"), Some("Pas de résultats"));
        assert_eq!(bundle.get("missing"), None);
    }

    #[test]
    fn rejects_nested_values() {
        assert!(LocaleBundle::from_json(br#"{"noRowsLabel":{"nested":true}}"#).is_err());
        assert!(LocaleBundle::from_json(b"not json").is_err());
    }

    #[test]
    fn clones_share_storage() {
        let a = LocaleBundle::from_entries([("k", "v")]);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.entries, &b.entries));
        assert_eq!(a, b);
    }
}
