use std::cell::RefCell;
use std::collections::HashMap;

use super::{LocaleBundle, LocaleKey};

/// Session-lifetime store of resolved bundles.
///
/// No eviction and no size bound: entries live as long as the cache. The
/// cache is single-threaded; borrows never outlive a method call, so it is
/// safe to consult between awaits.
#[derive(Debug, Default)]
pub struct LocaleCache {
    entries: RefCell<HashMap<LocaleKey, LocaleBundle>>,
}

impl LocaleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &LocaleKey) -> Option<LocaleBundle> {
        self.entries.borrow().get(key).cloned()
    }

    /// Only the resolver writes, and only bundles it loaded for `key`.
    pub(super) fn insert(&self, key: LocaleKey, bundle: LocaleBundle) {
        debug_assert!(!bundle.is_empty());
        self.entries.borrow_mut().insert(key, bundle);
    }

    pub fn contains(&self, key: &LocaleKey) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Cached keys, sorted.
    pub fn keys(&self) -> Vec<LocaleKey> {
        let mut keys: Vec<_> = self.entries.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Seed a cache with known bundles. Empty bundles are dropped, so a seeded
/// cache never serves one.
impl FromIterator<(LocaleKey, LocaleBundle)> for LocaleCache {
    fn from_iter<I: IntoIterator<Item = (LocaleKey, LocaleBundle)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .filter(|(_, bundle)| !bundle.is_empty())
            .collect();
        Self {
            entries: RefCell::new(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_shared_bundles() {
        let cache = LocaleCache::new();
        let key = LocaleKey::normalize("fr-FR");
        assert!(cache.get(&key).is_none());

        let bundle = LocaleBundle::from_entries([("noRowsLabel", "Pas de résultats")]);
        cache.insert(key.clone(), bundle.clone());

        assert!(cache.contains(&key));
        assert_eq!(cache.get(&key), Some(bundle));
        assert_eq!(cache.keys(), vec![key]);
    }

    #[test]
    fn seeding_drops_empty_bundles() {
        let cache: LocaleCache = [
            (LocaleKey::normalize("es-ES"), LocaleBundle::default()),
            (
                LocaleKey::normalize("de-DE"),
                LocaleBundle::from_entries([("noRowsLabel", "Keine Zeilen")]),
            ),
        ]
        .into_iter()
        .collect();

        assert!(!cache.contains(&LocaleKey::normalize("esES")));
        assert_eq!(cache.keys(), vec![LocaleKey::normalize("deDE")]);
    }
}
