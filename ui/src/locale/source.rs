//! Where grid locale bundles come from.
//!
//! A [`LocaleSource`] is the addressable collection of bundles, one per
//! [`LocaleKey`], loaded on demand. Two implementations ship with the crate:
//!
//! - [`EmbeddedLocales`]: `locales/<key>.json` files compiled into the binary
//!   with `rust-embed` and parsed only when first requested.
//! - [`StaticLocales`]: an explicit key → loader table built in code.

use std::collections::BTreeMap;

use rust_embed::Embed;
use thiserror::Error;

use super::{LocaleBundle, LocaleKey};

/// Failure to produce a bundle for one key.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no locale bundle for `{0}`")]
    NotFound(LocaleKey),
    #[error("locale bundle `{key}` is not a flat JSON object of strings: {source}")]
    Malformed {
        key: LocaleKey,
        #[source]
        source: serde_json::Error,
    },
    #[error("locale bundle `{0}` contains no entries")]
    Empty(LocaleKey),
    #[error("failed to load locale bundle `{key}`: {message}")]
    Source { key: LocaleKey, message: String },
}

impl LoadError {
    pub fn key(&self) -> &LocaleKey {
        match self {
            Self::NotFound(key) | Self::Empty(key) => key,
            Self::Malformed { key, .. } | Self::Source { key, .. } => key,
        }
    }
}

/// An addressable collection of locale bundles.
#[allow(async_fn_in_trait)]
pub trait LocaleSource {
    async fn load(&self, key: &LocaleKey) -> Result<LocaleBundle, LoadError>;
}

impl<S: LocaleSource + ?Sized> LocaleSource for &S {
    async fn load(&self, key: &LocaleKey) -> Result<LocaleBundle, LoadError> {
        (**self).load(key).await
    }
}

/// Grid bundles under `ui/locales/`, one `<key>.json` per locale.
#[derive(Embed)]
#[folder = "locales"]
struct GridLocales;

/// Bundles embedded at compile time from `ui/locales/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLocales;

impl EmbeddedLocales {
    /// Keys of every embedded bundle, sorted.
    pub fn available() -> Vec<LocaleKey> {
        let mut keys = GridLocales::iter()
            .filter_map(|path| path.strip_suffix(".json").map(LocaleKey::normalize))
            .collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        keys
    }
}

impl LocaleSource for EmbeddedLocales {
    async fn load(&self, key: &LocaleKey) -> Result<LocaleBundle, LoadError> {
        // An empty key would address `.json`; treat it as simply missing.
        if key.is_empty() {
            return Err(LoadError::NotFound(key.clone()));
        }
        let file = GridLocales::get(&format!("{key}.json"))
            .ok_or_else(|| LoadError::NotFound(key.clone()))?;
        LocaleBundle::from_json(&file.data).map_err(|source| LoadError::Malformed {
            key: key.clone(),
            source,
        })
    }
}

/// Loader for one registered bundle.
pub type BundleLoader = fn() -> Result<LocaleBundle, LoadError>;

/// Explicit key → loader table.
#[derive(Debug, Clone, Default)]
pub struct StaticLocales {
    loaders: BTreeMap<LocaleKey, BundleLoader>,
}

impl StaticLocales {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `loader` under the normalized form of `key`.
    pub fn with(mut self, key: &str, loader: BundleLoader) -> Self {
        self.loaders.insert(LocaleKey::normalize(key), loader);
        self
    }
}

impl LocaleSource for StaticLocales {
    async fn load(&self, key: &LocaleKey) -> Result<LocaleBundle, LoadError> {
        let loader = self
            .loaders
            .get(key)
            .ok_or_else(|| LoadError::NotFound(key.clone()))?;
        loader()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn german() -> Result<LocaleBundle, LoadError> {
        Ok(LocaleBundle::from_entries([("noRowsLabel", "Keine Einträge")]))
    }

    fn broken() -> Result<LocaleBundle, LoadError> {
        Err(LoadError::Source {
            key: LocaleKey::normalize("itIT"),
            message: "chunk failed to load".into(),
        })
    }

    #[test]
    fn embedded_default_bundle_is_present() {
        let available = EmbeddedLocales::available();
        assert!(available.iter().any(|k| k.as_str() == "enUS"));

        let bundle = block_on(EmbeddedLocales.load(&LocaleKey::normalize("en-US"))).unwrap();
        assert!(!bundle.is_empty());
        assert_eq!(bundle.get("noRowsLabel"), Some("No rows"));
    }

    #[test]
    fn embedded_missing_key_is_not_found() {
        let err = block_on(EmbeddedLocales.load(&LocaleKey::normalize("xx-YY"))).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(ref k) if k.as_str() == "xxYY"));

        let err = block_on(EmbeddedLocales.load(&LocaleKey::normalize(""))).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn static_table_dispatches_by_normalized_key() {
        let source = StaticLocales::new()
            .with("de-DE", german)
            .with("itIT", broken);

        let bundle = block_on(source.load(&LocaleKey::normalize("de-de"))).unwrap();
        assert_eq!(bundle.get("noRowsLabel"), Some("Keine Einträge"));

        let err = block_on(source.load(&LocaleKey::normalize("it-IT"))).unwrap_err();
        assert_eq!(err.key().as_str(), "itIT");
        assert!(err.to_string().contains("chunk failed to load"));

        assert!(matches!(
            block_on(source.load(&LocaleKey::normalize("fr-FR"))),
            Err(LoadError::NotFound(_))
        ));
    }
}
