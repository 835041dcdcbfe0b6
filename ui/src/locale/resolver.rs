use serde::Deserialize;
use thiserror::Error;

use super::{LoadError, LocaleBundle, LocaleCache, LocaleKey, LocaleSource, LocaleTag};

/// Tag whose bundle stands in for any locale that fails to load.
pub const DEFAULT_LOCALE_TAG: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Locale substituted when the requested one cannot be loaded.
    pub default_tag: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_LOCALE_TAG.to_string(),
        }
    }
}

/// The default bundle itself could not be produced; there is nothing left to
/// fall back to.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("default locale `{key}` is unavailable: {source}")]
    DefaultUnavailable {
        key: LocaleKey,
        #[source]
        source: LoadError,
    },
}

/// Resolves language tags to grid bundles, caching every successful load.
///
/// ```ignore
/// let resolver = LocaleResolver::new(EmbeddedLocales, ResolverConfig::default());
/// let bundle = resolver.resolve(&LocaleTag::from("fr-FR")).await?;
/// ```
#[derive(Debug)]
pub struct LocaleResolver<S> {
    source: S,
    cache: LocaleCache,
    default_key: LocaleKey,
}

impl<S: LocaleSource> LocaleResolver<S> {
    pub fn new(source: S, config: ResolverConfig) -> Self {
        Self::with_cache(source, LocaleCache::new(), config)
    }

    /// Build a resolver around an existing cache, e.g. one seeded by
    /// collecting `(LocaleKey, LocaleBundle)` pairs.
    pub fn with_cache(source: S, cache: LocaleCache, config: ResolverConfig) -> Self {
        Self {
            source,
            cache,
            default_key: LocaleKey::normalize(&config.default_tag),
        }
    }

    pub fn cache(&self) -> &LocaleCache {
        &self.cache
    }

    pub fn default_key(&self) -> &LocaleKey {
        &self.default_key
    }

    /// Bundle for `tag`, or the default bundle when `tag` has none.
    ///
    /// Only the default bundle failing to load is reported as an error.
    pub async fn resolve(&self, tag: &LocaleTag) -> Result<LocaleBundle, ResolveError> {
        let key = tag.key();
        match self.load_cached(&key).await {
            Ok(bundle) => Ok(bundle),
            Err(err) if key == self.default_key => Err(self.default_unavailable(err)),
            Err(err) => {
                tracing::warn!(
                    requested = %tag,
                    locale = %key,
                    fallback = %self.default_key,
                    error = %err,
                    "grid locale unavailable; falling back to default"
                );
                self.load_cached(&self.default_key)
                    .await
                    .map_err(|err| self.default_unavailable(err))
            }
        }
    }

    /// Cache lookup, then a load that is cached only when it succeeds.
    async fn load_cached(&self, key: &LocaleKey) -> Result<LocaleBundle, LoadError> {
        if let Some(bundle) = self.cache.get(key) {
            tracing::debug!(locale = %key, "grid locale cache hit");
            return Ok(bundle);
        }

        let bundle = self.source.load(key).await?;
        if bundle.is_empty() {
            return Err(LoadError::Empty(key.clone()));
        }
        tracing::debug!(locale = %key, entries = bundle.len(), "grid locale loaded");
        self.cache.insert(key.clone(), bundle.clone());
        Ok(bundle)
    }

    fn default_unavailable(&self, source: LoadError) -> ResolveError {
        tracing::error!(locale = %self.default_key, error = %source, "default grid locale unavailable");
        ResolveError::DefaultUnavailable {
            key: self.default_key.clone(),
            source,
        }
    }
}
