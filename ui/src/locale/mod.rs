//! Grid locale resolution.
//!
//! A platform language tag (`"fr-FR"`) is normalized to a [`LocaleKey`]
//! (`"frFR"`), looked up in a session [`LocaleCache`] and, on a miss, loaded
//! from a [`LocaleSource`]. Any load failure degrades to the default `enUS`
//! bundle; only a missing default is reported to the caller.

mod bundle;
mod cache;
mod key;
mod resolver;
mod source;

pub use bundle::LocaleBundle;
pub use cache::LocaleCache;
pub use key::{LocaleKey, LocaleTag};
pub use resolver::{LocaleResolver, ResolveError, ResolverConfig, DEFAULT_LOCALE_TAG};
pub use source::{BundleLoader, EmbeddedLocales, LoadError, LocaleSource, StaticLocales};

/// Resolver used by the app: embedded bundles, default configuration.
pub type AppResolver = LocaleResolver<EmbeddedLocales>;

/// Keys of every grid bundle compiled into the binary.
pub fn available_locales() -> Vec<LocaleKey> {
    EmbeddedLocales::available()
}
