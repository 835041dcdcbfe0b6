//! Platform language signal.

use crate::locale::{LocaleTag, DEFAULT_LOCALE_TAG};

/// The user's preferred language as reported by the platform at startup
/// (`navigator.languages` on the web, the OS locale list on desktop).
///
/// Falls back to `en-US` when the platform reports nothing.
pub fn preferred_language() -> LocaleTag {
    first_or_default(crate::i18n::requested_languages().iter().map(|l| l.to_string()))
}

fn first_or_default(mut requested: impl Iterator<Item = String>) -> LocaleTag {
    requested
        .find(|tag| !tag.trim().is_empty())
        .map(LocaleTag::from)
        .unwrap_or_else(|| LocaleTag::from(DEFAULT_LOCALE_TAG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_reported_language_wins() {
        let tag = first_or_default(["fr-FR".to_string(), "en-US".to_string()].into_iter());
        assert_eq!(tag.as_str(), "fr-FR");
    }

    #[test]
    fn empty_report_defaults_to_english() {
        assert_eq!(first_or_default(std::iter::empty()).as_str(), "en-US");
        assert_eq!(
            first_or_default([" ".to_string()].into_iter()).as_str(),
            "en-US"
        );
    }
}
