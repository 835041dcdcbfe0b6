//! Locale tags and the canonical keys grid bundles are indexed by.

use std::fmt;

use unic_langid::LanguageIdentifier;

/// A platform-reported language/region identifier such as `"fr-FR"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag(String);

impl LocaleTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical bundle key for this tag.
    pub fn key(&self) -> LocaleKey {
        LocaleKey::normalize(&self.0)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocaleTag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Canonical lookup key: the tag with its region separators removed (`"frFR"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleKey(String);

impl LocaleKey {
    /// Normalize any tag (or key) into a `LocaleKey`.
    ///
    /// - `"fr-FR"`, `"fr_FR"` and `"fr-fr"` all map to `"frFR"`.
    /// - Script subtags keep their title case: `"zh-hant-tw"` → `"zhHantTW"`.
    /// - Input without a separator is already canonical and is returned trimmed,
    ///   so `normalize(normalize(x)) == normalize(x)`.
    /// - Tags `unic_langid` rejects still produce a key with the separators
    ///   stripped; nothing here panics.
    pub fn normalize(tag: &str) -> Self {
        let trimmed = tag.trim();
        if !trimmed.contains(is_separator) {
            return Self(trimmed.to_string());
        }

        match trimmed.parse::<LanguageIdentifier>() {
            Ok(langid) => Self(canonical_from_langid(&langid)),
            Err(_) => {
                let stripped: String = trimmed.chars().filter(|c| !is_separator(*c)).collect();
                Self(stripped.trim().to_string())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&LocaleTag> for LocaleKey {
    fn from(tag: &LocaleTag) -> Self {
        tag.key()
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_')
}

fn canonical_from_langid(langid: &LanguageIdentifier) -> String {
    let mut key = langid.language.as_str().to_string();
    if let Some(script) = langid.script {
        key.push_str(script.as_str());
    }
    if let Some(region) = langid.region {
        key.push_str(region.as_str());
    }
    // Variants are rare in browser tags; keep them so distinct tags stay distinct.
    for variant in langid.variants() {
        key.push_str(variant.as_str());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_region_separator() {
        assert_eq!(LocaleKey::normalize("en-US").as_str(), "enUS");
        assert_eq!(LocaleKey::normalize("pt_BR").as_str(), "ptBR");
    }

    #[test]
    fn canonicalizes_case_through_langid() {
        assert_eq!(LocaleKey::normalize("fr-fr").as_str(), "frFR");
        assert_eq!(LocaleKey::normalize("DE-de").as_str(), "deDE");
        assert_eq!(LocaleKey::normalize("zh-hant-tw").as_str(), "zhHantTW");
    }

    #[test]
    fn canonical_keys_pass_through() {
        for key in ["enUS", "frFR", "zhHantTW", "fr"] {
            assert_eq!(LocaleKey::normalize(key).as_str(), key);
        }
    }

    #[test]
    fn malformed_tags_still_produce_a_key() {
        assert_eq!(LocaleKey::normalize("").as_str(), "");
        assert_eq!(LocaleKey::normalize("   ").as_str(), "");
        assert_eq!(LocaleKey::normalize("-").as_str(), "");
        assert_eq!(LocaleKey::normalize("not a-tag!").as_str(), "not atag!");
    }

    #[test]
    fn tag_key_matches_normalize() {
        let tag = LocaleTag::from(" es-ES ");
        assert_eq!(tag.key(), LocaleKey::normalize("es-ES"));
    }
}
