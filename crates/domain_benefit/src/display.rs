//! Localized validity badge text
//!
//! Labels live in Fluent resources under `locales/<lang>/validity.ftl`, one
//! message per canonical validity type plus a shared "limited period"
//! fallback. The resources are parsed once into a plain lookup table so the
//! catalog can be shared across threads.
//!
//! Lookup chain for a requested locale:
//! 1. the full tag as given (`he-IL`)
//! 2. its primary language (`he`)
//! 3. the fallback locale (English)
//! 4. the message key itself

use fluent::{FluentBundle, FluentResource};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::validity::{registry, resolve_canonical};

/// Message key for text shown when the validity type is unknown
pub const LIMITED_PERIOD_KEY: &str = "validity-limited-period";

/// Locale consulted when the requested one has no message
pub const FALLBACK_LOCALE: &str = "en";

const LIMITED_PERIOD_TEXT: &str = "Valid for a limited period";

const BUNDLED_RESOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en/validity.ftl")),
    ("he", include_str!("../locales/he/validity.ftl")),
];

static STANDARD_CATALOG: Lazy<DisplayCatalog> = Lazy::new(DisplayCatalog::standard);

/// The process-wide catalog built from the bundled resources
pub fn catalog() -> &'static DisplayCatalog {
    &STANDARD_CATALOG
}

/// Localized badge text for a raw validity type
///
/// Legacy aliases show their canonical type's label. Unknown or absent
/// types show the "valid for a limited period" text in the requested
/// locale. Never panics.
pub fn get_validity_display_text(validity_type: Option<&str>, locale: &str) -> String {
    catalog().validity_text(validity_type, &[locale])
}

/// Formatted messages keyed by locale, then by message key
#[derive(Debug, Clone, Default)]
pub struct DisplayCatalog {
    messages: HashMap<String, HashMap<String, String>>,
}

impl DisplayCatalog {
    /// Builds the catalog from the resources compiled into the crate
    pub fn standard() -> Self {
        let keys: Vec<&str> = registry()
            .iter()
            .map(|validity| validity.id)
            .chain([LIMITED_PERIOD_KEY])
            .collect();

        Self::from_sources(BUNDLED_RESOURCES, &keys)
    }

    /// Builds a catalog from `(locale, ftl source)` pairs, formatting the
    /// messages named in `keys`
    pub fn from_sources(sources: &[(&str, &str)], keys: &[&str]) -> Self {
        let messages = sources
            .iter()
            .filter_map(|(locale, source)| {
                let locale_id: LanguageIdentifier = match locale.parse() {
                    Ok(id) => id,
                    Err(err) => {
                        warn!(locale, error = %err, "skipping resource with invalid locale tag");
                        return None;
                    }
                };
                Some((locale_id.to_string(), format_messages(locale_id, source, keys)))
            })
            .collect();

        Self { messages }
    }

    /// Locales with at least one message
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Looks up `key` for one locale, trying the full tag then its language
    pub fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        candidate_tags(locale).iter().find_map(|tag| {
            self.messages
                .get(tag)
                .and_then(|messages| messages.get(key))
                .map(String::as_str)
        })
    }

    /// Walks `locales` in order, then the fallback locale
    pub fn lookup_chain(&self, key: &str, locales: &[&str]) -> Option<&str> {
        locales
            .iter()
            .chain([&FALLBACK_LOCALE])
            .find_map(|locale| self.lookup(key, locale))
    }

    /// Label for a message key, falling back to English and then the key
    pub fn label(&self, key: &str, locale: &str) -> String {
        self.lookup_chain(key, &[locale])
            .unwrap_or(key)
            .to_string()
    }

    /// The "valid for a limited period" text
    pub fn limited_period(&self, locales: &[&str]) -> String {
        self.lookup_chain(LIMITED_PERIOD_KEY, locales)
            .unwrap_or(LIMITED_PERIOD_TEXT)
            .to_string()
    }

    /// Badge text for a raw validity type, trying `locales` in order
    pub fn validity_text(&self, validity_type: Option<&str>, locales: &[&str]) -> String {
        match resolve_canonical(validity_type) {
            Some(validity) => self
                .lookup_chain(validity.id, locales)
                .unwrap_or(validity.id)
                .to_string(),
            None => {
                debug!(
                    validity_type = validity_type.unwrap_or("<none>"),
                    "no label for validity type, using limited period text"
                );
                self.limited_period(locales)
            }
        }
    }
}

fn candidate_tags(locale: &str) -> Vec<String> {
    match locale.trim().parse::<LanguageIdentifier>() {
        Ok(id) => {
            let full = id.to_string();
            let language = id.language.as_str().to_string();
            if full == language {
                vec![full]
            } else {
                vec![full, language]
            }
        }
        Err(_) => vec![locale.trim().to_ascii_lowercase()],
    }
}

fn format_messages(
    locale: LanguageIdentifier,
    source: &str,
    keys: &[&str],
) -> HashMap<String, String> {
    let resource = match FluentResource::try_new(source.to_string()) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            warn!(%locale, errors = errors.len(), "locale resource has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(&resource) {
        warn!(%locale, errors = errors.len(), "locale resource has conflicting messages");
    }

    keys.iter()
        .filter_map(|key| {
            let pattern = bundle.get_message(key)?.value()?;
            let mut errors = Vec::new();
            let text = bundle.format_pattern(pattern, None, &mut errors);
            if !errors.is_empty() {
                warn!(%locale, key, "message formatted with errors");
            }
            Some((key.to_string(), text.into_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_locales_loaded() {
        let mut locales: Vec<&str> = catalog().locales().collect();
        locales.sort_unstable();
        assert_eq!(locales, vec!["en", "he"]);
    }

    #[test]
    fn test_every_registry_type_has_a_label_in_each_locale() {
        for validity in registry().iter() {
            assert!(catalog().lookup(validity.id, "en").is_some(), "{}", validity.id);
            assert!(catalog().lookup(validity.id, "he").is_some(), "{}", validity.id);
        }
    }

    #[test]
    fn test_region_tag_falls_back_to_language() {
        assert_eq!(
            catalog().lookup("birthday_exact_date", "he-IL"),
            catalog().lookup("birthday_exact_date", "he")
        );
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(catalog().label("no_such_key", "en"), "no_such_key");
    }

    #[test]
    fn test_custom_sources() {
        let catalog = DisplayCatalog::from_sources(
            &[("fr", "birthday_exact_date = Le jour de votre anniversaire\n")],
            &["birthday_exact_date"],
        );
        assert_eq!(
            catalog.lookup("birthday_exact_date", "fr-CA"),
            Some("Le jour de votre anniversaire")
        );
        assert_eq!(catalog.limited_period(&["fr"]), LIMITED_PERIOD_TEXT);
    }
}
