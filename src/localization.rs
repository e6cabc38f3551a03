//! String catalog for user-facing labels.
//!
//! Lookup falls back to the key itself, so a missing entry renders as its
//! key instead of failing.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A flat key -> label table for one locale.
pub struct Catalog {
    locale: &'static str,
    entries: HashMap<&'static str, &'static str>,
}

impl Catalog {
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Resolve a key to its display string, falling back to the key.
    pub fn resolve<'a>(&self, key: &'a str) -> &'a str {
        self.entries.get(key).copied().unwrap_or(key)
    }
}

static EN: Lazy<Catalog> = Lazy::new(|| Catalog {
    locale: "en",
    entries: HashMap::from([
        ("Close", "Close"),
        ("VersionHistory", "Version History"),
        ("Compare", "Compare"),
        ("FullVersion", "Version"),
        ("Snapshot", "Snapshot"),
        ("Saved", "Saved"),
        ("Author", "Author"),
        ("Note", "Note"),
        ("CompareFrom", "A"),
        ("CompareTo", "B"),
    ]),
});

static ACTIVE: OnceLock<&'static Catalog> = OnceLock::new();

/// Pick the catalog for a locale tag. Unknown locales fall back to English.
pub fn catalog_for(locale: &str) -> &'static Catalog {
    match locale {
        "en" => &EN,
        other => {
            log::warn!("No catalog for locale '{other}', falling back to en");
            &EN
        }
    }
}

/// Install the process-wide catalog. Later calls are ignored.
pub fn init_global(locale: &str) {
    let _ = ACTIVE.set(catalog_for(locale));
}

/// Resolve a key against the active catalog (English when uninitialized).
pub fn tr(key: &str) -> &str {
    ACTIVE.get().copied().unwrap_or(&EN).resolve(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_resolves() {
        assert_eq!(tr("Close"), "Close");
        assert_eq!(tr("VersionHistory"), "Version History");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(tr("NoSuchLabel"), "NoSuchLabel");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let catalog = catalog_for("xx");
        assert_eq!(catalog.locale(), "en");
    }
}
