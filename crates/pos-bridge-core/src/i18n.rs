// Localized user-facing messages.
//
// Small static catalog; unknown keys echo back so a missing translation is
// visible rather than fatal.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Locale used when none is specified.
pub const DEFAULT_LOCALE: &str = "en";

type Dictionary = HashMap<&'static str, &'static str>;

fn catalog() -> &'static HashMap<&'static str, Dictionary> {
    static CATALOG: OnceLock<HashMap<&'static str, Dictionary>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut en = Dictionary::new();
        en.insert("Dismiss", "Dismiss");
        en.insert(
            "Failed to print packing slip",
            "Failed to print packing slip",
        );

        let mut es = Dictionary::new();
        es.insert("Dismiss", "Descartar");
        es.insert(
            "Failed to print packing slip",
            "No se pudo imprimir la guía de despacho",
        );

        let mut locales = HashMap::new();
        locales.insert("en", en);
        locales.insert("es", es);
        locales
    })
}

/// Translate a message key in the default locale.
pub fn translate(key: &str) -> String {
    translate_in(DEFAULT_LOCALE, key)
}

/// Translate a message key in a specific locale, falling back to the default
/// locale, then to the key itself.
pub fn translate_in(locale: &str, key: &str) -> String {
    let catalog = catalog();
    catalog
        .get(locale)
        .and_then(|dict| dict.get(key))
        .or_else(|| catalog.get(DEFAULT_LOCALE).and_then(|dict| dict.get(key)))
        .map(|msg| (*msg).to_string())
        .unwrap_or_else(|| key.to_string())
}
