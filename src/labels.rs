//! Concept label lookup with language fallback.

use crate::model::ReportData;
use ahash::AHashSet;

/// Standard label role.
pub const STD_ROLE: &str = "std";

const DEFAULT_LANGUAGE: &str = "en";

/// Looks up a concept label for a role and language, falling back through:
/// exact tag, base language (region subtag stripped), the report's default
/// language, then the lexicographically first language carrying that role.
/// A missing label is an absence, never an error, and text is never
/// fabricated.
pub fn label<'a>(
    data: &'a ReportData,
    concept: &str,
    role: &str,
    lang: &str,
) -> Option<&'a str> {
    let labels = data.concepts.get(concept)?.labels.get(role)?;
    if let Some(text) = labels.get(lang) {
        return Some(text);
    }
    if let Some((base, _)) = lang.split_once('-') {
        if let Some(text) = labels.get(base) {
            return Some(text);
        }
    }
    let default = data.default_language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    if let Some(text) = labels.get(default) {
        return Some(text);
    }
    // Deterministic last resort: first available language in tag order.
    let mut tags: Vec<&String> = labels.keys().collect();
    tags.sort_unstable();
    tags.first().and_then(|tag| labels.get(*tag)).map(String::as_str)
}

/// All distinct language tags used by any concept label, plus any declared
/// in the report's language catalog. Set semantics; no defined order.
pub fn available_languages(data: &ReportData) -> AHashSet<String> {
    let mut langs: AHashSet<String> = data.languages.keys().cloned().collect();
    for concept in data.concepts.values() {
        for role_labels in concept.labels.values() {
            for lang in role_labels.keys() {
                langs.insert(lang.clone());
            }
        }
    }
    langs
}
