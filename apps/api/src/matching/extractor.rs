use crate::matching::catalog::SkillCatalog;

/// Returns every catalog skill whose lowercase form occurs anywhere in the
/// lowercased `text`, in catalog order, each at most once.
///
/// Matching is plain substring containment: no word boundaries, stemming, or
/// synonyms. A short entry such as "Go" therefore also fires inside "Google".
pub fn extract_skills(text: Option<&str>, catalog: &SkillCatalog) -> Vec<String> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    let lower_text = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for (name, lowered) in catalog.entries() {
        if lowered.is_empty() || !lower_text.contains(lowered) {
            continue;
        }
        // Catalogs are expected to be unique, but a user-supplied file may not be.
        if found.iter().any(|f| f.to_lowercase() == lowered) {
            continue;
        }
        found.push(name.to_string());
    }

    found
}
