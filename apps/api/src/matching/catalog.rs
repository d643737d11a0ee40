use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Skills recognised when no catalog file is configured.
#[rustfmt::skip]
pub const DEFAULT_SKILLS: &[&str] = &[
    // Programming languages
    "JavaScript", "Python", "Java", "C++", "C#", "PHP", "Ruby", "Go", "TypeScript",
    // Frontend
    "React", "Angular", "Vue", "HTML", "CSS", "Bootstrap", "jQuery", "Redux", "Next.js",
    // Backend
    "Node.js", "Express", "Django", "Flask", "Spring", "Laravel",
    // Databases
    "MongoDB", "MySQL", "PostgreSQL", "SQL", "Redis", "Firebase",
    // Tools
    "Git", "GitHub", "Docker", "AWS", "REST API", "GraphQL",
];

/// Ordered, immutable list of known skill names.
///
/// Built once at startup and shared read-only (`Arc<SkillCatalog>`) across
/// requests. Each entry keeps its display casing; the lowercase form is
/// precomputed for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CatalogEntry {
    name: String,
    lowered: String,
}

impl SkillCatalog {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = skills
            .into_iter()
            .map(|s| {
                let name: String = s.into();
                let lowered = name.to_lowercase();
                CatalogEntry { name, lowered }
            })
            .collect();
        Self { entries }
    }

    /// Loads a catalog from a JSON file holding an array of strings.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill catalog {}", path.display()))?;
        let skills: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("Skill catalog {} is not a JSON string array", path.display()))?;
        Ok(Self::new(skills))
    }

    /// Uses the configured file when present, the built-in list otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// `(display name, lowercase name)` pairs in catalog order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.lowered.as_str()))
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

impl Serialize for SkillCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}
