/// Clinical taxonomy — the activity → phase → subtask hierarchy the
/// selection workflow browses, with suggested deficits per subtask.
///
/// The composer never consults this catalog; it exists so callers can
/// drive a picker and validate their lexicon coverage against it.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A selectable task with the deficit keys most often cited for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskEntry {
    pub name: String,
    pub deficits: Vec<String>,
}

/// A body-region or functional phase within an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseEntry {
    pub id: String,
    pub name: String,
    pub subtasks: Vec<SubtaskEntry>,
}

/// A billable clinical activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalActivity {
    pub id: String,
    /// Display label carrying the code suffix (e.g. "Self-Care (97535)").
    pub label: String,
    pub billing_code: String,
    pub phases: Vec<PhaseEntry>,
}

impl ClinicalActivity {
    /// The label without its parenthetical code suffix.
    pub fn clean_label(&self) -> &str {
        super::unit::strip_label_suffix(&self.label)
    }
}

/// The full activity catalog, in picker display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityCatalog {
    pub activities: Vec<ClinicalActivity>,
}

impl ActivityCatalog {
    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<ActivityCatalog, CatalogError> {
        Self::parse_ron(include_str!("../../data/taxonomy.ron"))
    }

    /// Load a catalog from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<ActivityCatalog, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a catalog from a RON string.
    pub fn parse_ron(input: &str) -> Result<ActivityCatalog, CatalogError> {
        Ok(ron::from_str(input)?)
    }

    pub fn find_activity(&self, id: &str) -> Option<&ClinicalActivity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Every deficit key referenced anywhere in the catalog, deduplicated,
    /// in first-seen order.
    pub fn referenced_deficits(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for activity in &self.activities {
            for phase in &activity.phases {
                for subtask in &phase.subtasks {
                    for deficit in &subtask.deficits {
                        if !seen.contains(&deficit.as_str()) {
                            seen.push(deficit.as_str());
                        }
                    }
                }
            }
        }
        seen
    }
}
