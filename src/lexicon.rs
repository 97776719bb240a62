/// Lexicon — the deficit phrase dictionary and narrative vocabulary.
///
/// Word lists are cycled by positional index, never randomly, so the
/// composer stays deterministic and reproducible for the same input
/// ordering.
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Ordered word lists for sentence synthesis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeVocabulary {
    #[serde(default)]
    pub patient_verbs: Vec<String>,
    #[serde(default)]
    pub therapist_verbs: Vec<String>,
    #[serde(default)]
    pub cause_connectors: Vec<String>,
    #[serde(default)]
    pub effect_connectors: Vec<String>,
    #[serde(default)]
    pub goal_connectors: Vec<String>,
    #[serde(default)]
    pub descriptors: Vec<String>,
}

impl NarrativeVocabulary {
    pub fn patient_verb(&self, index: usize) -> &str {
        cycled(&self.patient_verbs, index)
    }

    pub fn therapist_verb(&self, index: usize) -> &str {
        cycled(&self.therapist_verbs, index)
    }

    pub fn cause(&self, index: usize) -> &str {
        cycled(&self.cause_connectors, index)
    }

    pub fn effect(&self, index: usize) -> &str {
        cycled(&self.effect_connectors, index)
    }

    pub fn goal(&self, index: usize) -> &str {
        cycled(&self.goal_connectors, index)
    }

    pub fn descriptor(&self, index: usize) -> &str {
        cycled(&self.descriptors, index)
    }
}

/// Index-cycled selection. An empty list yields "" so a sparse vocabulary
/// degrades the prose instead of panicking.
fn cycled(list: &[String], index: usize) -> &str {
    if list.is_empty() {
        ""
    } else {
        &list[index % list.len()]
    }
}

/// Read-only lookup tables handed to the composer at call time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    /// Short deficit key → full audit-proof clinical phrase. Keys absent
    /// from the map pass through verbatim (free-text custom deficits).
    pub deficit_phrases: FxHashMap<String, String>,
    pub vocabulary: NarrativeVocabulary,
}

impl Lexicon {
    /// The lexicon bundled with the crate.
    pub fn standard() -> Result<Lexicon, LexiconError> {
        Self::parse_ron(
            include_str!("../data/deficit_phrases.ron"),
            include_str!("../data/vocabulary.ron"),
        )
    }

    /// Load a lexicon from a phrase-map RON file and a vocabulary RON file.
    pub fn load_from_ron(phrases: &Path, vocabulary: &Path) -> Result<Lexicon, LexiconError> {
        let phrases = std::fs::read_to_string(phrases)?;
        let vocabulary = std::fs::read_to_string(vocabulary)?;
        Self::parse_ron(&phrases, &vocabulary)
    }

    /// Parse a lexicon from RON strings.
    pub fn parse_ron(phrases: &str, vocabulary: &str) -> Result<Lexicon, LexiconError> {
        Ok(Lexicon {
            deficit_phrases: ron::from_str(phrases)?,
            vocabulary: ron::from_str(vocabulary)?,
        })
    }

    /// Map a deficit key to its clinical phrase, passing unknown keys
    /// through verbatim.
    pub fn deficit_phrase<'a>(&'a self, key: &'a str) -> &'a str {
        self.deficit_phrases.get(key).map(String::as_str).unwrap_or(key)
    }
}
