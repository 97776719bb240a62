use serde::{Deserialize, Serialize};

/// Ordinal assistance vocabulary, ordered from most to least dependent.
///
/// The order matters only for display grouping and for the assessment
/// decision table's dependence buckets, never numerically.
///
/// Serde uses the spaced clinical labels, which JSON handles both ways
/// but RON accepts only when deserializing; RON serialization rejects
/// the space in the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssistLevel {
    #[serde(rename = "Dep")]
    Dep,
    #[serde(rename = "Max A")]
    MaxA,
    #[serde(rename = "Mod A")]
    ModA,
    #[serde(rename = "Min A")]
    MinA,
    #[serde(rename = "CGA")]
    Cga,
    #[serde(rename = "SBA")]
    Sba,
    #[serde(rename = "Mod I")]
    ModI,
    #[serde(rename = "Indep")]
    Indep,
}

impl AssistLevel {
    /// All levels in dependence order.
    pub const ALL: [AssistLevel; 8] = [
        Self::Dep,
        Self::MaxA,
        Self::ModA,
        Self::MinA,
        Self::Cga,
        Self::Sba,
        Self::ModI,
        Self::Indep,
    ];

    /// The clinical shorthand used in note text (e.g., "Max A").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dep => "Dep",
            Self::MaxA => "Max A",
            Self::ModA => "Mod A",
            Self::MinA => "Min A",
            Self::Cga => "CGA",
            Self::Sba => "SBA",
            Self::ModI => "Mod I",
            Self::Indep => "Indep",
        }
    }

    /// Parse the clinical shorthand back into a level.
    pub fn parse(s: &str) -> Option<AssistLevel> {
        Self::ALL.iter().copied().find(|level| level.label() == s)
    }

    /// Dep / Max A / Mod A — the high-dependence bucket.
    pub fn is_high_dependence(&self) -> bool {
        matches!(self, Self::Dep | Self::MaxA | Self::ModA)
    }

    /// Min A / CGA / SBA — the moderate-dependence bucket.
    pub fn is_moderate_dependence(&self) -> bool {
        matches!(self, Self::MinA | Self::Cga | Self::Sba)
    }

    /// Mod I / Indep — the independence bucket.
    pub fn is_independent(&self) -> bool {
        matches!(self, Self::ModI | Self::Indep)
    }
}

impl std::fmt::Display for AssistLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded instance of a task performed at a specific assistance
/// level, with the deficits and cues that justify skilled intervention.
/// Produced by the selection workflow; consumed read-only by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentUnit {
    /// Display name of the clinical activity (e.g. "Self-Care (97535)").
    pub activity: String,
    /// Billing/procedure code driving paragraph grouping (e.g. "97535").
    pub billing_code: String,
    pub phase: String,
    pub task: String,
    pub assist: AssistLevel,
    /// Bare labels or encoded `"<level> <type> (<focus, ...>)"` strings.
    pub cues: Vec<String>,
    /// Keys into the deficit phrase map, or free-text custom entries.
    pub deficits: Vec<String>,
    /// Free-text modifier such as rep counts, present for exercise codes.
    pub params: Option<String>,
}

impl TreatmentUnit {
    /// Task name with its params suffixed in parentheses, when present.
    pub fn task_display(&self) -> String {
        match self.params.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(params) => format!("{} ({})", self.task, params),
            None => self.task.clone(),
        }
    }
}

/// Build the canonical cue encoding the composer parses back apart:
/// `"Min Verbal (Safety, Sequencing)"`. With no focuses the cue is a
/// bare label and carries no parenthesized suffix.
pub fn encode_cue(level: &str, kind: &str, focuses: &[&str]) -> String {
    if focuses.is_empty() {
        format!("{level} {kind}")
    } else {
        format!("{level} {kind} ({})", focuses.join(", "))
    }
}

/// Strip the parenthetical code suffix from an activity label:
/// "Self-Care (97535)" → "Self-Care".
pub fn strip_label_suffix(label: &str) -> &str {
    label.split(" (").next().unwrap_or(label)
}
