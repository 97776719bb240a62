/// Session state plumbing — unit recording with undo/redo snapshots,
/// billed minutes, and the saved-note archive.
///
/// The composer itself stays pure; this layer owns the mutable state
/// the selection workflow drives and re-invokes the composer on demand.
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::composer::compose;
use crate::core::grouping::billing_codes;
use crate::lexicon::Lexicon;
use crate::schema::unit::TreatmentUnit;
use crate::schema::vitals::{ProgressTrend, SessionVitals};

/// Snapshot depth kept for each of the undo and redo stacks.
const HISTORY_CAPACITY: usize = 64;

pub const CUE_LEVELS: [&str; 4] = ["Min", "Mod", "Max", "Tactile"];
pub const CUE_TYPES: [&str; 4] = ["Verbal", "Visual", "Tactile", "Demo"];
pub const CUE_FOCUS_OPTIONS: [&str; 10] = [
    "Safety",
    "Sequencing",
    "Technique",
    "Balance",
    "Insight",
    "Attention",
    "Initiation",
    "Motor Planning",
    "Problem Solving",
    "Quality of Mvmt",
];

/// Accumulates one session's worth of inputs for the composer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRecorder {
    units: Vec<TreatmentUnit>,
    pub vitals: SessionVitals,
    minutes_by_code: FxHashMap<String, String>,
    pub progress: ProgressTrend,
    #[serde(skip)]
    undo_stack: Vec<Vec<TreatmentUnit>>,
    #[serde(skip)]
    redo_stack: Vec<Vec<TreatmentUnit>>,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[TreatmentUnit] {
        &self.units
    }

    /// Append a confirmed unit, snapshotting the previous list for undo.
    /// Any pending redo history is invalidated.
    pub fn record(&mut self, unit: TreatmentUnit) {
        self.push_undo_snapshot();
        self.redo_stack.clear();
        self.units.push(unit);
    }

    /// Restore the previous unit-list snapshot. Returns false when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                push_bounded(&mut self.redo_stack, std::mem::replace(&mut self.units, previous));
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone snapshot. Returns false when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                push_bounded(&mut self.undo_stack, std::mem::replace(&mut self.units, next));
                true
            }
            None => false,
        }
    }

    pub fn set_minutes(&mut self, billing_code: &str, minutes: &str) {
        self.minutes_by_code
            .insert(billing_code.to_string(), minutes.to_string());
    }

    pub fn minutes(&self, billing_code: &str) -> Option<&str> {
        self.minutes_by_code.get(billing_code).map(String::as_str)
    }

    /// Distinct billing codes in recording order, for minutes entry.
    pub fn billing_codes(&self) -> Vec<&str> {
        billing_codes(&self.units)
    }

    /// Compose the note draft from the current state.
    pub fn compose(&self, lexicon: &Lexicon) -> String {
        compose(
            &self.units,
            &self.vitals,
            &self.minutes_by_code,
            self.progress,
            lexicon,
        )
    }

    /// Clear everything back to a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn push_undo_snapshot(&mut self) {
        push_bounded(&mut self.undo_stack, self.units.clone());
    }
}

fn push_bounded(stack: &mut Vec<Vec<TreatmentUnit>>, snapshot: Vec<TreatmentUnit>) {
    if stack.len() == HISTORY_CAPACITY {
        stack.remove(0);
    }
    stack.push(snapshot);
}

/// A finished note kept for the session archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedNote {
    pub saved_at: DateTime<Utc>,
    /// Up to the first three task names, for list display.
    pub preview: String,
    pub text: String,
}

/// Previously generated notes, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteArchive {
    notes: Vec<SavedNote>,
}

impl NoteArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[SavedNote] {
        &self.notes
    }

    /// Archive the composed text for the recorder's current session.
    pub fn save(&mut self, recorder: &SessionRecorder, text: &str) {
        self.notes.insert(
            0,
            SavedNote {
                saved_at: Utc::now(),
                preview: preview_of(recorder.units()),
                text: text.to_string(),
            },
        );
    }
}

fn preview_of(units: &[TreatmentUnit]) -> String {
    if units.is_empty() {
        return "Unnamed Session".to_string();
    }
    let names: Vec<&str> = units.iter().take(3).map(|u| u.task.as_str()).collect();
    let mut preview = names.join(", ");
    if units.len() > 3 {
        preview.push_str("...");
    }
    preview
}
