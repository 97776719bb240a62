//! WASM bindings for chartnote — powers the in-browser documentation assistant.

use wasm_bindgen::prelude::*;

use chartnote::lexicon::Lexicon;
use chartnote::schema::taxonomy::ActivityCatalog;
use chartnote::schema::unit::TreatmentUnit;
use chartnote::schema::vitals::{ProgressTrend, SessionVitals};
use chartnote::session::{
    NoteArchive, SessionRecorder, CUE_FOCUS_OPTIONS, CUE_LEVELS, CUE_TYPES,
};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct SavedNoteInfo {
    saved_at: String,
    preview: String,
    text: String,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------
fn parse_trend(s: &str) -> ProgressTrend {
    match s.to_lowercase().as_str() {
        "improved" => ProgressTrend::Improved,
        "declined" => ProgressTrend::Declined,
        _ => ProgressTrend::Maintained,
    }
}

// ---------------------------------------------------------------------------
// NoteSession — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct NoteSession {
    recorder: SessionRecorder,
    archive: NoteArchive,
    lexicon: Lexicon,
    catalog: ActivityCatalog,
}

#[wasm_bindgen]
impl NoteSession {
    /// Create a session backed by the bundled lexicon and catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<NoteSession, JsError> {
        let lexicon = Lexicon::standard()
            .map_err(|e| JsError::new(&format!("Lexicon load error: {e}")))?;
        let catalog = ActivityCatalog::builtin()
            .map_err(|e| JsError::new(&format!("Catalog load error: {e}")))?;
        Ok(NoteSession {
            recorder: SessionRecorder::new(),
            archive: NoteArchive::new(),
            lexicon,
            catalog,
        })
    }

    /// Record a treatment unit described by a JSON string.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "activity": "Self-Care (97535)",
    ///   "billing_code": "97535",
    ///   "phase": "ADL Transfers",
    ///   "task": "Toilet transfer",
    ///   "assist": "Min A",
    ///   "cues": ["Min Verbal (Safety, Sequencing)"],
    ///   "deficits": ["safety awareness", "motor planning"],
    ///   "params": null
    /// }
    /// ```
    pub fn record_unit(&mut self, unit_json: &str) -> Result<(), JsError> {
        let unit: TreatmentUnit = serde_json::from_str(unit_json)
            .map_err(|e| JsError::new(&format!("Invalid unit JSON: {e}")))?;
        self.recorder.record(unit);
        Ok(())
    }

    /// Undo the last unit change. Returns false when there is no history.
    pub fn undo(&mut self) -> bool {
        self.recorder.undo()
    }

    /// Redo the last undone change. Returns false when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        self.recorder.redo()
    }

    pub fn unit_count(&self) -> usize {
        self.recorder.units().len()
    }

    /// Set baseline vitals from a JSON object. Omitted fields count as
    /// unrecorded.
    pub fn set_vitals(&mut self, vitals_json: &str) -> Result<(), JsError> {
        let vitals: SessionVitals = serde_json::from_str(vitals_json)
            .map_err(|e| JsError::new(&format!("Invalid vitals JSON: {e}")))?;
        self.recorder.vitals = vitals;
        Ok(())
    }

    /// Set billed minutes for a billing code, as entered.
    pub fn set_minutes(&mut self, billing_code: &str, minutes: &str) {
        self.recorder.set_minutes(billing_code, minutes);
    }

    /// Set the progress trend by name; unknown names fall back to
    /// "Maintained".
    pub fn set_progress(&mut self, trend: &str) {
        self.recorder.progress = parse_trend(trend);
    }

    /// Distinct billing codes in recording order, as a JSON array.
    pub fn billing_codes(&self) -> String {
        serde_json::to_string(&self.recorder.billing_codes())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// The full activity catalog as JSON, for driving the picker UI.
    pub fn catalog(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.catalog)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Compose the narrative note from the current session state.
    pub fn compose(&self) -> String {
        self.recorder.compose(&self.lexicon)
    }

    /// Compose the current note and archive it.
    pub fn save_note(&mut self) -> String {
        let text = self.recorder.compose(&self.lexicon);
        self.archive.save(&self.recorder, &text);
        text
    }

    /// Archived notes, newest first, as a JSON array.
    pub fn saved_notes(&self) -> Result<String, JsError> {
        let notes: Vec<SavedNoteInfo> = self
            .archive
            .notes()
            .iter()
            .map(|note| SavedNoteInfo {
                saved_at: note.saved_at.to_rfc3339(),
                preview: note.preview.clone(),
                text: note.text.clone(),
            })
            .collect();
        serde_json::to_string(&notes)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Clear the session back to empty. Archived notes are kept.
    pub fn reset(&mut self) {
        self.recorder.reset();
    }

    /// Return JSON array of cue level options.
    pub fn cue_levels() -> String {
        serde_json::to_string(&CUE_LEVELS).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of cue type options.
    pub fn cue_types() -> String {
        serde_json::to_string(&CUE_TYPES).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of cue focus options.
    pub fn cue_focus_options() -> String {
        serde_json::to_string(&CUE_FOCUS_OPTIONS).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of assist level labels, in dependence order.
    pub fn assist_levels() -> String {
        let labels: Vec<&str> = chartnote::schema::unit::AssistLevel::ALL
            .iter()
            .map(|level| level.label())
            .collect();
        serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of progress trend labels.
    pub fn progress_trends() -> String {
        serde_json::to_string(&["Improved", "Maintained", "Declined"])
            .unwrap_or_else(|_| "[]".to_string())
    }
}
