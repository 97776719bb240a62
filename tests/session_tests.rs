/// Session integration tests — the recorder workflow end to end.

use chartnote::lexicon::Lexicon;
use chartnote::schema::taxonomy::ActivityCatalog;
use chartnote::schema::unit::{encode_cue, AssistLevel, TreatmentUnit};
use chartnote::schema::vitals::ProgressTrend;
use chartnote::session::{NoteArchive, SessionRecorder, CUE_FOCUS_OPTIONS, CUE_LEVELS, CUE_TYPES};

fn unit_from_catalog(
    catalog: &ActivityCatalog,
    activity_id: &str,
    phase_name: &str,
    task: &str,
    assist: AssistLevel,
) -> TreatmentUnit {
    let activity = catalog.find_activity(activity_id).unwrap();
    let phase = activity
        .phases
        .iter()
        .find(|p| p.name == phase_name)
        .unwrap();
    let subtask = phase.subtasks.iter().find(|s| s.name == task).unwrap();
    TreatmentUnit {
        activity: activity.label.clone(),
        billing_code: activity.billing_code.clone(),
        phase: phase.name.clone(),
        task: subtask.name.clone(),
        assist,
        cues: Vec::new(),
        deficits: subtask.deficits.clone(),
        params: None,
    }
}

#[test]
fn full_session_from_catalog_to_note() {
    let catalog = ActivityCatalog::builtin().unwrap();
    let lexicon = Lexicon::standard().unwrap();
    let mut recorder = SessionRecorder::new();

    let mut transfer = unit_from_catalog(
        &catalog,
        "SELF_CARE",
        "ADL Transfers",
        "Toilet transfer",
        AssistLevel::MinA,
    );
    transfer
        .cues
        .push(encode_cue("Min", "Verbal", &["Safety", "Sequencing"]));
    recorder.record(transfer);
    recorder.record(unit_from_catalog(
        &catalog,
        "GAIT",
        "Gait Mechanics",
        "Weight acceptance training",
        AssistLevel::Cga,
    ));

    recorder.vitals.blood_pressure = Some("124/78".to_string());
    recorder.vitals.pain = Some("2".to_string());
    recorder.set_minutes("97535", "25");
    recorder.set_minutes("97116", "15");
    recorder.progress = ProgressTrend::Improved;

    let note = recorder.compose(&lexicon);

    assert!(note.starts_with("Baseline vitals: BP 124/78."), "{note}");
    assert!(note.contains("97535 Self-Care (25 mins):"), "{note}");
    assert!(note.contains("97116 Gait Training (15 mins):"), "{note}");
    assert!(
        note.contains("Min Verbal cues for safety and sequencing"),
        "{note}"
    );
    assert!(note.contains("Assessment:"), "{note}");
    assert!(note.ends_with("pain controlled at 2/10."), "{note}");
}

#[test]
fn undo_removes_a_paragraph_and_redo_restores_it() {
    let catalog = ActivityCatalog::builtin().unwrap();
    let lexicon = Lexicon::standard().unwrap();
    let mut recorder = SessionRecorder::new();

    recorder.record(unit_from_catalog(
        &catalog,
        "SELF_CARE",
        "ADL Transfers",
        "Toilet transfer",
        AssistLevel::MinA,
    ));
    recorder.record(unit_from_catalog(
        &catalog,
        "GAIT",
        "Gait Mechanics",
        "Weight acceptance training",
        AssistLevel::Cga,
    ));

    let full = recorder.compose(&lexicon);
    assert!(full.contains("97116 Gait Training"), "{full}");

    assert!(recorder.undo());
    let shorter = recorder.compose(&lexicon);
    assert!(!shorter.contains("97116 Gait Training"), "{shorter}");
    assert!(shorter.contains("97535 Self-Care"), "{shorter}");

    assert!(recorder.redo());
    assert_eq!(recorder.compose(&lexicon), full);
}

#[test]
fn billing_codes_track_recording_order() {
    let catalog = ActivityCatalog::builtin().unwrap();
    let mut recorder = SessionRecorder::new();
    recorder.record(unit_from_catalog(
        &catalog,
        "GAIT",
        "Gait Mechanics",
        "Weight acceptance training",
        AssistLevel::Cga,
    ));
    recorder.record(unit_from_catalog(
        &catalog,
        "SELF_CARE",
        "ADL Transfers",
        "Toilet transfer",
        AssistLevel::MinA,
    ));
    recorder.record(unit_from_catalog(
        &catalog,
        "GAIT",
        "Functional Ambulation",
        "Multi-directional turns",
        AssistLevel::Cga,
    ));
    assert_eq!(recorder.billing_codes(), vec!["97116", "97535"]);
}

#[test]
fn saved_notes_keep_text_and_preview() {
    let catalog = ActivityCatalog::builtin().unwrap();
    let lexicon = Lexicon::standard().unwrap();
    let mut recorder = SessionRecorder::new();
    let mut archive = NoteArchive::new();

    recorder.record(unit_from_catalog(
        &catalog,
        "SELF_CARE",
        "Grooming & Hygiene",
        "Oral hygiene",
        AssistLevel::Sba,
    ));
    let text = recorder.compose(&lexicon);
    archive.save(&recorder, &text);

    recorder.reset();
    recorder.record(unit_from_catalog(
        &catalog,
        "GAIT",
        "Gait Mechanics",
        "Swing phase initiation",
        AssistLevel::ModA,
    ));
    let text = recorder.compose(&lexicon);
    archive.save(&recorder, &text);

    assert_eq!(archive.notes().len(), 2);
    assert_eq!(archive.notes()[0].preview, "Swing phase initiation");
    assert_eq!(archive.notes()[1].preview, "Oral hygiene");
    assert!(archive.notes()[1].text.contains("97535 Self-Care"));
}

#[test]
fn cue_pickers_cover_the_encoding_vocabulary() {
    assert_eq!(CUE_LEVELS.len(), 4);
    assert_eq!(CUE_TYPES.len(), 4);
    assert_eq!(CUE_FOCUS_OPTIONS.len(), 10);
    assert!(CUE_FOCUS_OPTIONS.contains(&"Quality of Mvmt"));
    // Every picker combination encodes and parses back to a focus phrase.
    let cue = encode_cue(CUE_LEVELS[0], CUE_TYPES[0], &[CUE_FOCUS_OPTIONS[0]]);
    assert_eq!(cue, "Min Verbal (Safety)");
}
