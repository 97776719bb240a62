/// Therapy Session demo — a full inpatient OT session, recorded and composed.
///
/// A mini encounter: vitals → ADL transfers → gait work → minutes → note.
///
/// Run with: cargo run --example therapy_session

use chartnote::lexicon::Lexicon;
use chartnote::schema::taxonomy::ActivityCatalog;
use chartnote::schema::unit::{encode_cue, AssistLevel, TreatmentUnit};
use chartnote::schema::vitals::ProgressTrend;
use chartnote::session::SessionRecorder;

fn main() {
    let lexicon = Lexicon::standard().expect("Failed to load bundled lexicon");
    let catalog = ActivityCatalog::builtin().expect("Failed to load bundled catalog");

    let mut recorder = SessionRecorder::new();

    // --- Baseline vitals ---
    recorder.vitals.blood_pressure = Some("128/82".to_string());
    recorder.vitals.heart_rate = Some("74".to_string());
    recorder.vitals.oxygen_sat = Some("97".to_string());
    recorder.vitals.pain = Some("2".to_string());

    // --- Self-care: toilet transfer with a safety cue ---
    let self_care = catalog.find_activity("SELF_CARE").expect("catalog is missing SELF_CARE");
    recorder.record(TreatmentUnit {
        activity: self_care.label.clone(),
        billing_code: self_care.billing_code.clone(),
        phase: "ADL Transfers".to_string(),
        task: "Toilet transfer".to_string(),
        assist: AssistLevel::MinA,
        cues: vec![encode_cue("Min", "Verbal", &["Safety", "Sequencing"])],
        deficits: vec![
            "safety awareness".to_string(),
            "motor planning".to_string(),
        ],
        params: None,
    });

    // --- Self-care: tub transfer, same phase and assist, merges in ---
    recorder.record(TreatmentUnit {
        activity: self_care.label.clone(),
        billing_code: self_care.billing_code.clone(),
        phase: "ADL Transfers".to_string(),
        task: "Tub/Shower transfer".to_string(),
        assist: AssistLevel::MinA,
        cues: Vec::new(),
        deficits: vec![
            "safety awareness".to_string(),
            "motor planning".to_string(),
        ],
        params: None,
    });

    // --- Gait: weight acceptance with rep params ---
    let gait = catalog.find_activity("GAIT").expect("catalog is missing GAIT");
    recorder.record(TreatmentUnit {
        activity: gait.label.clone(),
        billing_code: gait.billing_code.clone(),
        phase: "Gait Mechanics".to_string(),
        task: "Weight acceptance training".to_string(),
        assist: AssistLevel::Cga,
        cues: vec![encode_cue("Tactile", "Demo", &[])],
        deficits: vec!["antalgic pattern".to_string()],
        params: Some("3x10 ft".to_string()),
    });

    // --- Billing and judgment ---
    recorder.set_minutes("97535", "25");
    recorder.set_minutes("97116", "15");
    recorder.progress = ProgressTrend::Improved;

    println!("=== Generated Note ===\n");
    println!("{}", recorder.compose(&lexicon));
}
