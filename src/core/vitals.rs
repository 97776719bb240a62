/// Vitals and tolerance rendering — the note's opening and closing
/// sentences.
use crate::schema::vitals::SessionVitals;

/// "Baseline vitals: BP 120/80, HR 72, RR 16, O2 98%." listing only the
/// recorded fields; empty when nothing was recorded.
pub fn render_baseline(vitals: &SessionVitals) -> String {
    let mut parts = Vec::new();
    if let Some(bp) = recorded(&vitals.blood_pressure) {
        parts.push(format!("BP {bp}"));
    }
    if let Some(hr) = recorded(&vitals.heart_rate) {
        parts.push(format!("HR {hr}"));
    }
    if let Some(rr) = recorded(&vitals.resp_rate) {
        parts.push(format!("RR {rr}"));
    }
    if let Some(o2) = recorded(&vitals.oxygen_sat) {
        parts.push(format!("O2 {o2}%"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("Baseline vitals: {}.", parts.join(", "))
    }
}

/// Closing tolerance sentence keyed on the reported pain score.
pub fn render_tolerance(vitals: &SessionVitals) -> String {
    match pain_score(vitals) {
        Some(pain) if pain > 3 => format!(
            "Patient tolerated session with fair endurance; pain reported at {pain}/10 \
             requiring frequent rest breaks."
        ),
        Some(pain) => {
            format!("Patient tolerated session well with pain controlled at {pain}/10.")
        }
        None => "Patient tolerated session well.".to_string(),
    }
}

fn recorded(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A pain entry that does not parse as an integer counts as unrecorded
/// rather than feeding an undefined comparison downstream.
fn pain_score(vitals: &SessionVitals) -> Option<i32> {
    recorded(&vitals.pain)?.parse().ok()
}
