/// The composition pipeline: treatment units → note text.
///
/// Wires together vitals rendering, billing-code grouping, sentence
/// synthesis, assessment synthesis, and tolerance rendering. Pure and
/// stateless; callers re-invoke it whenever any input changes.
use rustc_hash::FxHashMap;

use crate::core::assessment::render_assessment;
use crate::core::grouping::partition;
use crate::core::sentence::render_sentence;
use crate::core::vitals::{render_baseline, render_tolerance};
use crate::lexicon::Lexicon;
use crate::schema::unit::TreatmentUnit;
use crate::schema::vitals::{ProgressTrend, SessionVitals};

/// Returned verbatim when no units have been recorded.
pub const EMPTY_SESSION_MESSAGE: &str = "No data entered.";

/// Compose the full narrative note.
///
/// Output sections in order: baseline vitals, one paragraph per billing
/// code (first-seen order), the assessment paragraph, and the tolerance
/// sentence. Non-empty sections are joined with single spaces; each
/// billing-code paragraph carries its own leading blank line.
pub fn compose(
    units: &[TreatmentUnit],
    vitals: &SessionVitals,
    minutes_by_code: &FxHashMap<String, String>,
    progress: ProgressTrend,
    lexicon: &Lexicon,
) -> String {
    if units.is_empty() {
        return EMPTY_SESSION_MESSAGE.to_string();
    }

    let mut parts = vec![render_baseline(vitals)];

    for section in partition(units) {
        let sentences: Vec<String> = section
            .groups
            .iter()
            .enumerate()
            .map(|(index, group)| render_sentence(group, index, lexicon))
            .collect();

        let minutes = minutes_by_code
            .get(&section.billing_code)
            .map(|m| m.trim())
            .filter(|m| !m.is_empty());
        let heading = match minutes {
            Some(minutes) => format!(
                "{} {} ({} mins)",
                section.billing_code, section.activity_label, minutes
            ),
            None => format!("{} {}", section.billing_code, section.activity_label),
        };

        parts.push(format!("\n\n{heading}: {}", sentences.join(" ")));
    }

    parts.push(render_assessment(units, progress, lexicon));
    parts.push(render_tolerance(vitals));

    parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::unit::AssistLevel;

    fn unit(code: &str, activity: &str, task: &str) -> TreatmentUnit {
        TreatmentUnit {
            activity: activity.to_string(),
            billing_code: code.to_string(),
            phase: "phase".to_string(),
            task: task.to_string(),
            assist: AssistLevel::MinA,
            cues: Vec::new(),
            deficits: vec!["safety awareness".to_string()],
            params: None,
        }
    }

    fn lexicon() -> Lexicon {
        Lexicon::standard().unwrap()
    }

    #[test]
    fn empty_units_short_circuit() {
        let vitals = SessionVitals {
            blood_pressure: Some("120/80".to_string()),
            ..Default::default()
        };
        let note = compose(
            &[],
            &vitals,
            &FxHashMap::default(),
            ProgressTrend::Improved,
            &lexicon(),
        );
        assert_eq!(note, EMPTY_SESSION_MESSAGE);
    }

    #[test]
    fn minutes_heading_present_and_absent() {
        let units = vec![unit("97110", "Therapeutic Exercise (97110)", "Isometric holds")];
        let mut minutes = FxHashMap::default();
        minutes.insert("97110".to_string(), "15".to_string());
        let with_minutes = compose(
            &units,
            &SessionVitals::default(),
            &minutes,
            ProgressTrend::Maintained,
            &lexicon(),
        );
        assert!(with_minutes.contains("97110 Therapeutic Exercise (15 mins):"), "{with_minutes}");

        let without = compose(
            &units,
            &SessionVitals::default(),
            &FxHashMap::default(),
            ProgressTrend::Maintained,
            &lexicon(),
        );
        assert!(without.contains("97110 Therapeutic Exercise:"), "{without}");
        assert!(!without.contains("mins"), "{without}");
    }

    #[test]
    fn sections_ordered_vitals_body_assessment_tolerance() {
        let units = vec![unit("97535", "Self-Care (97535)", "Toilet transfer")];
        let vitals = SessionVitals {
            blood_pressure: Some("118/76".to_string()),
            pain: Some("2".to_string()),
            ..Default::default()
        };
        let note = compose(
            &units,
            &vitals,
            &FxHashMap::default(),
            ProgressTrend::Maintained,
            &lexicon(),
        );
        let vitals_at = note.find("Baseline vitals:").unwrap();
        let body_at = note.find("97535 Self-Care:").unwrap();
        let assessment_at = note.find("Assessment:").unwrap();
        let tolerance_at = note.find("pain controlled at 2/10").unwrap();
        assert!(vitals_at < body_at && body_at < assessment_at && assessment_at < tolerance_at);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let units = vec![
            unit("97110", "Therapeutic Exercise (97110)", "Isometric holds"),
            unit("97535", "Self-Care (97535)", "Toilet transfer"),
        ];
        let vitals = SessionVitals {
            heart_rate: Some("70".to_string()),
            ..Default::default()
        };
        let a = compose(&units, &vitals, &FxHashMap::default(), ProgressTrend::Improved, &lexicon());
        let b = compose(&units, &vitals, &FxHashMap::default(), ProgressTrend::Improved, &lexicon());
        assert_eq!(a, b);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let units = vec![unit("97110", "Therapeutic Exercise (97110)", "Isometric holds")];
        let before = units.clone();
        let _ = compose(
            &units,
            &SessionVitals::default(),
            &FxHashMap::default(),
            ProgressTrend::Maintained,
            &lexicon(),
        );
        assert_eq!(units, before);
    }
}
