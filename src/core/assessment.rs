/// Assessment synthesis — aggregate statistics over the whole session
/// and the trend/assist decision table that picks the clinical framing.
use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::lexicon::Lexicon;
use crate::schema::unit::{strip_label_suffix, TreatmentUnit};
use crate::schema::vitals::ProgressTrend;

/// Render the "Assessment: ..." paragraph. Statistics ignore billing-code
/// grouping and run over every unit in its original order.
pub fn render_assessment(
    units: &[TreatmentUnit],
    progress: ProgressTrend,
    lexicon: &Lexicon,
) -> String {
    let modal_assist = modal(units.iter().map(|u| u.assist));
    let assist = modal_assist.map(|a| a.label()).unwrap_or("N/A");

    let deficit = modal(units.iter().flat_map(|u| u.deficits.iter().map(String::as_str)))
        .map(|key| lexicon.deficit_phrase(key))
        .unwrap_or("functional deficits");

    let activity = modal(units.iter().map(|u| u.activity.as_str()))
        .map(strip_label_suffix)
        .unwrap_or("functional tasks");

    let high = modal_assist.is_some_and(|a| a.is_high_dependence());
    let moderate = modal_assist.is_some_and(|a| a.is_moderate_dependence());

    match progress {
        ProgressTrend::Declined => format!(
            "Assessment: Patient demonstrated a decline in {activity} performance versus \
             baseline, primarily exacerbated by {deficit}. Session required pivot to safety \
             instruction and compensatory strategies, with patient requiring {assist} to \
             maintain safety."
        ),
        ProgressTrend::Maintained if high => format!(
            "Assessment: Functional status maintained during {activity}. Patient continues \
             to require {assist} secondary to {deficit}, necessitating skilled intervention \
             to prevent complications and ensure positioning."
        ),
        ProgressTrend::Maintained if moderate => format!(
            "Assessment: Patient maintained baseline during {activity}. {deficit} remains \
             the primary limiting factor, requiring skilled cues to ensure carryover of \
             techniques and prevent regression."
        ),
        ProgressTrend::Maintained => format!(
            "Assessment: Patient maintained baseline functional status in {activity}. Focus \
             remains on consistency and building endurance to mitigate {deficit}."
        ),
        ProgressTrend::Improved if moderate => format!(
            "Assessment: Patient displayed improved functional tolerance during {activity}. \
             Reduced impact of {deficit} allowed for greater independence, though {assist} \
             remains indicated to ensure safety."
        ),
        ProgressTrend::Improved if modal_assist.is_some_and(|a| a.is_independent()) => format!(
            "Assessment: Patient improved from baseline in {activity}, demonstrating \
             increased efficiency. Focus remains on refining mechanics and generalizing \
             skills to novel environments to fully address {deficit}."
        ),
        ProgressTrend::Improved => format!(
            "Assessment: Patient improved participation in {activity}. While {assist} is \
             still required, patient demonstrated improved motor planning and effort, \
             specifically regarding {deficit}."
        ),
    }
}

/// Most frequent key, with ties broken by the first key to reach the
/// winning count while scanning in original order. This keeps output
/// independent of map iteration order.
fn modal<K: Eq + Hash + Copy>(keys: impl Iterator<Item = K>) -> Option<K> {
    let mut counts: FxHashMap<K, usize> = FxHashMap::default();
    let mut best: Option<(K, usize)> = None;
    for key in keys {
        let count = counts.entry(key).or_insert(0);
        *count += 1;
        match best {
            Some((_, n)) if *count <= n => {}
            _ => best = Some((key, *count)),
        }
    }
    best.map(|(key, _)| key)
}
