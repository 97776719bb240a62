/// Sentence synthesis — one varied sentence per merged group.
///
/// Six rotating clause structures keep a long note from reading as a
/// mechanical template; all word choices cycle by group index so the
/// same input always produces the same prose.
use crate::core::grouping::MergedGroup;
use crate::lexicon::Lexicon;

/// Fallback phrase when a group carries no deficits at all.
const GENERIC_DEFICIT: &str = "functional deficits";

/// How a group's cue segment attaches to its core clause.
#[derive(Debug, Clone, Copy)]
enum CueAttachment {
    /// "..., requiring <cues>."
    Comma,
    /// "... . Required <cues>."
    Separate,
    /// "..., necessitating <cues>."
    Necessitating,
}

/// Render the sentence for a merged group at its position within the
/// billing-code paragraph.
pub fn render_sentence(group: &MergedGroup, index: usize, lexicon: &Lexicon) -> String {
    let vocab = &lexicon.vocabulary;
    let task_list = group.tasks.join(", ");
    let assist = group.assist.label();

    let phrases: Vec<&str> = group
        .deficits
        .iter()
        .map(|d| lexicon.deficit_phrase(d))
        .collect();
    let deficit_text = join_deficits(&phrases);

    // Alternate a descriptor in on even indices to break up repetition.
    let qualified = if index % 2 == 0 {
        let descriptor = vocab.descriptor(index);
        if descriptor.is_empty() {
            deficit_text.clone()
        } else {
            format!("{descriptor} {deficit_text}")
        }
    } else {
        deficit_text.clone()
    };

    let cause = vocab.cause(index);
    let effect = vocab.effect(index);
    let goal = vocab.goal(index);
    let patient_verb = vocab.patient_verb(index);
    let therapist_verb = vocab.therapist_verb(index);

    let cue_text = group
        .cues
        .iter()
        .map(|cue| cue_phrase(cue))
        .collect::<Vec<_>>()
        .join("; ");

    let (base, attachment) = match index % 6 {
        0 => (
            format!("Patient {patient_verb} {task_list} with {assist} {cause} {qualified}"),
            CueAttachment::Comma,
        ),
        1 => (
            format!(
                "{therapist_verb} {task_list} {goal} {deficit_text}; \
                 patient demonstrated {assist} performance"
            ),
            CueAttachment::Separate,
        ),
        2 => (
            format!("{qualified} {effect} {assist} during {task_list}"),
            CueAttachment::Separate,
        ),
        3 => (
            format!("{task_list} completed with {assist} {cause} {qualified}"),
            CueAttachment::Necessitating,
        ),
        4 => (
            format!(
                "Intervention targeted {deficit_text} via {task_list}, \
                 where patient required {assist}"
            ),
            CueAttachment::Comma,
        ),
        _ => (
            format!("Patient executed {task_list} with {assist}, as {qualified} limited independence"),
            CueAttachment::Separate,
        ),
    };

    attach_cues(base, &cue_text, attachment)
}

fn attach_cues(base: String, cues: &str, attachment: CueAttachment) -> String {
    if cues.is_empty() {
        return format!("{base}.");
    }
    match attachment {
        CueAttachment::Comma => format!("{base}, requiring {cues}."),
        CueAttachment::Necessitating => format!("{base}, necessitating {cues}."),
        CueAttachment::Separate => format!("{base}. Required {cues}."),
    }
}

/// Render one cue string. An encoded `"<main> (<focus, ...>)"` cue
/// becomes `"<main> cues for <focus text>"`; anything else, including a
/// malformed encoding missing its closing parenthesis, renders as a
/// bare `"<cue> cues"` label.
fn cue_phrase(cue: &str) -> String {
    if let Some((main, rest)) = cue.split_once(" (") {
        if let Some(raw_focus) = rest.strip_suffix(')') {
            if !raw_focus.trim().is_empty() {
                return format!("{main} cues for {}", join_focuses(raw_focus));
            }
        }
    }
    format!("{cue} cues")
}

/// Lower-case and naturally join a comma-separated focus list. Exactly
/// two joins with a plain "and"; three or more take the Oxford comma.
fn join_focuses(raw: &str) -> String {
    let focuses: Vec<String> = raw.split(", ").map(str::to_lowercase).collect();
    match focuses.len() {
        1 => focuses[0].clone(),
        2 => format!("{} and {}", focuses[0], focuses[1]),
        _ => {
            let (last, head) = focuses.split_last().unwrap_or((&focuses[0], &[]));
            format!("{}, and {}", head.join(", "), last)
        }
    }
}

/// Natural-language deficit list: 0 → the generic fallback, 1 → itself,
/// 2 → "A and B", 3+ → "A, B, and C".
pub(crate) fn join_deficits(phrases: &[&str]) -> String {
    match phrases {
        [] => GENERIC_DEFICIT.to_string(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::unit::AssistLevel;

    fn group(tasks: &[&str], cues: &[&str], deficits: &[&str]) -> MergedGroup {
        MergedGroup {
            phase: "Gait Mechanics".to_string(),
            assist: AssistLevel::MinA,
            tasks: tasks.iter().map(|s| s.to_string()).collect(),
            cues: cues.iter().map(|s| s.to_string()).collect(),
            deficits: deficits.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn lexicon() -> Lexicon {
        Lexicon::standard().unwrap()
    }

    #[test]
    fn deficit_joining_rules() {
        assert_eq!(join_deficits(&[]), "functional deficits");
        assert_eq!(join_deficits(&["A"]), "A");
        assert_eq!(join_deficits(&["A", "B"]), "A and B");
        assert_eq!(join_deficits(&["A", "B", "C"]), "A, B, and C");
    }

    #[test]
    fn encoded_cue_with_two_focuses() {
        assert_eq!(
            cue_phrase("Min Verbal (Safety, Balance)"),
            "Min Verbal cues for safety and balance"
        );
    }

    #[test]
    fn encoded_cue_with_three_focuses_takes_oxford_comma() {
        assert_eq!(
            cue_phrase("Mod Visual (Safety, Sequencing, Attention)"),
            "Mod Visual cues for safety, sequencing, and attention"
        );
    }

    #[test]
    fn bare_cue_label() {
        assert_eq!(cue_phrase("Tactile"), "Tactile cues");
    }

    #[test]
    fn malformed_cue_missing_paren_falls_back_to_bare() {
        assert_eq!(cue_phrase("Min Verbal (Safety"), "Min Verbal (Safety cues");
    }

    #[test]
    fn empty_focus_list_falls_back_to_bare() {
        assert_eq!(cue_phrase("Min Verbal ()"), "Min Verbal () cues");
    }

    #[test]
    fn sentence_without_cues_ends_with_single_period() {
        let g = group(&["Weight acceptance training"], &[], &["antalgic pattern"]);
        for index in 0..6 {
            let sentence = render_sentence(&g, index, &lexicon());
            assert!(sentence.ends_with('.'), "index {index}: {sentence}");
            // The attachment suffixes never appear without cues. The bare
            // word "requiring" can: it is also an effect connector.
            assert!(!sentence.contains(", requiring "), "index {index}: {sentence}");
            assert!(!sentence.contains(". Required "), "index {index}: {sentence}");
            assert!(!sentence.contains(", necessitating "), "index {index}: {sentence}");
        }
    }

    #[test]
    fn structure_zero_is_patient_first() {
        let g = group(&["Toilet transfer"], &[], &["safety awareness"]);
        let sentence = render_sentence(&g, 0, &lexicon());
        assert!(sentence.starts_with("Patient engaged in Toilet transfer with Min A"));
        // Even index: descriptor-qualified deficit phrase.
        assert!(sentence.contains("significant inconsistent safety awareness"));
    }

    #[test]
    fn odd_index_skips_descriptor() {
        let g = group(&["Toilet transfer"], &[], &["safety awareness"]);
        let sentence = render_sentence(&g, 1, &lexicon());
        assert!(!sentence.contains("persistent inconsistent"), "{sentence}");
    }

    #[test]
    fn cue_attachment_styles() {
        let cues = ["Min Verbal (Safety)"];
        let g = group(&["Stair negotiation"], &cues, &["dynamic balance"]);
        let comma = render_sentence(&g, 0, &lexicon());
        assert!(comma.contains(", requiring Min Verbal cues for safety."), "{comma}");
        let separate = render_sentence(&g, 1, &lexicon());
        assert!(separate.ends_with(". Required Min Verbal cues for safety."), "{separate}");
        let necessitating = render_sentence(&g, 3, &lexicon());
        assert!(
            necessitating.contains(", necessitating Min Verbal cues for safety."),
            "{necessitating}"
        );
    }

    #[test]
    fn multiple_cues_join_with_semicolon() {
        let cues = ["Min Verbal (Safety)", "Tactile"];
        let g = group(&["Ramp negotiation"], &cues, &["trunk control"]);
        let sentence = render_sentence(&g, 0, &lexicon());
        assert!(
            sentence.contains("Min Verbal cues for safety; Tactile cues"),
            "{sentence}"
        );
    }

    #[test]
    fn tasks_join_with_commas() {
        let g = group(&["Isometric holds (2x10)", "Concentric reps (2x10)"], &[], &["eccentric control"]);
        let sentence = render_sentence(&g, 3, &lexicon());
        assert!(sentence.starts_with("Isometric holds (2x10), Concentric reps (2x10) completed with"));
    }
}
