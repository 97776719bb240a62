/// Partitioning and duplicate merging — billing-code sections and the
/// composite-key groups inside them.
use rustc_hash::FxHashMap;

use crate::schema::unit::{strip_label_suffix, AssistLevel, TreatmentUnit};

/// Units merged under one composite key within a billing code. Task
/// displays, cues, and deficits are unioned with exact-string dedup,
/// preserving first-seen order.
#[derive(Debug, Clone)]
pub struct MergedGroup {
    pub phase: String,
    pub assist: AssistLevel,
    pub tasks: Vec<String>,
    pub cues: Vec<String>,
    pub deficits: Vec<String>,
}

/// One billing code's worth of merged groups, in first-seen order.
#[derive(Debug, Clone)]
pub struct CodeSection {
    pub billing_code: String,
    /// Activity label of the code's first unit, code suffix stripped.
    pub activity_label: String,
    pub groups: Vec<MergedGroup>,
}

/// Partition units by billing code, then by `(phase, assist, deficit
/// list, params)` within each code. All ordering follows first
/// occurrence in the input, never sort order or map iteration order.
pub fn partition(units: &[TreatmentUnit]) -> Vec<CodeSection> {
    let mut sections: Vec<CodeSection> = Vec::new();
    let mut section_index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut group_index: FxHashMap<(usize, GroupKey), usize> = FxHashMap::default();

    for unit in units {
        let si = match section_index.get(unit.billing_code.as_str()) {
            Some(&si) => si,
            None => {
                sections.push(CodeSection {
                    billing_code: unit.billing_code.clone(),
                    activity_label: strip_label_suffix(&unit.activity).to_string(),
                    groups: Vec::new(),
                });
                let si = sections.len() - 1;
                section_index.insert(unit.billing_code.as_str(), si);
                si
            }
        };

        let key = GroupKey::of(unit);
        let section = &mut sections[si];
        let gi = match group_index.get(&(si, key.clone())) {
            Some(&gi) => gi,
            None => {
                section.groups.push(MergedGroup {
                    phase: unit.phase.clone(),
                    assist: unit.assist,
                    tasks: Vec::new(),
                    cues: Vec::new(),
                    deficits: Vec::new(),
                });
                let gi = section.groups.len() - 1;
                group_index.insert((si, key), gi);
                gi
            }
        };

        let group = &mut section.groups[gi];
        push_unique(&mut group.tasks, unit.task_display());
        for cue in &unit.cues {
            push_unique(&mut group.cues, cue.clone());
        }
        for deficit in &unit.deficits {
            push_unique(&mut group.deficits, deficit.clone());
        }
    }

    sections
}

/// Distinct billing codes in first-occurrence order.
pub fn billing_codes(units: &[TreatmentUnit]) -> Vec<&str> {
    let mut codes = Vec::new();
    for unit in units {
        if !codes.contains(&unit.billing_code.as_str()) {
            codes.push(unit.billing_code.as_str());
        }
    }
    codes
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    phase: String,
    assist: AssistLevel,
    deficits: String,
    params: String,
}

impl GroupKey {
    fn of(unit: &TreatmentUnit) -> GroupKey {
        GroupKey {
            phase: unit.phase.clone(),
            assist: unit.assist,
            deficits: unit.deficits.join("|"),
            params: unit.params.clone().unwrap_or_default(),
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}
