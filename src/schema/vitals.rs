use serde::{Deserialize, Serialize};

/// Session vitals recorded at baseline. `None` (or a blank string) means
/// "not recorded" and the field is omitted from the note, never zeroed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionVitals {
    #[serde(default)]
    pub blood_pressure: Option<String>,
    #[serde(default)]
    pub heart_rate: Option<String>,
    #[serde(default)]
    pub resp_rate: Option<String>,
    #[serde(default)]
    pub oxygen_sat: Option<String>,
    /// Self-reported pain on a 0-10 scale, as entered.
    #[serde(default)]
    pub pain: Option<String>,
}

/// The clinician's qualitative judgment of change from baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressTrend {
    Improved,
    Maintained,
    Declined,
}

impl Default for ProgressTrend {
    fn default() -> Self {
        Self::Maintained
    }
}

impl ProgressTrend {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Improved => "Improved",
            Self::Maintained => "Maintained",
            Self::Declined => "Declined",
        }
    }

    pub fn parse(s: &str) -> Option<ProgressTrend> {
        match s {
            "Improved" => Some(Self::Improved),
            "Maintained" => Some(Self::Maintained),
            "Declined" => Some(Self::Declined),
            _ => None,
        }
    }
}
