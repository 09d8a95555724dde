use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::fields::Choice;

/// A categorical intake field. The integer code is what the model sees;
/// the label is for display only.
pub trait Categorical: Copy + Sized + 'static {
    /// Field id this code belongs to (e.g., "education").
    const FIELD: &'static str;

    /// Every level, in code order.
    const ALL: &'static [Self];

    fn code(self) -> u8;

    fn label(self) -> &'static str;

    fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.code() == code)
    }

    /// Levels as form choices.
    fn choices() -> Vec<Choice> {
        Self::ALL
            .iter()
            .map(|level| Choice {
                code: level.code(),
                label: level.label().to_string(),
            })
            .collect()
    }
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident => $field:literal {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $($variant = $code),+
        }

        impl Categorical for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> u8 {
                self as u8
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl TryFrom<u8> for $name {
            type Error = IntakeError;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or_else(|| IntakeError::OutOfDomain {
                    field: $field.to_string(),
                    code: code.to_string(),
                })
            }
        }

        impl From<$name> for u8 {
            fn from(level: $name) -> u8 {
                level.code()
            }
        }
    };
}

categorical! {
    /// Highest completed education.
    Education => "education" {
        PrimaryOrBelow = 0 => "Primary school or below",
        JuniorHigh = 1 => "Junior high school",
        SeniorHigh = 2 => "Senior high / vocational school",
        CollegeOrAbove = 3 => "College or above",
    }
}

categorical! {
    DrinkingStatus => "drinking" {
        Never = 0 => "Does not drink",
        Occasional = 1 => "Occasionally",
        Frequent = 2 => "Frequently",
    }
}

categorical! {
    /// Household monthly income bracket, in local currency.
    HouseholdIncome => "household_income" {
        UpTo2000 = 0 => "0-2000",
        From2001To5000 = 1 => "2001-5000",
        From5001To8000 = 2 => "5001-8000",
        Above8000 = 3 => "8000+",
    }
}

categorical! {
    SmokingStatus => "smoking" {
        Never = 0 => "Does not smoke",
        Occasional = 1 => "Occasionally",
        Frequent = 2 => "Frequently",
    }
}

categorical! {
    /// Self-reported psychological burden after the injury.
    PsychologicalBurden => "psychological_burden" {
        Absent = 0 => "None",
        Slight = 1 => "Slight",
        Moderate = 2 => "Moderate",
        Heavy = 3 => "Heavy",
        Severe = 4 => "Severe",
    }
}

categorical! {
    /// Severity of fear experienced at the time of the trauma.
    TraumaFear => "trauma_fear" {
        Absent = 0 => "None",
        Mild = 1 => "Mild",
        Moderate = 2 => "Moderate",
        Severe = 3 => "Severe",
    }
}
