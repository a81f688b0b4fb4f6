//! Saaty scale value object for pairwise judgments (1 to 9 intensity scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Language used for scale descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
}

const ENGLISH_DESCRIPTIONS: [&str; 9] = [
    "Equal importance",
    "Weak or slight importance",
    "Moderate importance",
    "Moderate plus importance",
    "Strong importance",
    "Strong plus importance",
    "Very strong importance",
    "Very, very strong importance",
    "Extreme importance",
];

const VIETNAMESE_DESCRIPTIONS: [&str; 9] = [
    "Tầm quan trọng bằng nhau",
    "Tầm quan trọng yếu hoặc nhẹ",
    "Tầm quan trọng vừa phải",
    "Tầm quan trọng vừa phải cộng",
    "Tầm quan trọng mạnh",
    "Tầm quan trọng mạnh cộng",
    "Tầm quan trọng rất mạnh",
    "Tầm quan trọng rất, rất mạnh",
    "Tầm quan trọng cực kỳ",
];

/// Intensity of importance on the Saaty 1-9 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SaatyScale {
    #[default]
    Equal = 1,
    Weak = 2,
    Moderate = 3,
    ModeratePlus = 4,
    Strong = 5,
    StrongPlus = 6,
    VeryStrong = 7,
    VeryVeryStrong = 8,
    Extreme = 9,
}

impl SaatyScale {
    /// All scale values in ascending order.
    pub const ALL: [SaatyScale; 9] = [
        SaatyScale::Equal,
        SaatyScale::Weak,
        SaatyScale::Moderate,
        SaatyScale::ModeratePlus,
        SaatyScale::Strong,
        SaatyScale::StrongPlus,
        SaatyScale::VeryStrong,
        SaatyScale::VeryVeryStrong,
        SaatyScale::Extreme,
    ];

    /// Creates a SaatyScale from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1..=9 => Ok(Self::ALL[usize::from(value) - 1]),
            _ => Err(ValidationError::out_of_range(
                "saaty_scale",
                1,
                9,
                i32::from(value),
            )),
        }
    }

    /// Returns the numeric intensity.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the intensity as a matrix entry.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.value())
    }

    /// Returns the entry for the mirrored comparison (1/value).
    pub fn reciprocal(&self) -> f64 {
        1.0 / self.as_f64()
    }

    /// Returns the description in the requested language.
    pub fn description(&self, language: Language) -> &'static str {
        let table = match language {
            Language::English => &ENGLISH_DESCRIPTIONS,
            Language::Vietnamese => &VIETNAMESE_DESCRIPTIONS,
        };
        table[usize::from(self.value()) - 1]
    }

    /// Matrix entries offered to users when entering a judgment:
    /// 1 through 9 followed by the reciprocals 1/2 through 1/9.
    pub fn judgment_options() -> Vec<f64> {
        Self::ALL
            .iter()
            .map(SaatyScale::as_f64)
            .chain(Self::ALL.iter().skip(1).map(SaatyScale::reciprocal))
            .collect()
    }
}

impl fmt::Display for SaatyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Looks up the description of a scale value; unknown values yield `""`.
pub fn saaty_description(value: i32, language: Language) -> &'static str {
    u8::try_from(value)
        .ok()
        .and_then(|v| SaatyScale::try_from_u8(v).ok())
        .map(|scale| scale.description(language))
        .unwrap_or("")
}
