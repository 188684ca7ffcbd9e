//! UV risk classification
//!
//! Thresholds follow Vishay's "Designing the VEML6070 UV Light Sensor Into
//! Applications" note for R_SET = 270 kΩ. The base table is for an integration
//! time of 1 T; the other settings accumulate proportionally more (or less)
//! counts, so their bounds are scaled by the same factor.
//!
//! | Level     | UV index | Counts at 1 T |
//! |-----------|----------|---------------|
//! | Low       | 0-2      | 0-560         |
//! | Moderate  | 3-5      | 561-1120      |
//! | High      | 6-7      | 1121-1494     |
//! | Very high | 8-10     | 1495-2054     |
//! | Extreme   | >= 11    | >= 2055       |
//!
//! The result is an approximation and should not be relied upon for health
//! decisions.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::veml6070::IntegrationTime;

/// UV risk level, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RiskLevel {
    /// UV index 0-2
    Low = 0,
    /// UV index 3-5
    Moderate = 1,
    /// UV index 6-7
    High = 2,
    /// UV index 8-10
    VeryHigh = 3,
    /// UV index 11 and above
    Extreme = 4,
}

impl RiskLevel {
    /// Classify a raw reading taken with the given integration time.
    pub fn classify(raw: u16, integration_time: IntegrationTime) -> Self {
        get_index(raw, integration_time)
    }

    /// Upper-case label, as printed by the `read_uv` tool
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY HIGH",
            Self::Extreme => "EXTREME",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bound (inclusive) of each level above `Low`, in ascending order.
pub type ThresholdTable = [(u16, RiskLevel); 4];

/// Scale a 1 T bound by `num / den`, rounding up so that a count `r` taken at
/// 1/2 T lands on the same level as `2 * r` at 1 T.
const fn scale(bound: u16, num: u16, den: u16) -> u16 {
    (bound * num).div_ceil(den)
}

const fn scaled(num: u16, den: u16) -> ThresholdTable {
    [
        (scale(561, num, den), RiskLevel::Moderate),
        (scale(1121, num, den), RiskLevel::High),
        (scale(1495, num, den), RiskLevel::VeryHigh),
        (scale(2055, num, den), RiskLevel::Extreme),
    ]
}

const TABLE_HALF_T: ThresholdTable = scaled(1, 2);
const TABLE_1_T: ThresholdTable = scaled(1, 1);
const TABLE_2_T: ThresholdTable = scaled(2, 1);
const TABLE_4_T: ThresholdTable = scaled(4, 1);

/// Threshold table for an integration time
pub fn thresholds(integration_time: IntegrationTime) -> &'static ThresholdTable {
    match integration_time {
        IntegrationTime::Half => &TABLE_HALF_T,
        IntegrationTime::One => &TABLE_1_T,
        IntegrationTime::Two => &TABLE_2_T,
        IntegrationTime::Four => &TABLE_4_T,
    }
}

/// Map a raw UV count to its risk level.
///
/// Total over `u16`: anything past the last bound is `Extreme`.
pub fn get_index(raw: u16, integration_time: IntegrationTime) -> RiskLevel {
    thresholds(integration_time)
        .iter()
        .rev()
        .find(|(bound, _)| raw >= *bound)
        .map_or(RiskLevel::Low, |(_, level)| *level)
}
