use crate::model::Initials;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    InvalidShift,
    InvalidFirstMeal,
    InvalidSecondMeal,
    MissingProfile,
    IncompleteCoverage,
    HourStart,
    MidHour,
    HourEnd,
    DoubleBooking,
}

impl ConflictKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictKind::InvalidShift => "invalid_shift",
            ConflictKind::InvalidFirstMeal => "invalid_first_meal",
            ConflictKind::InvalidSecondMeal => "invalid_second_meal",
            ConflictKind::MissingProfile => "missing_profile",
            ConflictKind::IncompleteCoverage => "incomplete_coverage",
            ConflictKind::HourStart => "hour_start",
            ConflictKind::MidHour => "mid_hour",
            ConflictKind::HourEnd => "hour_end",
            ConflictKind::DoubleBooking => "double_booking",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub initials: Initials,
    pub message: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
