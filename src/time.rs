//! Heures murales "HH:MM" <-> minutes depuis minuit.
//!
//! Une valeur illisible n'est jamais une erreur pour le moteur : elle devient
//! `None` ("heure inconnue") et ne satisfait aucune comparaison.

use crate::error::RotaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendu d'une heure inconnue.
pub const UNKNOWN_TIME: &str = "—";

/// Minutes depuis minuit. Aucune borne n'est imposée au parsing ("25:00" donne 1500).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }
    /// `None` en cas de dépassement.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        hour.checked_mul(60)?.checked_add(minute).map(Self)
    }
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = RotaError;

    /// `"H:MM"` ou `"HH:MM"` ; un éventuel `":SS"` final est ignoré.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RotaError::InvalidTime(s.to_string());
        let (hour, rest) = s.trim().split_once(':').ok_or_else(invalid)?;
        let minute = rest.split(':').next().unwrap_or_default();
        let hour: u32 = hour.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = minute.trim().parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.0 / 60;
        let minute = self.0 % 60;
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hour12}:{minute:02} {suffix}")
    }
}

/// Vide, blanc ou mal formé -> `None`.
pub fn parse_time(text: &str) -> Option<TimeOfDay> {
    text.parse().ok()
}

/// Horloge 12 h avec suffixe AM/PM, `—` pour une heure inconnue.
pub fn format_time(time: Option<TimeOfDay>) -> String {
    match time {
        Some(t) => t.to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}
