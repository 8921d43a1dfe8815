use crate::time::{parse_time, TimeOfDay};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Initiales d'un membre de l'équipe (clé unique, toujours en majuscules).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Initials(String);

impl Initials {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fiche équipe telle que saisie (heures "HH:MM" brutes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub initials: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub shift_start: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub shift_end: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub first_meal_start: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub first_meal_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_meal_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_meal_end: Option<String>,
}

/// `null` vaut une saisie vide (heure inconnue, fiche sans initiales).
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl StaffRecord {
    /// `None` si les initiales sont vides : la fiche est écartée.
    pub fn to_profile(&self) -> Option<StaffProfile> {
        let initials = Initials::new(&self.initials);
        if initials.is_empty() {
            return None;
        }
        let optional = |raw: &Option<String>| raw.as_deref().and_then(parse_time);
        Some(StaffProfile {
            initials,
            shift_start: parse_time(&self.shift_start),
            shift_end: parse_time(&self.shift_end),
            meal1_start: parse_time(&self.first_meal_start),
            meal1_end: parse_time(&self.first_meal_end),
            meal2_start: optional(&self.second_meal_start),
            meal2_end: optional(&self.second_meal_end),
        })
    }
}

/// Horaires d'une personne ; `None` = heure absente ou illisible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffProfile {
    pub initials: Initials,
    pub shift_start: Option<TimeOfDay>,
    pub shift_end: Option<TimeOfDay>,
    pub meal1_start: Option<TimeOfDay>,
    pub meal1_end: Option<TimeOfDay>,
    pub meal2_start: Option<TimeOfDay>,
    pub meal2_end: Option<TimeOfDay>,
}

impl StaffProfile {
    /// Profil sans pauses repas.
    pub fn new<S: AsRef<str>>(initials: S, shift_start: &str, shift_end: &str) -> Self {
        Self {
            initials: Initials::new(initials),
            shift_start: parse_time(shift_start),
            shift_end: parse_time(shift_end),
            meal1_start: None,
            meal1_end: None,
            meal2_start: None,
            meal2_end: None,
        }
    }

    pub fn with_first_meal(mut self, start: &str, end: &str) -> Self {
        self.meal1_start = parse_time(start);
        self.meal1_end = parse_time(end);
        self
    }

    pub fn with_second_meal(mut self, start: &str, end: &str) -> Self {
        self.meal2_start = parse_time(start);
        self.meal2_end = parse_time(end);
        self
    }
}

/// Annuaire de l'équipe indexé par initiales.
///
/// L'ordre d'itération est celui de première apparition ; une fiche
/// réécrite garde sa place mais prend les dernières valeurs.
#[derive(Debug, Clone, Default)]
pub struct StaffDirectory {
    profiles: Vec<StaffProfile>,
    index: HashMap<Initials, usize>,
}

impl StaffDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a StaffRecord>,
    {
        records
            .into_iter()
            .filter_map(StaffRecord::to_profile)
            .collect()
    }

    pub fn insert(&mut self, profile: StaffProfile) {
        match self.index.get(&profile.initials) {
            Some(&pos) => self.profiles[pos] = profile,
            None => {
                self.index.insert(profile.initials.clone(), self.profiles.len());
                self.profiles.push(profile);
            }
        }
    }

    pub fn get(&self, initials: &Initials) -> Option<&StaffProfile> {
        self.index.get(initials).map(|&pos| &self.profiles[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &StaffProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<StaffProfile> for StaffDirectory {
    fn from_iter<T: IntoIterator<Item = StaffProfile>>(iter: T) -> Self {
        let mut dir = Self::new();
        for profile in iter {
            dir.insert(profile);
        }
        dir
    }
}

/// Créneau de la grille, intervalle [start, end) en minutes depuis minuit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub label: String,
    pub start: u32,
    pub end: u32,
}

impl Block {
    pub fn new<S: Into<String>>(label: S, start: u32, duration_minutes: u32) -> Self {
        Self {
            label: label.into(),
            start,
            end: start.saturating_add(duration_minutes),
        }
    }

    /// Dernière minute couverte (l'intervalle est ouvert à droite).
    pub fn last_minute(&self) -> u32 {
        self.end.saturating_sub(1).max(self.start)
    }

    pub fn midpoint(&self) -> u32 {
        self.start + self.end.saturating_sub(self.start) / 2
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Place d'une personne dans une case de la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Solo,
    First,
    Middle,
    Last,
}

/// Une personne affectée à un poste pour un créneau.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentEntry {
    pub initials: Initials,
    pub position: String,
    pub block: Block,
    pub slot_index: usize,
    pub slot_count: usize,
}

impl AssignmentEntry {
    /// Affectation seule dans sa case.
    pub fn solo<S: AsRef<str>, P: Into<String>>(initials: S, position: P, block: Block) -> Self {
        Self {
            initials: Initials::new(initials),
            position: position.into(),
            block,
            slot_index: 0,
            slot_count: 1,
        }
    }

    pub fn slot_role(&self) -> SlotRole {
        if self.slot_count <= 1 {
            SlotRole::Solo
        } else if self.slot_index == 0 {
            SlotRole::First
        } else if self.slot_index + 1 >= self.slot_count {
            SlotRole::Last
        } else {
            SlotRole::Middle
        }
    }
}
