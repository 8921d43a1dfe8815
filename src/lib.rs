#![forbid(unsafe_code)]
//! Rotacheck — vérification d'une grille de rotation horaire (sans BD).
//!
//! - Grille postes × créneaux d'une heure, cases partagées `AB/CD`.
//! - Fiches équipe : horaires de service et jusqu'à deux pauses repas.
//! - Détection de conflits déterministe, rendue sous forme de messages.
//! - Entrées CSV/JSON, journal des conflits persistant.

pub mod availability;
pub mod checker;
pub mod error;
pub mod grid;
pub mod io;
pub mod model;
pub mod report;
pub mod storage;
pub mod time;

pub use availability::{is_available_at, TimeWindow};
pub use checker::{check_conflict_messages, check_conflicts, Conflict, ConflictKind};
pub use error::RotaError;
pub use grid::{parse_block_label, split_cell, GridOptions, RotationGrid, MAX_BLOCK_MINUTES};
pub use model::{
    AssignmentEntry, Block, Initials, SlotRole, StaffDirectory, StaffProfile, StaffRecord,
};
pub use report::{ReportRenderer, TextReport};
pub use storage::{ConflictLog, JsonStorage, Storage};
pub use time::{format_time, parse_time, TimeOfDay};
