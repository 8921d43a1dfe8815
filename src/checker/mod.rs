mod conflicts;
mod types;
mod util;

pub use types::{Conflict, ConflictKind};

use crate::model::{AssignmentEntry, StaffDirectory};

/// Vérifie une grille contre l'annuaire de l'équipe.
///
/// Ordre du résultat : anomalies de fiches (ordre de l'annuaire), puis
/// affectations (ordre de la grille), puis doubles affectations.
/// Les entrées ne sont jamais modifiées.
pub fn check_conflicts(entries: &[AssignmentEntry], staff: &StaffDirectory) -> Vec<Conflict> {
    let out = conflicts::detect_conflicts(entries, staff);

    #[cfg(feature = "logging")]
    tracing::debug!(
        entries = entries.len(),
        profiles = staff.len(),
        conflicts = out.len(),
        "rotation checked"
    );

    out
}

/// Variante texte : uniquement les messages, dans le même ordre.
pub fn check_conflict_messages(entries: &[AssignmentEntry], staff: &StaffDirectory) -> Vec<String> {
    check_conflicts(entries, staff)
        .into_iter()
        .map(|c| c.message)
        .collect()
}
