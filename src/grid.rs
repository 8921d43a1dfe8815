//! Grille de rotation : une ligne par créneau, une colonne par poste.
//!
//! Une case peut nommer plusieurs personnes séparées par `/` ; elles se
//! partagent le créneau dans l'ordre de lecture.

use crate::error::RotaError;
use crate::model::{AssignmentEntry, Block, Initials};
use chrono::{NaiveTime, Timelike};

pub const SLOT_DELIMITER: char = '/';

/// Un créneau ne dépasse pas une journée.
pub const MAX_BLOCK_MINUTES: u32 = 24 * 60;

/// Options de lecture de la grille
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Durée d'une ligne de la grille, dans `1..=MAX_BLOCK_MINUTES`.
    pub block_minutes: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { block_minutes: 60 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridRow {
    /// Libellé du créneau, ex. `"0900 - 1000"`.
    pub label: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationGrid {
    pub positions: Vec<String>,
    pub rows: Vec<GridRow>,
}

impl RotationGrid {
    pub fn new<S: Into<String>>(positions: impl IntoIterator<Item = S>) -> Self {
        Self {
            positions: positions.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<L, C, S>(&mut self, label: L, cells: C)
    where
        L: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(GridRow {
            label: label.into(),
            cells: cells.into_iter().map(Into::into).collect(),
        });
    }

    /// Affectations dans l'ordre ligne par ligne, colonne par colonne, puis case.
    ///
    /// Les lignes au libellé illisible sont ignorées.
    pub fn entries(&self, opts: GridOptions) -> Vec<AssignmentEntry> {
        let mut out = Vec::new();
        for row in &self.rows {
            let block = match parse_block_label(&row.label, opts.block_minutes) {
                Ok(b) => b,
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!(label = %row.label, error = %_err, "skipping grid row");
                    continue;
                }
            };
            for (position, cell) in self.positions.iter().zip(&row.cells) {
                let names = split_cell(cell);
                let slot_count = names.len();
                for (slot_index, initials) in names.into_iter().enumerate() {
                    out.push(AssignmentEntry {
                        initials,
                        position: position.clone(),
                        block: block.clone(),
                        slot_index,
                        slot_count,
                    });
                }
            }
        }
        out
    }
}

/// `"HHMM - HHMM"` (ou `"HH:MM - HH:MM"`) ; seul le début compte.
///
/// Une durée nulle ou supérieure à une journée est refusée.
pub fn parse_block_label(label: &str, block_minutes: u32) -> Result<Block, RotaError> {
    if !(1..=MAX_BLOCK_MINUTES).contains(&block_minutes) {
        return Err(RotaError::InvalidBlockLabel(label.to_string()));
    }
    let trimmed = label.trim();
    let start_raw = trimmed.split('-').next().unwrap_or_default().trim();
    let start = NaiveTime::parse_from_str(start_raw, "%H%M")
        .or_else(|_| NaiveTime::parse_from_str(start_raw, "%H:%M"))
        .map_err(|_| RotaError::InvalidBlockLabel(label.to_string()))?;
    let minutes = start.hour() * 60 + start.minute();
    Ok(Block::new(trimmed, minutes, block_minutes))
}

/// Initiales d'une case, nettoyées ; les segments vides disparaissent.
pub fn split_cell(cell: &str) -> Vec<Initials> {
    cell.split(SLOT_DELIMITER)
        .map(Initials::new)
        .filter(|i| !i.is_empty())
        .collect()
}
