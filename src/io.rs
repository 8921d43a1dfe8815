use crate::checker::Conflict;
use crate::error::RotaError;
use crate::grid::RotationGrid;
use crate::model::StaffRecord;
use anyhow::Context;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de la grille depuis CSV : header `<colonne heure>,<poste>,<poste>...`,
/// puis une ligne par créneau (`"0900 - 1000",RF,AB/CD,...`).
pub fn import_grid_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<RotationGrid> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening grid {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    let positions: Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();
    if positions.is_empty() {
        return Err(RotaError::EmptyGrid.into());
    }

    let mut grid = RotationGrid::new(positions);
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading grid {}", path.display()))?;
        let label = rec.get(0).unwrap_or_default().trim();
        if label.is_empty() {
            continue;
        }
        grid.push_row(label, rec.iter().skip(1));
    }
    Ok(grid)
}

/// Import JSON des fiches équipe (tableau de `StaffRecord`) ; `null` vaut `[]`.
pub fn import_team_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffRecord>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading team {}", path.display()))?;
    let records: Option<Vec<StaffRecord>> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing team {}", path.display()))?;
    Ok(records.unwrap_or_default())
}

/// Import CSV : header `initials,shiftStart,shiftEnd,firstMealStart,firstMealEnd[,secondMealStart,secondMealEnd]`
pub fn import_team_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffRecord>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening team {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        let mut record: StaffRecord =
            rec.with_context(|| format!("reading team {}", path.display()))?;
        // cellule vide = pas de seconde pause
        record.second_meal_start = record.second_meal_start.filter(|s| !s.is_empty());
        record.second_meal_end = record.second_meal_end.filter(|s| !s.is_empty());
        out.push(record);
    }
    Ok(out)
}

/// Choisit l'import selon l'extension (`.csv`, sinon JSON).
pub fn import_team<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffRecord>> {
    let is_csv = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        import_team_csv(path)
    } else {
        import_team_json(path)
    }
}

/// Export CSV des conflits : header `kind,initials,message`
pub fn export_conflicts_csv<P: AsRef<Path>>(path: P, conflicts: &[Conflict]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["kind", "initials", "message"])?;
    for c in conflicts {
        w.write_record([c.kind.as_str(), c.initials.as_str(), c.message.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON des conflits (jolie mise en forme)
pub fn export_conflicts_json<P: AsRef<Path>>(path: P, conflicts: &[Conflict]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(conflicts)?;
    fs::write(path, s)?;
    Ok(())
}
