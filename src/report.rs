use crate::checker::Conflict;

/// Permet de customiser le rendu du bilan (texte, boîte de dialogue, etc.).
pub trait ReportRenderer {
    fn render(&self, conflicts: &[Conflict]) -> String;
}

/// Bilan texte : en-tête puis un conflit par ligne.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, conflicts: &[Conflict]) -> String {
        if conflicts.is_empty() {
            return "No conflicts found.".to_string();
        }
        let lines: Vec<&str> = conflicts.iter().map(|c| c.message.as_str()).collect();
        format!("Conflicts Found:\n\n{}", lines.join("\n"))
    }
}
