// src/ui/result.rs
use eframe::egui;

use crate::model::GapSummary;

pub fn show_result_view(ui: &mut egui::Ui, summary: &GapSummary) {
    ui.heading("Analysis Result");
    ui.add_space(8.0);

    ui.label(
        egui::RichText::new(format!("Match Score: {:.0}%", summary.match_score))
            .size(22.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Missing Keywords:").strong());
    let keywords = serde_json::to_string_pretty(&summary.validated_missing_keywords)
        .unwrap_or_else(|_| "[]".to_string());
    ui.add(
        egui::TextEdit::multiline(&mut keywords.as_str())
            .code_editor()
            .desired_width(f32::INFINITY),
    );

    if !summary.notes.is_empty() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Notes:").strong());
        ui.label(&summary.notes);
    }
}
