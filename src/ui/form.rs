// src/ui/form.rs
use eframe::egui;

use crate::model::JdCategory;
use crate::state::AppState;

pub fn show_form_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Resume");
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::multiline(&mut state.resume_text)
            .hint_text("Paste your resume text here...")
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    ui.heading("Job Description");
    ui.add_space(4.0);

    let entry_count = state.jd_entries.len();
    let mut removed: Option<String> = None;

    for entry in &mut state.jd_entries {
        ui.group(|ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                egui::ComboBox::from_id_source(("jd_category", &entry.id))
                    .selected_text(entry.category.label())
                    .show_ui(ui, |ui| {
                        for category in JdCategory::ALL {
                            ui.selectable_value(&mut entry.category, category, category.label());
                        }
                    });

                // The last remaining entry cannot be removed
                if entry_count > 1 {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✖").clicked() {
                            removed = Some(entry.id.clone());
                        }
                    });
                }
            });

            ui.add(
                egui::TextEdit::multiline(&mut entry.text)
                    .hint_text("Paste JD section text here...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(4.0);
    }

    if let Some(id) = removed {
        state.remove_entry(&id);
    }

    if ui.button("➕ Add JD Section").clicked() {
        state.add_entry();
    }

    ui.add_space(8.0);

    if let Some(error) = &state.error_message {
        ui.colored_label(egui::Color32::RED, error);
        ui.add_space(8.0);
    }

    let label = if state.is_submitting {
        "Analyzing..."
    } else {
        "Analyze"
    };
    let analyze = ui.add_enabled(!state.is_submitting, egui::Button::new(label));
    if analyze.clicked() {
        state.submit_requested = true;
    }
}
