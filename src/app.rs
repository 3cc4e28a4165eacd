// src/app.rs
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use eframe::egui;

use crate::client::{AnalyzeClient, ClientError};
use crate::model::GapSummary;
use crate::state::AppState;

pub struct CareerGapApp {
    state: AppState,
    client: AnalyzeClient,
    // Receiver for the one submission that may be in flight. The busy flag
    // in AppState is advisory UI state; this is the actual channel.
    in_flight: Option<Receiver<Result<GapSummary, ClientError>>>,
}

impl CareerGapApp {
    pub fn new(client: AnalyzeClient) -> Self {
        Self {
            state: AppState::new(),
            client,
            in_flight: None,
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Clear Form").clicked() {
                    self.state = AppState::new();
                    ui.close_menu();
                }
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });
        });
    }

    /// Validates the form and, if it passes, kicks off the single worker
    /// thread for this submission. Validation failures surface inline and
    /// never reach the network.
    fn start_submission(&mut self) {
        if self.state.is_submitting {
            return;
        }

        let request = match self.state.build_request() {
            Ok(request) => request,
            Err(message) => {
                self.state.error_message = Some(message);
                return;
            }
        };

        self.state.error_message = None;
        self.state.result = None;
        self.state.is_submitting = true;

        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        thread::spawn(move || {
            let outcome = client.analyze(&request).map(|r| r.gap_summary);
            let _ = tx.send(outcome);
        });
        self.in_flight = Some(rx);
    }

    fn poll_in_flight(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.in_flight else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = None;
                apply_outcome(&mut self.state, outcome);
            }
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            Err(TryRecvError::Disconnected) => {
                // Worker died without reporting; treat like any other failure
                self.in_flight = None;
                self.state.is_submitting = false;
                self.state.error_message = Some("An error occurred".to_string());
            }
        }
    }
}

/// Folds a finished submission back into the form state.
fn apply_outcome(state: &mut AppState, outcome: Result<GapSummary, ClientError>) {
    state.is_submitting = false;
    match outcome {
        Ok(summary) => {
            state.result = Some(summary);
            state.error_message = None;
        }
        Err(err) => {
            state.error_message = Some(err.to_string());
        }
    }
}

impl eframe::App for CareerGapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_in_flight(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| {
                    crate::ui::form::show_form_view(ui, &mut self.state);

                    if let Some(summary) = &self.state.result {
                        ui.add_space(12.0);
                        ui.separator();
                        ui.add_space(12.0);
                        crate::ui::result::show_result_view(ui, summary);
                    }
                });
        });

        if self.state.submit_requested {
            self.state.submit_requested = false;
            self.start_submission();
        }
    }
}
