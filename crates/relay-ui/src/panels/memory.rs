//! Memory panel — browse and search the backend's memory store.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use relay_types::{api::MemoryRecord, event::MemoryMode};

use crate::state::MemoryViewState;
use crate::theme::*;

/// Render the memory panel. Returns Some(mode) when a fetch should be
/// dispatched; the caller performs the request.
pub fn memory_panel(ui: &mut egui::Ui, state: &mut MemoryViewState) -> Option<MemoryMode> {
    let mut fetch = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Memory Bank").color(TEXT_PRIMARY).strong());
            ui.label(
                RichText::new("Browse and search memories stored by past conversations")
                    .color(TEXT_SECONDARY)
                    .small(),
            );

            ui.add_space(6.0);

            // Search row
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut state.query)
                    .hint_text("Search memories...")
                    .desired_width(ui.available_width() - 150.0);
                let response = ui.add(input);

                let searching = state.is_loading();
                let search_btn = ui.add_enabled(
                    !searching,
                    egui::Button::new(
                        RichText::new(if searching { "Searching..." } else { "Search" })
                            .color(TEXT_PRIMARY),
                    )
                    .fill(if searching { BG_SURFACE } else { ACCENT })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(70.0, 0.0)),
                );

                let submitted = (response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter)))
                    || search_btn.clicked();
                if submitted {
                    // An empty query falls back to the full listing.
                    fetch = Some(MemoryViewState::mode_for_query(&state.query));
                }

                if matches!(state.mode, MemoryMode::Search(_)) {
                    if ui.button(RichText::new("Clear").color(TEXT_SECONDARY)).clicked() {
                        fetch = Some(MemoryMode::All);
                    }
                }
            });

            ui.add_space(4.0);

            if let Some(error) = &state.error {
                egui::Frame::default()
                    .fill(ERROR_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(error).color(ERROR).small());
                    });
                ui.add_space(4.0);
            }

            // Results info line
            ui.horizontal(|ui| {
                let info = match &state.mode {
                    MemoryMode::Search(query) => format!(
                        "Found {} memories matching \"{}\"",
                        state.records.len(),
                        query
                    ),
                    MemoryMode::All => format!("{} total memories", state.records.len()),
                };
                ui.label(RichText::new(info).color(TEXT_SECONDARY).small());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let refresh = ui.add_enabled(
                        !state.is_loading(),
                        egui::Button::new(RichText::new("Refresh").color(ACCENT).small()),
                    );
                    if refresh.clicked() {
                        fetch = Some(MemoryMode::All);
                    }
                });
            });

            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if state.is_loading() && state.records.is_empty() {
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            ui.spinner();
                            ui.label(
                                RichText::new("Loading memories...").color(TEXT_SECONDARY),
                            );
                        });
                    } else if state.records.is_empty() {
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("No memories found").color(TEXT_SECONDARY));
                            if matches!(state.mode, MemoryMode::Search(_)) {
                                ui.label(
                                    RichText::new("Try a different search term")
                                        .color(TEXT_SECONDARY)
                                        .small(),
                                );
                            }
                        });
                    } else {
                        for record in &state.records {
                            render_record(ui, record);
                            ui.add_space(4.0);
                        }
                    }
                });
        });

    fetch
}

fn render_record(ui: &mut egui::Ui, record: &MemoryRecord) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(&record.memory).color(TEXT_PRIMARY).small());

            if let Some(score) = record.score {
                ui.label(
                    RichText::new(format!("Relevance: {:.1}%", score * 100.0))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            }

            if let Some(metadata) = &record.metadata {
                if !metadata.is_empty() {
                    ui.horizontal_wrapped(|ui| {
                        for (key, value) in metadata {
                            ui.label(
                                RichText::new(format!("{}: {}", key, display_value(value)))
                                    .color(TEXT_SECONDARY)
                                    .small()
                                    .background_color(BG_SURFACE),
                            );
                        }
                    });
                }
            }
        });
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
