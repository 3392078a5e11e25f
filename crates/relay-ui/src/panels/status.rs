//! Status panel — service health cards refreshed by the poll loop.

use egui::{self, Align, Layout, RichText, ScrollArea};

use relay_types::api::StatusSnapshot;

use crate::state::{StatusViewState, SERVICES};
use crate::theme::*;

/// Render the status panel. Returns true when the user asks for an
/// immediate refresh.
pub fn status_panel(ui: &mut egui::Ui, state: &StatusViewState, base_url: &str) -> bool {
    let mut refresh = false;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("System Status").color(TEXT_PRIMARY).strong());

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} of {} services online",
                        state.online_count(),
                        StatusSnapshot::SERVICE_COUNT
                    ))
                    .color(TEXT_SECONDARY),
                );
                if let Some(checked) = state.last_checked {
                    ui.label(
                        RichText::new(format!(
                            "Last checked: {}",
                            checked.format("%H:%M:%S")
                        ))
                        .color(TEXT_SECONDARY)
                        .small(),
                    );
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(RichText::new("Refresh").color(ACCENT)).clicked() {
                        refresh = true;
                    }
                });
            });

            ui.separator();

            if let Some(error) = &state.error {
                egui::Frame::default()
                    .fill(ERROR_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("Connection Error").color(ERROR).strong());
                        ui.label(RichText::new(error).color(ERROR).small());
                        ui.label(
                            RichText::new(format!(
                                "Make sure the backend is running at {}",
                                base_url
                            ))
                            .color(TEXT_SECONDARY)
                            .small(),
                        );
                    });
                ui.add_space(6.0);
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let flags = state.snapshot.map(|s| s.flags());
                    for (index, service) in SERVICES.iter().enumerate() {
                        let up = flags.map(|f| f[index]);
                        render_service_card(ui, service.name, service.description, service.port, up);
                        ui.add_space(4.0);
                    }
                });
        });

    refresh
}

fn render_service_card(
    ui: &mut egui::Ui,
    name: &str,
    description: &str,
    port: Option<u16>,
    up: Option<bool>,
) {
    let (dot_color, label, label_color) = match up {
        None => (TEXT_SECONDARY, "Checking...", TEXT_SECONDARY),
        Some(true) => (SUCCESS, "Online", SUCCESS),
        Some(false) => (ERROR, "Offline", ERROR),
    };

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(name).color(TEXT_PRIMARY).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(label).color(label_color).small());
                    ui.label(RichText::new("●").color(dot_color).small());
                });
            });
            ui.label(RichText::new(description).color(TEXT_SECONDARY).small());
            if let Some(port) = port {
                ui.label(
                    RichText::new(format!("Port: {}", port))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            }
        });
}
