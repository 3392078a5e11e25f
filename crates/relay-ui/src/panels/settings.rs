//! Settings panel — backend location and poll cadence.

use egui::{self, RichText};

use relay_types::config::ClientConfig;

use crate::theme::*;

/// Render the settings panel. Returns true when a field changed so the
/// caller can rebuild its adapters.
pub fn settings_panel(ui: &mut egui::Ui, config: &mut ClientConfig) -> bool {
    let mut changed = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Backend").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Base URL").color(TEXT_SECONDARY).small());
            if ui.text_edit_singleline(&mut config.base_url).changed() {
                changed = true;
            }

            ui.add_space(4.0);

            ui.label(
                RichText::new("Status poll interval (seconds)")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            if ui
                .add(egui::Slider::new(&mut config.poll_interval_secs, 5..=300))
                .changed()
            {
                changed = true;
            }
        });

    changed
}
