//! Chat panel — message log, provider override row, and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use relay_core::session::{SessionController, TurnRequest};
use relay_types::message::{Message, ProviderId, Role};

use crate::theme::*;

/// Render the chat panel. Returns Some(request) when the user submits a
/// turn; the caller dispatches it.
pub fn chat_panel(ui: &mut egui::Ui, session: &mut SessionController) -> Option<TurnRequest> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Messages area
                let reserved = 110.0;
                let available_height = ui.available_height() - reserved;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if session.messages().is_empty() {
                            ui.add_space(24.0);
                            ui.vertical_centered(|ui| {
                                ui.heading(
                                    RichText::new("What are we working on?").color(TEXT_PRIMARY),
                                );
                                ui.label(
                                    RichText::new(
                                        "Messages are routed to the best provider automatically.",
                                    )
                                    .color(TEXT_SECONDARY),
                                );
                            });
                        }

                        for message in session.messages() {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if session.is_loading() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Thinking...").color(TEXT_SECONDARY));
                            });
                        }

                        if let Some(error) = session.error() {
                            error_banner(ui, error);
                        }
                    });

                ui.add_space(6.0);

                // Provider override row
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Model:").color(TEXT_SECONDARY).small());
                    let auto = session.selected_provider().is_none();
                    if ui.selectable_label(auto, "Auto").clicked() {
                        session.select_provider(None);
                    }
                    for provider in ProviderId::all() {
                        let selected = session.selected_provider() == Some(*provider);
                        if ui.selectable_label(selected, provider.label()).clicked() {
                            session.select_provider(Some(*provider));
                        }
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if session.is_transcribing() {
                            ui.spinner();
                            ui.label(
                                RichText::new("Transcribing...").color(TEXT_SECONDARY).small(),
                            );
                        } else {
                            ui.label(
                                RichText::new("Drop an audio file to transcribe")
                                    .color(TEXT_SECONDARY)
                                    .small()
                                    .italics(),
                            );
                        }
                    });
                });

                if let Some(error) = session.transcribe_error() {
                    error_banner(ui, error);
                }

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::multiline(&mut session.input)
                        .hint_text("Send a message...")
                        .desired_rows(2)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    if session.take_focus_request() {
                        response.request_focus();
                    }

                    let send_enabled =
                        !session.input.trim().is_empty() && !session.is_loading();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Enter submits; Shift+Enter keeps the newline the
                    // edit just inserted.
                    let enter_pressed = response.has_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);

                    if enter_pressed || send_btn.clicked() {
                        if let Some(req) = session.begin_turn() {
                            submitted = Some(req);
                        }
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color) = match message.role {
        Role::User => ("You", USER_LABEL),
        Role::Assistant => ("Relay", ACCENT),
    };

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));

            if let Some(routing) = &message.routing {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(routing.provider.label())
                            .color(provider_color(routing.provider))
                            .small(),
                    );
                    ui.label(RichText::new("•").color(TEXT_SECONDARY).small());
                    ui.label(RichText::new(&routing.reason).color(TEXT_SECONDARY).small());
                });
            }
        });
}

fn error_banner(ui: &mut egui::Ui, error: &str) {
    egui::Frame::default()
        .fill(ERROR_BG)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(error).color(ERROR).small());
        });
}
