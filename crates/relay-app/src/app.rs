//! Main egui application — composes the panels and owns dispatch.
//!
//! All network work runs through `spawn_local`; completions come back
//! over the event bus and are folded into the owning state at the top
//! of each frame. The status poll timer lives here, tied to the status
//! tab: entering the tab starts it, leaving the tab drops it.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};
use gloo_timers::callback::Interval;

use relay_core::audio::AudioClip;
use relay_core::event_bus::EventBus;
use relay_core::ports::{ChatPort, MemoryPort, StatusPort, TranscribePort};
use relay_core::session::{SessionController, TurnRequest};
use relay_platform::{
    HttpChatAdapter, HttpMemoryAdapter, HttpStatusAdapter, HttpTranscribeAdapter,
};
use relay_types::config::ClientConfig;
use relay_types::event::{ClientEvent, MemoryMode};
use relay_ui::panels::{chat, memory, settings, status};
use relay_ui::state::{MemoryViewState, StatusViewState};
use relay_ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Chat,
    Status,
    Memory,
}

/// The main application state
pub struct RelayApp {
    config: ClientConfig,
    bus: EventBus,
    session: SessionController,
    status_view: StatusViewState,
    memory_view: MemoryViewState,
    chat: Rc<dyn ChatPort>,
    transcribe: Rc<dyn TranscribePort>,
    status: Rc<dyn StatusPort>,
    memory: Rc<dyn MemoryPort>,
    tab: Tab,
    /// Alive only while the status tab is shown; dropping it cancels
    /// the repeating poll.
    status_timer: Option<Interval>,
    show_settings: bool,
    first_frame: bool,
}

impl RelayApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::default();

        Self {
            bus: EventBus::new(),
            session: SessionController::new(),
            status_view: StatusViewState::new(),
            memory_view: MemoryViewState::new(),
            chat: Rc::new(HttpChatAdapter::new(config.clone())),
            transcribe: Rc::new(HttpTranscribeAdapter::new(config.clone())),
            status: Rc::new(HttpStatusAdapter::new(config.clone())),
            memory: Rc::new(HttpMemoryAdapter::new(config.clone())),
            config,
            tab: Tab::Chat,
            status_timer: None,
            show_settings: false,
            first_frame: true,
        }
    }

    fn rebuild_adapters(&mut self, ctx: &egui::Context) {
        log::info!("backend config changed, rebuilding adapters");
        self.chat = Rc::new(HttpChatAdapter::new(self.config.clone()));
        self.transcribe = Rc::new(HttpTranscribeAdapter::new(self.config.clone()));
        self.status = Rc::new(HttpStatusAdapter::new(self.config.clone()));
        self.memory = Rc::new(HttpMemoryAdapter::new(self.config.clone()));

        // Pick up the new base URL / interval immediately.
        if self.tab == Tab::Status {
            self.start_status_polling(ctx);
        }
    }

    fn set_tab(&mut self, tab: Tab, ctx: &egui::Context) {
        if self.tab == tab {
            return;
        }
        let leaving_status = self.tab == Tab::Status;
        self.tab = tab;

        if leaving_status {
            // No polling after the view goes away.
            self.status_timer = None;
        }

        match tab {
            Tab::Status => self.start_status_polling(ctx),
            Tab::Memory => {
                if !self.memory_view.started {
                    self.memory_view.started = true;
                    self.memory_view.begin_fetch(MemoryMode::All);
                    self.dispatch_memory(MemoryMode::All, ctx);
                }
            }
            Tab::Chat => {}
        }
    }

    /// Poll immediately, then on a fixed interval until the timer is
    /// dropped.
    fn start_status_polling(&mut self, ctx: &egui::Context) {
        self.dispatch_status_poll(ctx);

        let status = self.status.clone();
        let bus = self.bus.clone();
        let ctx = ctx.clone();
        let millis = self.config.poll_interval_secs.max(1) * 1000;
        self.status_timer = Some(Interval::new(millis, move || {
            poll_status(status.clone(), bus.clone(), ctx.clone());
        }));
    }

    fn dispatch_status_poll(&self, ctx: &egui::Context) {
        poll_status(self.status.clone(), self.bus.clone(), ctx.clone());
    }

    /// Dispatch a chat turn (async)
    fn dispatch_chat(&self, req: TurnRequest, ctx: &egui::Context) {
        let chat = self.chat.clone();
        let bus = self.bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match chat.send_turn(&req.content, req.provider).await {
                Ok(reply) => bus.emit(ClientEvent::ReplyReceived {
                    turn: req.turn,
                    text: reply.response,
                    routing: reply.routing,
                }),
                Err(e) => {
                    log::error!("chat turn {} failed: {}", req.turn, e);
                    bus.emit(ClientEvent::TurnFailed {
                        turn: req.turn,
                        message: e.to_string(),
                    });
                }
            }
            ctx.request_repaint();
        });
    }

    /// Upload a validated clip for transcription (async)
    fn dispatch_transcription(&self, clip: AudioClip, ctx: &egui::Context) {
        let transcribe = self.transcribe.clone();
        let bus = self.bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match transcribe.transcribe(&clip).await {
                Ok(text) => bus.emit(ClientEvent::TranscriptReady { text }),
                Err(e) => {
                    log::error!("transcription of {} failed: {}", clip.name, e);
                    bus.emit(ClientEvent::TranscriptFailed {
                        message: e.to_string(),
                    });
                }
            }
            ctx.request_repaint();
        });
    }

    /// Fetch or search memories (async)
    fn dispatch_memory(&self, mode: MemoryMode, ctx: &egui::Context) {
        let memory = self.memory.clone();
        let bus = self.bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = match &mode {
                MemoryMode::All => memory.list_all().await,
                MemoryMode::Search(query) => memory.search(query).await,
            };
            match result {
                Ok(records) => bus.emit(ClientEvent::MemoriesLoaded { mode, records }),
                Err(e) => bus.emit(ClientEvent::MemoriesFailed {
                    message: e.to_string(),
                }),
            }
            ctx.request_repaint();
        });
    }

    /// Audio files dropped anywhere on the window feed transcription.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() || self.tab != Tab::Chat {
            return;
        }

        for file in dropped {
            let Some(bytes) = file.bytes else {
                log::warn!("dropped file {} carried no bytes", file.name);
                continue;
            };
            let clip = AudioClip {
                name: file.name.clone(),
                mime: file.mime.clone(),
                bytes: bytes.to_vec(),
            };
            // Bad type or size fails inline without a network call.
            if self.session.accept_audio(&clip) {
                self.dispatch_transcription(clip, ctx);
            }
        }
    }
}

impl eframe::App for RelayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Fold request completions into the owning state.
        let events = self.bus.drain();
        if !events.is_empty() {
            for event in &events {
                self.session.apply(event);
                self.status_view.apply(event);
                self.memory_view.apply(event);
            }
            ctx.request_repaint();
        }

        if self.session.is_loading()
            || self.session.is_transcribing()
            || self.memory_view.is_loading()
        {
            ctx.request_repaint();
        }

        self.handle_dropped_files(ctx);

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Relay")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();

                let mut clicked = None;
                for (tab, label) in [
                    (Tab::Chat, "Chat"),
                    (Tab::Status, "Status"),
                    (Tab::Memory, "Memory"),
                ] {
                    if ui.selectable_label(self.tab == tab, label).clicked() {
                        clicked = Some(tab);
                    }
                }
                if let Some(tab) = clicked {
                    self.set_tab(tab, ctx);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.show_settings, "Settings")
                        .clicked()
                    {
                        self.show_settings = !self.show_settings;
                    }
                    if self.tab == Tab::Chat && ui.button("New chat").clicked() {
                        self.session.reset();
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.show_settings {
            let mut changed = false;
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    changed = settings::settings_panel(ui, &mut self.config);
                });
            if changed {
                self.rebuild_adapters(ctx);
            }
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Chat => {
                if let Some(req) = chat::chat_panel(ui, &mut self.session) {
                    self.dispatch_chat(req, ctx);
                }
            }
            Tab::Status => {
                if status::status_panel(ui, &self.status_view, &self.config.base_url) {
                    self.dispatch_status_poll(ctx);
                }
            }
            Tab::Memory => {
                if let Some(mode) = memory::memory_panel(ui, &mut self.memory_view) {
                    self.memory_view.begin_fetch(mode.clone());
                    self.dispatch_memory(mode, ctx);
                }
            }
        });
    }
}

fn poll_status(status: Rc<dyn StatusPort>, bus: EventBus, ctx: egui::Context) {
    wasm_bindgen_futures::spawn_local(async move {
        match status.fetch().await {
            Ok(snapshot) => bus.emit(ClientEvent::StatusUpdated { snapshot }),
            Err(e) => {
                log::warn!("status poll failed: {}", e);
                bus.emit(ClientEvent::StatusFailed {
                    message: e.to_string(),
                });
            }
        }
        ctx.request_repaint();
    });
}
