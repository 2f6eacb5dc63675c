use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use kiosk_core::{Intent, KioskSession, View, FALLBACK_ANSWER};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, input::qualifying_activity, orchestration::run_effect};
use crate::ui::{
    media::MediaCache,
    panels::{self, Screen},
    theme,
};

/// Repaint cadence while something outside the session's timers can change the screen.
const BUSY_REPAINT: Duration = Duration::from_millis(150);

pub struct KioskApp {
    session: KioskSession<'static>,
    media: MediaCache,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    worker_failed: bool,
}

impl KioskApp {
    pub fn new(
        ctx: &egui::Context,
        session: KioskSession<'static>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        theme::apply(ctx);
        Self {
            session,
            media: MediaCache::new(cmd_tx.clone()),
            cmd_tx,
            ui_rx,
            worker_failed: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::AssistantAnswered { ticket, answer } => {
                    self.session.complete_assistant(ticket, answer);
                }
                UiEvent::ImageLoaded { url, image } => self.media.insert_loaded(url, image),
                UiEvent::ImageFailed { url, reason } => self.media.insert_failed(url, &reason),
                UiEvent::WorkerFailed(reason) => {
                    tracing::error!("{reason}");
                    self.worker_failed = true;
                }
            }
        }
    }

    fn render(&mut self, ctx: &egui::Context) -> Vec<Intent> {
        let mut intents = Vec::new();
        let session = &self.session;
        let mut screen = Screen {
            session,
            media: &mut self.media,
            intents: &mut intents,
        };

        match session.view() {
            View::Idle => panels::attract(ctx, &mut screen),
            View::Dashboard => panels::dashboard(ctx, &mut screen),
            View::AwardsWall => panels::awards_wall(ctx, &mut screen),
            View::ProjectDetail { .. } => match session.selected_project() {
                Some(project) => panels::project_detail(ctx, &mut screen, project),
                None => panels::dashboard(ctx, &mut screen),
            },
        }

        if session.is_partner_directory_open() {
            panels::partner_directory(ctx, &mut screen);
        }
        if session.is_assistant_open() {
            panels::assistant(ctx, &mut screen);
        }
        intents
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let busy = self.session.assistant_pending() || self.media.is_loading();
        let until_deadline = self
            .session
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now));
        let delay = match (busy, until_deadline) {
            (true, Some(wait)) => wait.min(BUSY_REPAINT),
            (true, None) => BUSY_REPAINT,
            (false, Some(wait)) => wait,
            (false, None) => return,
        };
        ctx.request_repaint_after(delay);
    }
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let activity = ctx.input(|i| qualifying_activity(&i.events));
        let woke = activity.is_some_and(|activity| self.session.record_activity(activity, now));

        self.process_ui_events();
        if self.worker_failed && self.session.assistant_pending() {
            self.session.abandon_pending_assistant(FALLBACK_ANSWER);
        }
        self.session.tick(now);

        let intents = self.render(ctx);
        // The tap that wakes the kiosk only wakes it.
        if !woke {
            for intent in intents {
                let effect = self.session.dispatch(intent);
                run_effect(&mut self.session, &self.cmd_tx, effect);
            }
        }

        if woke {
            ctx.request_repaint();
        }
        self.schedule_repaint(ctx, now);
    }
}
