//! Kiosk view/session state machine.
//!
//! One [`KioskSession`] drives the whole totem. Renderers read from it and feed it two kinds of
//! input: raw [`Activity`] from the input devices, which wakes the kiosk and keeps it awake, and
//! [`Intent`]s from on-screen controls. Time is passed in by the caller; the session never reads
//! the clock.

use std::{
    collections::BTreeSet,
    fmt,
    time::{Duration, Instant},
};

use catalog::{Catalog, Project, ProjectId};
use tracing::{debug, info, warn};

use crate::{
    assistant::AssistantQuery,
    config::Settings,
    filter::{self, AwardFilter, FilterSelection, FilterValue},
    timer::CancellableTimer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Idle,
    Dashboard,
    AwardsWall,
    ProjectDetail { project: ProjectId },
}

impl View {
    pub fn is_idle(&self) -> bool {
        matches!(self, View::Idle)
    }
}

/// Input that counts as someone standing at the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    PointerDown,
    PointerMove,
    Touch,
    KeyPress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectProject(ProjectId),
    Back,
    OpenAwardsWall,
    CloseAwardsWall,
    /// Directory navigation: replaces the partner filter and clears tag and award filters.
    ChoosePartner(String),
    SetPartnerFilter(FilterValue<String>),
    SetTagFilter(FilterValue<String>),
    SetYearFilter(FilterValue<i32>),
    SetAwardFilter(AwardFilter),
    ResetFilters,
    OpenPartnerDirectory,
    ClosePartnerDirectory,
    SetPartnerSearch(String),
    OpenAssistant,
    CloseAssistant,
    SetAssistantQuery(String),
    SubmitAssistantQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssistantTicket(u64);

impl fmt::Display for AssistantTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    pub ticket: AssistantTicket,
    pub query: AssistantQuery,
}

/// Work the caller must perform after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    AskAssistant(AssistantRequest),
}

/// Transient overlay state, torn down whenever the kiosk goes idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub assistant_open: bool,
    pub partner_directory_open: bool,
    pub partner_search: String,
    pub assistant_query: String,
    pub assistant_answer: Option<String>,
}

pub struct KioskSession<'c> {
    catalog: &'c Catalog,
    view: View,
    filters: FilterSelection,
    modals: ModalState,
    pending_assistant: BTreeSet<AssistantTicket>,
    next_ticket: u64,
    idle_timer: CancellableTimer,
    attract_timer: CancellableTimer,
    attract_index: usize,
}

impl<'c> KioskSession<'c> {
    pub fn new(catalog: &'c Catalog, settings: &Settings, now: Instant) -> Self {
        Self::with_timeouts(catalog, settings.idle_timeout, settings.attract_rotation, now)
    }

    /// Starts idle, with the attract rotation running.
    pub fn with_timeouts(
        catalog: &'c Catalog,
        idle_timeout: Duration,
        attract_rotation: Duration,
        now: Instant,
    ) -> Self {
        let mut attract_timer = CancellableTimer::new(attract_rotation);
        attract_timer.arm(now);
        Self {
            catalog,
            view: View::Idle,
            filters: FilterSelection::default(),
            modals: ModalState::default(),
            pending_assistant: BTreeSet::new(),
            next_ticket: 0,
            idle_timer: CancellableTimer::new(idle_timeout),
            attract_timer,
            attract_index: 0,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn modals(&self) -> &ModalState {
        &self.modals
    }

    pub fn is_assistant_open(&self) -> bool {
        self.modals.assistant_open
    }

    pub fn is_partner_directory_open(&self) -> bool {
        self.modals.partner_directory_open
    }

    pub fn assistant_answer(&self) -> Option<&str> {
        self.modals.assistant_answer.as_deref()
    }

    pub fn assistant_pending(&self) -> bool {
        !self.pending_assistant.is_empty()
    }

    pub fn visible_projects(&self) -> Vec<&'c Project> {
        filter::visible_projects(self.catalog, &self.filters)
    }

    pub fn awarded_projects(&self) -> Vec<&'c Project> {
        filter::awarded_projects(self.catalog)
    }

    pub fn selected_project(&self) -> Option<&'c Project> {
        match &self.view {
            View::ProjectDetail { project, .. } => self.catalog.project(project),
            _ => None,
        }
    }

    pub fn tags(&self) -> &'c [String] {
        self.catalog.tags()
    }

    pub fn years(&self) -> &'c [i32] {
        self.catalog.years()
    }

    pub fn partners(&self) -> &'c [String] {
        self.catalog.partners()
    }

    /// Directory entries matching the current partner search.
    pub fn filtered_partners(&self) -> Vec<&'c str> {
        filter::search_partners(self.catalog, &self.modals.partner_search)
    }

    pub fn partner_project_count(&self, partner: &str) -> usize {
        filter::partner_project_count(self.catalog, partner)
    }

    pub fn attract_index(&self) -> usize {
        self.attract_index
    }

    pub fn attract_project(&self) -> Option<&'c Project> {
        self.catalog.projects().get(self.attract_index)
    }

    /// Earliest pending timer deadline, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.idle_timer.deadline(), self.attract_timer.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Registers qualifying input. Wakes the kiosk when idle and restarts the inactivity
    /// countdown. Returns true if the kiosk woke up.
    pub fn record_activity(&mut self, activity: Activity, now: Instant) -> bool {
        let woke = if self.view.is_idle() {
            debug!(?activity, "activity while idle; waking kiosk");
            self.attract_timer.cancel();
            self.set_view(View::Dashboard);
            true
        } else {
            false
        };
        self.idle_timer.arm(now);
        woke
    }

    /// Advances timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if !self.view.is_idle() && self.idle_timer.poll(now) {
            info!(
                timeout_secs = self.idle_timer.period().as_secs(),
                "no activity; returning to attract mode"
            );
            changed |= self.enter_idle(now);
        }

        if self.view.is_idle() && self.attract_timer.poll(now) {
            if !self.catalog.is_empty() {
                self.attract_index = (self.attract_index + 1) % self.catalog.len();
                changed = true;
            }
            self.attract_timer.arm(now);
        }

        changed
    }

    /// Tears down the visitor's context and starts the attract loop. A no-op when already
    /// idle. The filter selection survives.
    pub fn enter_idle(&mut self, now: Instant) -> bool {
        if self.view.is_idle() {
            return false;
        }
        self.set_view(View::Idle);
        self.modals = ModalState::default();
        self.idle_timer.cancel();
        self.attract_index = 0;
        self.attract_timer.arm(now);
        true
    }

    pub fn dispatch(&mut self, intent: Intent) -> Effect {
        if self.view.is_idle() {
            debug!(?intent, "ignoring intent while idle");
            return Effect::None;
        }

        match intent {
            Intent::SelectProject(id) => self.select_project(id),
            Intent::Back => {
                if matches!(self.view, View::ProjectDetail { .. }) {
                    // The award-only filter is what remembers the Wall of Fame.
                    let target = if self.filters.award == AwardFilter::Awarded {
                        View::AwardsWall
                    } else {
                        View::Dashboard
                    };
                    self.set_view(target);
                }
            }
            Intent::OpenAwardsWall => {
                if self.view == View::Dashboard {
                    self.filters.award = AwardFilter::Awarded;
                    self.modals.partner_directory_open = false;
                    self.set_view(View::AwardsWall);
                }
            }
            Intent::CloseAwardsWall => {
                if self.view == View::AwardsWall {
                    self.filters.award = AwardFilter::All;
                    self.set_view(View::Dashboard);
                }
            }
            Intent::ChoosePartner(partner) => {
                debug!(partner = %partner, "partner chosen from directory");
                self.filters.partner = FilterValue::Only(partner);
                self.filters.tag = FilterValue::All;
                self.filters.award = AwardFilter::All;
                self.modals.partner_directory_open = false;
                self.set_view(View::Dashboard);
            }
            Intent::SetPartnerFilter(value) => self.filters.partner = value,
            Intent::SetTagFilter(value) => self.filters.tag = value,
            Intent::SetYearFilter(value) => self.filters.year = value,
            Intent::SetAwardFilter(value) => self.filters.award = value,
            Intent::ResetFilters => self.filters.reset(),
            Intent::OpenPartnerDirectory => self.modals.partner_directory_open = true,
            Intent::ClosePartnerDirectory => self.modals.partner_directory_open = false,
            Intent::SetPartnerSearch(text) => self.modals.partner_search = text,
            Intent::OpenAssistant => self.modals.assistant_open = true,
            Intent::CloseAssistant => {
                self.modals.assistant_open = false;
                self.modals.assistant_answer = None;
            }
            Intent::SetAssistantQuery(text) => self.modals.assistant_query = text,
            Intent::SubmitAssistantQuery => return self.submit_assistant_query(),
        }

        Effect::None
    }

    /// Stores an assistant answer. Late answers are kept even if the dialog was closed in the
    /// meantime; the dialog shows whatever arrived last.
    pub fn complete_assistant(&mut self, ticket: AssistantTicket, answer: String) {
        if !self.pending_assistant.remove(&ticket) {
            warn!(%ticket, "ignoring answer for unknown assistant request");
            return;
        }
        debug!(
            %ticket,
            still_pending = self.pending_assistant.len(),
            "assistant answer received"
        );
        self.modals.assistant_answer = Some(answer);
    }

    /// Resolves every in-flight request with `answer`, for when the worker that would have
    /// answered them is gone.
    pub fn abandon_pending_assistant(&mut self, answer: &str) {
        if self.pending_assistant.is_empty() {
            return;
        }
        warn!(
            abandoned = self.pending_assistant.len(),
            "abandoning in-flight assistant requests"
        );
        self.pending_assistant.clear();
        self.modals.assistant_answer = Some(answer.to_string());
    }

    fn select_project(&mut self, id: ProjectId) {
        if !matches!(self.view, View::Dashboard | View::AwardsWall) {
            return;
        }
        if self.catalog.project(&id).is_none() {
            warn!(project = %id, "ignoring selection of unknown project");
            return;
        }
        self.set_view(View::ProjectDetail { project: id });
    }

    fn submit_assistant_query(&mut self) -> Effect {
        let Some(query) = AssistantQuery::parse(&self.modals.assistant_query) else {
            return Effect::None;
        };
        let ticket = AssistantTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_assistant.insert(ticket);
        debug!(%ticket, in_flight = self.pending_assistant.len(), "assistant query submitted");
        Effect::AskAssistant(AssistantRequest { ticket, query })
    }

    fn set_view(&mut self, next: View) {
        if self.view != next {
            debug!(from = ?self.view, to = ?next, "view transition");
            self.view = next;
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
