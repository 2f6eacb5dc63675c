use super::*;

const IDLE: Duration = Duration::from_secs(60);
const ROTATION: Duration = Duration::from_secs(8);

fn awake_session(now: Instant) -> KioskSession<'static> {
    let mut session = KioskSession::with_timeouts(Catalog::builtin(), IDLE, ROTATION, now);
    assert!(session.record_activity(Activity::Touch, now));
    session
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn starts_idle_with_attract_rotation_armed() {
    let now = Instant::now();
    let session = KioskSession::with_timeouts(Catalog::builtin(), IDLE, ROTATION, now);
    assert_eq!(session.view(), &View::Idle);
    assert_eq!(session.next_deadline(), Some(now + ROTATION));
    assert_eq!(session.attract_index(), 0);
}

#[test]
fn waking_switches_deadline_from_rotation_to_inactivity() {
    let now = Instant::now();
    let session = awake_session(now);
    assert_eq!(session.view(), &View::Dashboard);
    assert_eq!(session.next_deadline(), Some(now + IDLE));
}

#[test]
fn activity_restarts_inactivity_countdown() {
    let start = Instant::now();
    let mut session = awake_session(start);

    assert!(!session.record_activity(Activity::PointerMove, start + secs(50)));
    assert!(!session.tick(start + secs(60)));
    assert_eq!(session.view(), &View::Dashboard);

    assert!(session.tick(start + secs(110)));
    assert_eq!(session.view(), &View::Idle);
}

#[test]
fn attract_rotation_wraps_around_catalog() {
    let start = Instant::now();
    let mut session = KioskSession::with_timeouts(Catalog::builtin(), IDLE, ROTATION, start);
    let len = Catalog::builtin().len() as u32;

    let mut now = start;
    for _ in 0..len {
        now += ROTATION;
        assert!(session.tick(now));
    }
    assert_eq!(session.attract_index(), 0);

    now += ROTATION;
    assert!(session.tick(now));
    assert_eq!(session.attract_index(), 1);
    assert_eq!(
        session.attract_project().map(|p| p.id.as_str()),
        Some("2")
    );
}

#[test]
fn attract_rotation_pauses_while_awake() {
    let start = Instant::now();
    let mut session = awake_session(start);
    assert!(!session.tick(start + ROTATION * 3));
    assert_eq!(session.attract_index(), 0);
}

#[test]
fn entering_idle_twice_tears_down_once() {
    let start = Instant::now();
    let mut session = awake_session(start);
    session.dispatch(Intent::OpenAssistant);

    assert!(session.enter_idle(start + secs(1)));
    assert!(!session.modals().assistant_open);
    let deadline = session.next_deadline();

    assert!(!session.enter_idle(start + secs(5)));
    assert_eq!(session.next_deadline(), deadline);
}

#[test]
fn idle_resets_modals_and_rotation_but_keeps_filters() {
    let start = Instant::now();
    let mut session = awake_session(start);
    session.dispatch(Intent::SetYearFilter(FilterValue::Only(2023)));
    session.dispatch(Intent::OpenPartnerDirectory);
    session.dispatch(Intent::SetPartnerSearch("ten".into()));
    session.dispatch(Intent::SetAssistantQuery("who?".into()));

    assert!(session.tick(start + IDLE));
    assert_eq!(session.modals(), &ModalState::default());
    assert_eq!(session.filters().year, FilterValue::Only(2023));
    assert_eq!(session.next_deadline(), Some(start + IDLE + ROTATION));
}

#[test]
fn idle_from_project_detail_clears_selection() {
    let start = Instant::now();
    let mut session = awake_session(start);
    session.dispatch(Intent::SelectProject(ProjectId::new("4")));
    assert!(session.selected_project().is_some());

    session.tick(start + IDLE);
    assert_eq!(session.view(), &View::Idle);
    assert!(session.selected_project().is_none());
}

#[test]
fn intents_are_ignored_while_idle() {
    let now = Instant::now();
    let mut session = KioskSession::with_timeouts(Catalog::builtin(), IDLE, ROTATION, now);
    assert_eq!(
        session.dispatch(Intent::SelectProject(ProjectId::new("1"))),
        Effect::None
    );
    session.dispatch(Intent::OpenAssistant);
    assert_eq!(session.view(), &View::Idle);
    assert!(!session.is_assistant_open());
}

#[test]
fn unknown_project_selection_is_ignored() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.dispatch(Intent::SelectProject(ProjectId::new("404")));
    assert_eq!(session.view(), &View::Dashboard);
}

#[test]
fn wall_of_fame_only_opens_from_dashboard() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.dispatch(Intent::SelectProject(ProjectId::new("1")));
    session.dispatch(Intent::OpenAwardsWall);
    assert!(matches!(session.view(), View::ProjectDetail { .. }));
    assert_eq!(session.filters().award, AwardFilter::All);
}

#[test]
fn duplicate_submissions_issue_distinct_tickets() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.dispatch(Intent::OpenAssistant);
    session.dispatch(Intent::SetAssistantQuery("Excellence projects?".into()));

    let first = session.dispatch(Intent::SubmitAssistantQuery);
    let second = session.dispatch(Intent::SubmitAssistantQuery);
    let (Effect::AskAssistant(first), Effect::AskAssistant(second)) = (first, second) else {
        panic!("both submissions should dispatch");
    };
    assert_ne!(first.ticket, second.ticket);
    assert_eq!(first.query, second.query);
    assert!(session.assistant_pending());

    session.complete_assistant(second.ticket, "second".into());
    assert!(session.assistant_pending());
    session.complete_assistant(first.ticket, "first".into());
    assert!(!session.assistant_pending());
    assert_eq!(session.assistant_answer(), Some("first"));
}

#[test]
fn late_answer_is_stored_after_dialog_closed() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.dispatch(Intent::OpenAssistant);
    session.dispatch(Intent::SetAssistantQuery("hi".into()));
    let Effect::AskAssistant(request) = session.dispatch(Intent::SubmitAssistantQuery) else {
        panic!("query should dispatch");
    };

    session.dispatch(Intent::CloseAssistant);
    session.dispatch(Intent::SelectProject(ProjectId::new("2")));
    session.complete_assistant(request.ticket, "hello".into());

    assert_eq!(session.assistant_answer(), Some("hello"));
    assert!(!session.is_assistant_open());
    assert_eq!(
        session.selected_project().map(|p| p.id.as_str()),
        Some("2")
    );
}

#[test]
fn unknown_ticket_is_ignored() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.complete_assistant(AssistantTicket(99), "stray".into());
    assert_eq!(session.assistant_answer(), None);
}

#[test]
fn abandoning_pending_requests_resolves_all_of_them() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.dispatch(Intent::OpenAssistant);
    session.dispatch(Intent::SetAssistantQuery("anyone there?".into()));
    let Effect::AskAssistant(first) = session.dispatch(Intent::SubmitAssistantQuery) else {
        panic!("query should dispatch");
    };
    session.dispatch(Intent::SubmitAssistantQuery);

    session.abandon_pending_assistant("offline");
    assert!(!session.assistant_pending());
    assert_eq!(session.assistant_answer(), Some("offline"));

    session.complete_assistant(first.ticket, "too late".into());
    assert_eq!(session.assistant_answer(), Some("offline"));
}

#[test]
fn abandoning_with_nothing_pending_keeps_answer() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.abandon_pending_assistant("offline");
    assert_eq!(session.assistant_answer(), None);
}

#[test]
fn close_assistant_clears_answer() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.dispatch(Intent::OpenAssistant);
    session.dispatch(Intent::SetAssistantQuery("q".into()));
    let Effect::AskAssistant(request) = session.dispatch(Intent::SubmitAssistantQuery) else {
        panic!("query should dispatch");
    };
    session.complete_assistant(request.ticket, "answer".into());
    session.dispatch(Intent::CloseAssistant);
    assert_eq!(session.assistant_answer(), None);
}

#[test]
fn partner_search_narrows_directory() {
    let now = Instant::now();
    let mut session = awake_session(now);
    session.dispatch(Intent::OpenPartnerDirectory);
    session.dispatch(Intent::SetPartnerSearch("mot".into()));
    assert_eq!(session.filtered_partners(), vec!["General Motors"]);
    assert_eq!(session.partner_project_count("General Motors"), 0);
}
