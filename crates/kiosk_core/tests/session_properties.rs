use std::time::{Duration, Instant};

use catalog::{Catalog, Project, ProjectId};
use kiosk_core::{
    Activity, AwardFilter, Effect, FilterValue, Intent, KioskSession, Settings, View,
};

fn awake(now: Instant) -> KioskSession<'static> {
    let mut session = KioskSession::new(Catalog::builtin(), &Settings::default(), now);
    session.record_activity(Activity::PointerDown, now);
    session
}

fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn all_filters_cleared_shows_full_catalog() {
    let session = awake(Instant::now());
    assert!(session.filters().is_unfiltered());
    assert_eq!(
        ids(&session.visible_projects()),
        ids(&Catalog::builtin().projects().iter().collect::<Vec<_>>())
    );
}

#[test]
fn awards_listing_is_stable_under_dashboard_filters() {
    let mut session = awake(Instant::now());
    let expected: Vec<String> = Catalog::builtin()
        .projects()
        .iter()
        .filter(|p| p.award.is_awarded())
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(ids(&session.awarded_projects()), expected);

    session.dispatch(Intent::SetPartnerFilter(FilterValue::Only("WEG".into())));
    session.dispatch(Intent::SetTagFilter(FilterValue::Only("Cloud".into())));
    session.dispatch(Intent::SetYearFilter(FilterValue::Only(2022)));
    assert!(session.visible_projects().is_empty());
    assert_eq!(ids(&session.awarded_projects()), expected);
}

#[test]
fn choosing_partner_replaces_filters_and_closes_directory() {
    let mut session = awake(Instant::now());
    session.dispatch(Intent::SetTagFilter(FilterValue::Only("IoT".into())));
    session.dispatch(Intent::SetAwardFilter(AwardFilter::Awarded));
    session.dispatch(Intent::SetYearFilter(FilterValue::Only(2023)));
    session.dispatch(Intent::OpenPartnerDirectory);
    assert!(session.is_partner_directory_open());

    session.dispatch(Intent::ChoosePartner("Mercedes-Benz".into()));

    let filters = session.filters();
    assert_eq!(filters.partner, FilterValue::Only("Mercedes-Benz".to_string()));
    assert_eq!(filters.tag, FilterValue::All);
    assert_eq!(filters.award, AwardFilter::All);
    assert_eq!(filters.year, FilterValue::Only(2023));
    assert!(!session.is_partner_directory_open());
    assert_eq!(session.view(), &View::Dashboard);
    assert_eq!(ids(&session.visible_projects()), vec!["1"]);
}

#[test]
fn choosing_partner_from_project_detail_lands_on_dashboard() {
    let mut session = awake(Instant::now());
    session.dispatch(Intent::OpenAwardsWall);
    session.dispatch(Intent::SelectProject(ProjectId::new("5")));
    session.dispatch(Intent::OpenPartnerDirectory);
    session.dispatch(Intent::ChoosePartner("Siemens".into()));

    assert_eq!(session.view(), &View::Dashboard);
    assert!(session.selected_project().is_none());
    assert_eq!(session.filters().award, AwardFilter::All);
}

#[test]
fn wall_of_fame_round_trip_through_project_detail() {
    let mut session = awake(Instant::now());
    session.dispatch(Intent::OpenAwardsWall);
    assert_eq!(session.view(), &View::AwardsWall);
    assert_eq!(session.filters().award, AwardFilter::Awarded);

    session.dispatch(Intent::SelectProject(ProjectId::new("6")));
    assert_eq!(
        session.view(),
        &View::ProjectDetail {
            project: ProjectId::new("6"),
        }
    );
    assert_eq!(
        session.selected_project().map(|p| p.title.as_str()),
        Some("Autonomous Drone Swarm")
    );

    session.dispatch(Intent::Back);
    assert_eq!(session.view(), &View::AwardsWall);
    assert!(session.selected_project().is_none());

    session.dispatch(Intent::CloseAwardsWall);
    assert_eq!(session.view(), &View::Dashboard);
    assert_eq!(session.filters().award, AwardFilter::All);
}

#[test]
fn back_from_dashboard_detail_returns_to_dashboard() {
    let mut session = awake(Instant::now());
    session.dispatch(Intent::SelectProject(ProjectId::new("3")));
    assert!(session.selected_project().is_some());

    session.dispatch(Intent::Back);
    assert_eq!(session.view(), &View::Dashboard);
    assert!(session.selected_project().is_none());
}

#[test]
fn back_follows_award_filter_kept_across_idle() {
    let start = Instant::now();
    let mut session = awake(start);
    session.dispatch(Intent::OpenAwardsWall);

    let idle_at = start + Duration::from_secs(61);
    assert!(session.tick(idle_at));
    assert_eq!(session.view(), &View::Idle);

    assert!(session.record_activity(Activity::Touch, idle_at));
    assert_eq!(session.view(), &View::Dashboard);
    assert_eq!(session.filters().award, AwardFilter::Awarded);

    session.dispatch(Intent::SelectProject(ProjectId::new("1")));
    session.dispatch(Intent::Back);
    assert_eq!(session.view(), &View::AwardsWall);
    assert!(session.selected_project().is_none());
}

#[test]
fn back_from_dashboard_with_award_filter_set_opens_wall_of_fame() {
    let mut session = awake(Instant::now());
    session.dispatch(Intent::SetAwardFilter(AwardFilter::Awarded));
    session.dispatch(Intent::SelectProject(ProjectId::new("1")));
    session.dispatch(Intent::Back);
    assert_eq!(session.view(), &View::AwardsWall);
}

#[test]
fn inactivity_returns_every_view_to_idle() {
    let setups: [&[Intent]; 4] = [
        &[],
        &[Intent::OpenAwardsWall],
        &[Intent::SelectProject(ProjectId::new("2"))],
        &[Intent::OpenAssistant, Intent::OpenPartnerDirectory],
    ];

    for intents in setups {
        let start = Instant::now();
        let mut session = awake(start);
        for intent in intents {
            session.dispatch(intent.clone());
        }
        assert!(!session.view().is_idle());

        assert!(!session.tick(start + Duration::from_secs(59)));
        assert!(!session.view().is_idle());

        assert!(session.tick(start + Duration::from_secs(60)));
        assert_eq!(session.view(), &View::Idle);
        assert!(!session.is_assistant_open());
        assert!(!session.is_partner_directory_open());
    }
}

#[test]
fn activity_while_idle_wakes_and_rearms() {
    let start = Instant::now();
    let mut session = KioskSession::new(Catalog::builtin(), &Settings::default(), start);
    assert_eq!(session.view(), &View::Idle);

    let woke_at = start + Duration::from_secs(300);
    assert!(session.record_activity(Activity::KeyPress, woke_at));
    assert_eq!(session.view(), &View::Dashboard);
    assert_eq!(session.next_deadline(), Some(woke_at + Duration::from_secs(60)));

    assert!(!session.tick(woke_at + Duration::from_secs(30)));
    assert!(session.tick(woke_at + Duration::from_secs(60)));
    assert_eq!(session.view(), &View::Idle);
}

#[test]
fn blank_assistant_query_is_a_no_op() {
    let mut session = awake(Instant::now());
    session.dispatch(Intent::OpenAssistant);

    for raw in ["", "   ", "\n\t"] {
        session.dispatch(Intent::SetAssistantQuery(raw.into()));
        let before = session.modals().clone();
        assert_eq!(session.dispatch(Intent::SubmitAssistantQuery), Effect::None);
        assert_eq!(session.modals(), &before);
        assert!(!session.assistant_pending());
    }
}

#[tokio::test]
async fn failed_assistant_call_stores_fallback_without_corrupting_state() {
    use std::sync::Arc;

    use async_trait::async_trait;
    use kiosk_core::{AssistantBackend, AssistantError, AssistantGateway, FALLBACK_ANSWER};

    struct Unreachable;

    #[async_trait]
    impl AssistantBackend for Unreachable {
        async fn generate(&self, _prompt: &str) -> Result<String, AssistantError> {
            Err(AssistantError::EmptyAnswer)
        }
    }

    let gateway = AssistantGateway::new(Arc::new(Unreachable), Catalog::builtin());
    let mut session = awake(Instant::now());
    session.dispatch(Intent::SetTagFilter(FilterValue::Only("AI".into())));
    session.dispatch(Intent::OpenAssistant);
    session.dispatch(Intent::SetAssistantQuery("Which projects won?".into()));

    let Effect::AskAssistant(request) = session.dispatch(Intent::SubmitAssistantQuery) else {
        panic!("non-blank query should dispatch");
    };
    let answer = gateway.ask(&request.query).await;
    assert_eq!(answer, FALLBACK_ANSWER);

    session.complete_assistant(request.ticket, answer);
    assert_eq!(session.assistant_answer(), Some(FALLBACK_ANSWER));
    assert!(!session.assistant_pending());
    assert_eq!(session.view(), &View::Dashboard);
    assert_eq!(session.filters().tag, FilterValue::Only("AI".to_string()));
    assert!(session.is_assistant_open());
}
