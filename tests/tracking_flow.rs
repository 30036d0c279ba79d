//! Drives the tracking core end to end with a scripted backend and a manual clock.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

use pokernow_tracker::data::{ClientError, ResultsClient, ResultsRequest, ResultsResponse};
use pokernow_tracker::domain::{AliasSet, HistoryUpdate, SessionRegistry};
use pokernow_tracker::engine::{PollDecision, Tracker, Visibility, build_total};

const GAME_A: &str = "https://www.pokernow.club/games/alpha";
const GAME_B: &str = "https://www.pokernow.club/games/bravo";

/// Replays canned responses in order and records every request it saw.
struct StubClient {
    replies: Mutex<VecDeque<Result<ResultsResponse, ClientError>>>,
    seen: Mutex<Vec<ResultsRequest>>,
}

impl StubClient {
    fn new(replies: Vec<Result<ResultsResponse, ClientError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ResultsRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultsClient for StubClient {
    async fn fetch_results(&self, request: &ResultsRequest) -> Result<ResultsResponse, ClientError> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ClientError::Connect))
    }
}

fn response(body: serde_json::Value) -> Result<ResultsResponse, ClientError> {
    Ok(serde_json::from_value(body).unwrap())
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 21, 0, 0).unwrap()
}

fn registries() -> (SessionRegistry, AliasSet) {
    let mut sessions = SessionRegistry::new();
    sessions.add(GAME_A).unwrap();
    sessions.add(GAME_B).unwrap();
    sessions.toggle_subunits(GAME_B);
    let mut aliases = AliasSet::new();
    aliases.add("hero_alt").unwrap();
    (sessions, aliases)
}

/// One timer tick: ask the tracker, and if it dispatches, run the request through the stub.
async fn tick(
    tracker: &mut Tracker,
    client: &StubClient,
    sessions: &SessionRegistry,
    aliases: &AliasSet,
    now: DateTime<Utc>,
) -> Option<Option<HistoryUpdate>> {
    if tracker.poll_if_due(now) != PollDecision::Dispatch {
        return None;
    }
    let request = ResultsRequest::new("hero", sessions, aliases);
    let outcome = client.fetch_results(&request).await;
    Some(tracker.complete_poll(outcome, sessions, now))
}

#[tokio::test]
async fn polls_build_history_and_survive_failures() {
    let (sessions, aliases) = registries();
    let client = StubClient::new(vec![
        response(json!({ "results": { "results": { GAME_A: 12.5, GAME_B: 250 }, "has_errors": false, "total_profit": 262.5 } })),
        response(json!({ "results": { "results": { GAME_A: 12.5, GAME_B: 250 }, "has_errors": false, "total_profit": 262.5 } })),
        Err(ClientError::Status(502)),
        response(json!({ "results": { "results": { GAME_A: "ERROR: timeout", GAME_B: 250 }, "has_errors": true, "total_profit": 250 } })),
    ]);

    let mut tracker = Tracker::new();
    tracker.start(t0(), Visibility::Visible);

    // Mount polls immediately and seeds the chart with a baseline.
    let first = tick(&mut tracker, &client, &sessions, &aliases, t0()).await;
    assert_eq!(first, Some(Some(HistoryUpdate::Seeded)));
    assert_eq!(tracker.history().len(), 2);
    assert_eq!(tracker.total_profit(&sessions), 15.0);

    // Nothing is due between ticks.
    assert_eq!(
        tick(&mut tracker, &client, &sessions, &aliases, t0() + Duration::seconds(2)).await,
        None
    );

    // Same total 5 s later: no new point.
    let second = tick(&mut tracker, &client, &sessions, &aliases, t0() + Duration::seconds(5)).await;
    assert_eq!(second, Some(Some(HistoryUpdate::Unchanged)));
    assert_eq!(tracker.history().len(), 2);

    // Transport failure keeps the last results and the loop alive.
    let third = tick(&mut tracker, &client, &sessions, &aliases, t0() + Duration::seconds(10)).await;
    assert_eq!(third, Some(None));
    assert!(tracker.error().unwrap().starts_with("Error connecting to server: "));
    assert_eq!(tracker.total_profit(&sessions), 15.0);

    // A failed game counts as zero and the error line clears.
    let fourth = tick(&mut tracker, &client, &sessions, &aliases, t0() + Duration::seconds(15)).await;
    assert_eq!(fourth, Some(Some(HistoryUpdate::Appended)));
    assert_eq!(tracker.error(), None);
    assert!(tracker.has_errors());
    assert_eq!(tracker.total_profit(&sessions), 2.5);

    let total = build_total(tracker.results().unwrap(), &sessions);
    assert!(total.display.ends_with(" (Some games had errors)"));

    let requests = client.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].player_name, "hero");
    assert!(requests[0].games[1].is_in_cents);
    assert_eq!(requests[0].aliases, vec!["hero_alt".to_string()]);
}

#[tokio::test]
async fn cents_toggle_resets_history_to_two_points() {
    let (mut sessions, aliases) = registries();
    let body = json!({ "results": { "results": { GAME_A: 10, GAME_B: 250 } } });
    let client = StubClient::new(vec![response(body.clone()), response(body)]);

    let mut tracker = Tracker::new();
    tracker.start(t0(), Visibility::Visible);
    tick(&mut tracker, &client, &sessions, &aliases, t0()).await;
    tick(&mut tracker, &client, &sessions, &aliases, t0() + Duration::seconds(65)).await;
    assert_eq!(tracker.history().len(), 3);

    let now = t0() + Duration::seconds(70);
    sessions.toggle_subunits(GAME_B);
    assert_eq!(
        tracker.on_registry_changed(&sessions, now),
        Some(HistoryUpdate::Reset)
    );
    assert_eq!(tracker.history().len(), 2);
    assert_eq!(tracker.history().points()[0].aggregate_profit, 0.0);
    assert_eq!(tracker.history().points()[1].aggregate_profit, 260.0);

    // A second check with no further change leaves the history alone.
    assert_eq!(tracker.on_registry_changed(&sessions, now), None);
}

#[tokio::test]
async fn hidden_window_pauses_and_resume_waits_one_interval() {
    let (sessions, aliases) = registries();
    let body = json!({ "results": { "results": { GAME_A: 1 } } });
    let client = StubClient::new(vec![response(body.clone()), response(body)]);

    let mut tracker = Tracker::new();
    tracker.start(t0(), Visibility::Visible);
    tick(&mut tracker, &client, &sessions, &aliases, t0()).await;

    tracker.set_visibility(Visibility::Hidden, t0() + Duration::seconds(1));
    assert_eq!(
        tick(&mut tracker, &client, &sessions, &aliases, t0() + Duration::seconds(30)).await,
        None
    );
    assert_eq!(
        tracker.attempt_poll(t0() + Duration::seconds(30)),
        PollDecision::Hidden
    );

    let resumed = t0() + Duration::seconds(40);
    tracker.set_visibility(Visibility::Visible, resumed);
    assert_eq!(
        tick(&mut tracker, &client, &sessions, &aliases, resumed).await,
        None
    );
    assert!(
        tick(&mut tracker, &client, &sessions, &aliases, resumed + Duration::seconds(5))
            .await
            .is_some()
    );
    assert_eq!(client.requests().len(), 2);
}

#[test]
fn duplicate_game_is_rejected_without_growing_the_list() {
    let (mut sessions, _) = registries();
    let err = sessions.add(GAME_A).unwrap_err();
    assert_eq!(err.to_string(), "This game URL is already in your list");
    assert_eq!(sessions.len(), 2);
}
