use serde_json::json;

use super::*;

/// Tests converting a snapshot with every section present.
///
/// Verifies that events use the primary region's timestamps and that every score attack
/// boss shares the revue's end date.
///
/// Expected: two events, two challenges, two bosses
#[tokio::test]
async fn converts_all_sections() {
    let (_, repository) = sample_repository().await;

    let current = repository.get_current_events().await;

    assert_eq!(current.events.len(), 2);
    let event = current
        .events
        .iter()
        .find(|event| event.id == 118)
        .unwrap();
    assert_eq!(event.end_date.unwrap().timestamp(), 1625813999);

    assert_eq!(current.challenges.len(), 2);
    assert_eq!(current.challenges[0].event.id, 1050009);

    assert_eq!(current.bosses.len(), 2);
    assert!(current
        .bosses
        .iter()
        .all(|boss| boss.event.end_date.unwrap().timestamp() == 1626033599));
}

/// Tests a snapshot where only challenge revues are running.
///
/// Expected: no events or bosses, two challenges
#[tokio::test]
async fn converts_challenge_only_snapshot() {
    let (source, repository) = sample_repository().await;
    source.set(
        path::CURRENT_EVENTS,
        payload::challenge_only_current_events(),
    );

    let current = repository.get_current_events().await;

    assert!(current.events.is_empty());
    assert!(current.bosses.is_empty());
    assert_eq!(current.challenges.len(), 2);
}

/// Tests the snapshot when `/current.json` fails.
///
/// Expected: empty snapshot
#[tokio::test]
async fn upstream_failure_gives_empty_snapshot() {
    let (source, repository) = sample_repository().await;
    source.remove(path::CURRENT_EVENTS);

    assert!(repository.get_current_events().await.is_empty());
}

/// Tests that the snapshot is fetched live on every call.
///
/// Expected: two requests for two calls
#[tokio::test]
async fn fetches_snapshot_every_call() {
    let (source, repository) = sample_repository().await;

    repository.get_current_events().await;
    repository.get_current_events().await;

    assert_eq!(source.requests(path::CURRENT_EVENTS), 2);
}

/// Tests a snapshot where one event carries a timestamp chrono cannot represent.
///
/// Expected: the broken event is dropped, the valid event and the challenges remain
#[tokio::test]
async fn skips_event_with_invalid_timestamp() {
    let (source, repository) = sample_repository().await;
    let mut payload = payload::current_events();
    payload["event"] = json!({
        "1": {"id": 1, "beginAt": [1625122800], "endAt": [1625813999]},
        "2": {"id": 2, "beginAt": [1625122800], "endAt": [100000000000000i64]}
    });
    source.set(path::CURRENT_EVENTS, payload);

    let current = repository.get_current_events().await;

    let ids: Vec<u64> = current.events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(current.challenges.len(), 2);
    assert_eq!(current.bosses.len(), 2);
}
