use super::*;

/// Tests resolving a known event id.
///
/// Expected: Some("Hello to Halloween")
#[tokio::test]
async fn returns_english_name() {
    let (_, repository) = sample_repository().await;

    let name = repository.get_event_name_by_id(1).await;

    assert_eq!(name.as_deref(), Some("Hello to Halloween"));
}

/// Tests resolving an id missing from `/event.json`.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_id() {
    let (_, repository) = sample_repository().await;

    assert!(repository.get_event_name_by_id(2).await.is_none());
}

/// Tests the name list after `/event.json` failed to load.
///
/// Expected: empty list
#[tokio::test]
async fn upstream_failure_leaves_no_names() {
    let repository = EventRepository::load(Arc::new(FakeGameData::new())).await;

    assert!(repository.get_events().await.is_empty());
    assert!(repository.get_event_name_by_id(1).await.is_none());
}

/// Tests event lookup by partial name, ignoring case.
///
/// Expected: Some(EventName) with id 101
#[tokio::test]
async fn finds_event_by_name() {
    let (_, repository) = sample_repository().await;

    let event = repository.get_event_by_name("troupe revue").await.unwrap();

    assert_eq!(event.id, 101);
    assert!(repository.get_event_by_name("zzz").await.is_none());
}
