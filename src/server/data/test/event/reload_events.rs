use super::*;

/// Tests that a reload picks up events added upstream.
///
/// Expected: the new event resolves after reload
#[tokio::test]
async fn picks_up_new_events() {
    let (source, repository) = sample_repository().await;
    source.set(
        path::EVENTS,
        factory::helpers::collection([
            (1, factory::event::create_event_name("Hello to Halloween")),
            (2, factory::event::create_event_name("Event Test 2")),
        ]),
    );

    repository.reload_events().await;

    let events = repository.get_events().await;
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].id, 2);
    assert_eq!(
        repository.get_event_name_by_id(2).await.as_deref(),
        Some("Event Test 2")
    );
}

/// Tests a reload with unchanged upstream data.
///
/// Expected: the same names as before
#[tokio::test]
async fn keeps_same_data() {
    let (_, repository) = sample_repository().await;
    let before = repository.get_events().await;

    repository.reload_events().await;

    assert_eq!(repository.get_events().await, before);
}
