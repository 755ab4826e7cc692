use super::*;

/// Tests listing a character's dresses.
///
/// Expected: both sample dresses for character 101, none for 102
#[tokio::test]
async fn filters_by_character() {
    let source = Arc::new(FakeGameData::new().with(path::DRESSES, payload::dresses()));
    let repository = DressRepository::new(source);

    let dresses = repository.get_dresses_by_character_id(101).await;

    assert_eq!(dresses.len(), 2);
    assert_eq!(dresses[0].id, 1010001);
    assert!(repository.get_dresses_by_character_id(102).await.is_empty());
}

/// Tests that the dress list is loaded once.
///
/// Expected: one request for two lookups
#[tokio::test]
async fn loads_list_once() {
    let source = Arc::new(FakeGameData::new().with(path::DRESSES, payload::dresses()));
    let repository = DressRepository::new(source.clone());

    repository.get_dresses_by_character_id(101).await;
    repository.get_dresses_by_character_id(101).await;

    assert_eq!(source.requests(path::DRESSES), 1);
}

/// Tests that a failed load is not cached.
///
/// Verifies that the next lookup retries `/dress.json`.
///
/// Expected: empty list, then both dresses once upstream recovers
#[tokio::test]
async fn retries_after_failed_load() {
    let source = Arc::new(FakeGameData::new());
    let repository = DressRepository::new(source.clone());

    assert!(repository.get_dresses_by_character_id(101).await.is_empty());

    source.set(path::DRESSES, payload::dresses());
    assert_eq!(repository.get_dresses_by_character_id(101).await.len(), 2);
    assert_eq!(source.requests(path::DRESSES), 2);
}
