use super::*;

/// Tests fetching a single dress.
///
/// Expected: Some(DressRecord) named "Tristan"
#[tokio::test]
async fn returns_dress() {
    let source = Arc::new(FakeGameData::new().with(path::dress(1050009), payload::dress()));
    let repository = DressRepository::new(source);

    let dress = repository.get_dress_by_id(1050009).await.unwrap();

    assert_eq!(dress.id, 1050009);
    assert_eq!(dress.name, "Tristan");
    assert_eq!(dress.rarity, 4);
    assert_eq!(dress.character_id, 105);
}

/// Tests fetching a dress upstream does not know.
///
/// Expected: None
#[tokio::test]
async fn returns_none_on_upstream_failure() {
    let repository = DressRepository::new(Arc::new(FakeGameData::new()));

    assert!(repository.get_dress_by_id(2).await.is_none());
}
