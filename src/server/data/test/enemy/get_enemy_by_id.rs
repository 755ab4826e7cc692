use super::*;

/// Tests fetching an enemy.
///
/// Expected: Some(EnemyRecord) named "Resentful Andrew"
#[tokio::test]
async fn returns_enemy() {
    let source = Arc::new(FakeGameData::new().with(path::enemy(900620402), payload::enemy()));
    let repository = EnemyRepository::new(source);

    let enemy = repository.get_enemy_by_id(900620402).await.unwrap();

    assert_eq!(enemy.name, "Resentful Andrew");
    assert_eq!(enemy.id, "900620402_0");
    assert_eq!(enemy.rarity, 1);
}

/// Tests fetching an enemy upstream does not know.
///
/// Expected: None
#[tokio::test]
async fn returns_none_on_upstream_failure() {
    let repository = EnemyRepository::new(Arc::new(FakeGameData::new()));

    assert!(repository.get_enemy_by_id(2).await.is_none());
}
