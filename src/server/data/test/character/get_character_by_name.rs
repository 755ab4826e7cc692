use super::*;

/// Tests name lookup ignoring case.
///
/// Verifies that a lowercase partial name matches the full character name, which comes
/// from the Japanese entry when the English one is blank.
///
/// Expected: Some(CharacterRecord) named "Claudine Saijo"
#[tokio::test]
async fn finds_character_by_partial_name() {
    let (_, repository) = sample_repository().await;

    let character = repository.get_character_by_name("claudine").await.unwrap();

    assert_eq!(character.id, 104);
    assert_eq!(character.name, "Claudine Saijo");
}

/// Tests lookup of a name nobody has.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_name() {
    let (_, repository) = sample_repository().await;

    assert!(repository.get_character_by_name("zzz").await.is_none());
    assert!(repository.get_character_by_name("   ").await.is_none());
}

/// Tests that the first match in upstream order wins.
///
/// Verifies that when several names contain the query, the earliest entry of
/// `/chara.json` is returned.
///
/// Expected: Some(CharacterRecord) for Karen Aijo
#[tokio::test]
async fn returns_first_match_in_upstream_order() {
    let source = Arc::new(FakeGameData::new().with(
        path::CHARACTERS,
        factory::helpers::collection([
            (101, factory::create_chara(101, "Karen Aijo", 1, 1)),
            (102, factory::create_chara(102, "Hikari Kagura", 2, 2)),
        ]),
    ));
    let repository = CharacterRepository::load(source, CDN).await;

    let character = repository.get_character_by_name("A").await.unwrap();

    assert_eq!(character.name, "Karen Aijo");
}

/// Tests lookups after the character list failed to load.
///
/// Verifies that an upstream error leaves the cache empty instead of failing.
///
/// Expected: empty list and None for every query
#[tokio::test]
async fn upstream_failure_leaves_no_characters() {
    let repository = CharacterRepository::load(Arc::new(FakeGameData::new()), CDN).await;

    assert!(repository.get_characters().await.is_empty());
    assert!(repository.get_character_by_name("claudine").await.is_none());
    assert!(repository.get_character_by_id(104).await.is_none());
}

/// Tests that non-playable entries are skipped at load time.
///
/// Expected: only character 104 is cached
#[tokio::test]
async fn skips_characters_without_birthday() {
    let (_, repository) = sample_repository().await;

    let characters = repository.get_characters().await;

    assert_eq!(characters.len(), 1);
    assert!(repository.get_character_by_id(803).await.is_none());
}
