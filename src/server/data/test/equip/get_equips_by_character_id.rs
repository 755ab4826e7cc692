use super::*;

/// Tests listing a character's memoirs.
///
/// Verifies that the generic `"None"` memoir is decoded but never matches.
///
/// Expected: only memoir 2000021 for character 104
#[tokio::test]
async fn returns_memoirs_picturing_character() {
    let source = Arc::new(FakeGameData::new().with(path::EQUIPS, payload::equips()));
    let repository = EquipRepository::new(source);

    let equips = repository.get_equips_by_character_id(104).await;

    assert_eq!(equips.len(), 1);
    assert_eq!(equips[0].id, 2000021);
    assert!(repository.get_equips_by_character_id(105).await.is_empty());
}

/// Tests memoirs shared by several characters.
///
/// Expected: the memoir is listed for each of them
#[tokio::test]
async fn matches_any_pictured_character() {
    let source = Arc::new(FakeGameData::new().with(
        path::EQUIPS,
        factory::helpers::collection([
            (2000100, factory::create_equip(2000100, &[104, 105])),
            (2000101, factory::equip::EquipEntryFactory::new().id(2000101).unowned().build()),
        ]),
    ));
    let repository = EquipRepository::new(source);

    assert_eq!(repository.get_equips_by_character_id(104).await.len(), 1);
    assert_eq!(repository.get_equips_by_character_id(105).await.len(), 1);
}

/// Tests lookups when `/equip.json` fails.
///
/// Expected: empty list, retried on the next call
#[tokio::test]
async fn upstream_failure_gives_empty_list() {
    let source = Arc::new(FakeGameData::new());
    let repository = EquipRepository::new(source.clone());

    assert!(repository.get_equips_by_character_id(104).await.is_empty());
    assert!(repository.get_equips_by_character_id(104).await.is_empty());
    assert_eq!(source.requests(path::EQUIPS), 2);
}
