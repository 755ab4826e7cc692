use super::*;

/// Tests the birthday lookup on a matching date.
///
/// Verifies that the match is hydrated with its profile from `/chara/{id}.json`.
///
/// Expected: Some(CharacterRecord) with voice actor "Aina Aiba"
#[tokio::test]
async fn returns_hydrated_character() {
    let (_, repository) = sample_repository().await;

    let character = repository.get_character_birthday("01/08").await.unwrap();

    assert_eq!(character.name, "Claudine Saijo");
    let detail = character.detail.unwrap();
    assert_eq!(detail.voice_actor, "Aina Aiba");
    assert_eq!(detail.likes, "Film/theater, training");
}

/// Tests a date that is nobody's birthday.
///
/// Verifies that no detail request is made.
///
/// Expected: None
#[tokio::test]
async fn returns_none_when_nobody_is_born() {
    let (source, repository) = sample_repository().await;

    assert!(repository.get_character_birthday("01/09").await.is_none());
    assert_eq!(source.requests(&path::character(104)), 0);
}

/// Tests that matching compares the normalized `DD/MM` form exactly.
///
/// Expected: None for the unpadded and month-first forms
#[tokio::test]
async fn requires_normalized_date() {
    let (_, repository) = sample_repository().await;

    assert!(repository.get_character_birthday("1/8").await.is_none());
    assert!(repository.get_character_birthday("08/01").await.is_none());
}

/// Tests the fallback when the detail fetch fails.
///
/// Expected: Some(CharacterRecord) without detail
#[tokio::test]
async fn falls_back_to_basic_record() {
    let (source, repository) = sample_repository().await;
    source.remove(&path::character(104));

    let character = repository.get_character_birthday("01/08").await.unwrap();

    assert_eq!(character.id, 104);
    assert!(character.detail.is_none());
}
