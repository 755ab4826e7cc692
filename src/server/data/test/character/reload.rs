use super::*;

/// Tests that a reload picks up characters added upstream.
///
/// Expected: two characters after reload
#[tokio::test]
async fn picks_up_new_characters() {
    let (source, repository) = sample_repository().await;
    source.set(
        path::CHARACTERS,
        factory::helpers::collection([
            (104, factory::create_chara(104, "Claudine Saijo", 1, 8)),
            (105, factory::create_chara(105, "Maya Tendo", 31, 7)),
        ]),
    );

    repository.reload().await;

    assert_eq!(repository.get_characters().await.len(), 2);
    assert_eq!(
        repository.get_character_by_name("maya").await.unwrap().id,
        105
    );
}

/// Tests a reload that fails upstream.
///
/// Verifies that stale characters are not kept.
///
/// Expected: empty cache
#[tokio::test]
async fn failed_reload_empties_cache() {
    let (source, repository) = sample_repository().await;
    source.remove(path::CHARACTERS);

    repository.reload().await;

    assert!(repository.get_characters().await.is_empty());
}
