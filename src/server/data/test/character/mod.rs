use std::sync::Arc;

use test_utils::{factory, fixture::payload};

use crate::server::{
    data::character::CharacterRepository,
    upstream::{fake::FakeGameData, path},
};

mod get_character_birthday;
mod get_character_by_name;
mod reload;

const CDN: &str = "https://cdn.example.test/api/assets";

/// Repository over a source serving the sample `/chara.json` and `/chara/104.json`.
async fn sample_repository() -> (Arc<FakeGameData>, CharacterRepository) {
    let source = Arc::new(
        FakeGameData::new()
            .with(path::CHARACTERS, payload::characters())
            .with(path::character(104), payload::character_detail()),
    );
    let repository = CharacterRepository::load(source.clone(), CDN).await;

    (source, repository)
}
