use std::sync::Arc;

use test_utils::fixture::payload;

use crate::server::{
    data::enemy::EnemyRepository,
    upstream::{fake::FakeGameData, path},
};

mod get_enemy_by_id;
