use std::sync::Arc;

use test_utils::fixture::payload;

use crate::server::{
    data::dress::DressRepository,
    upstream::{fake::FakeGameData, path},
};

mod get_dress_by_id;
mod get_dresses_by_character_id;
