use std::sync::Arc;

use test_utils::{factory, fixture::payload};

use crate::server::{
    data::equip::EquipRepository,
    upstream::{fake::FakeGameData, path},
};

mod get_equips_by_character_id;
