use std::sync::Arc;

use test_utils::{factory, fixture::payload};

use crate::server::{
    data::event::EventRepository,
    upstream::{fake::FakeGameData, path},
};

mod get_current_events;
mod get_event_name_by_id;
mod reload_events;

async fn sample_repository() -> (Arc<FakeGameData>, EventRepository) {
    let source = Arc::new(
        FakeGameData::new()
            .with(path::EVENTS, payload::events())
            .with(path::CURRENT_EVENTS, payload::current_events()),
    );
    let repository = EventRepository::load(source.clone()).await;

    (source, repository)
}
