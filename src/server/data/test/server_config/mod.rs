use test_utils::{
    builder::TestBuilder,
    error::TestError,
    factory::server::{ChannelEntryFactory, ServerEntryFactory},
    fixture::payload,
};

use crate::server::{
    data::server_config::ServerConfigStore,
    model::guild_config::{ChannelBinding, ChannelKind},
};

mod find_by_id;
mod load;
mod reload;
mod upsert_channel;
