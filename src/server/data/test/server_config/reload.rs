use super::*;

/// Tests that reload discards changes that never reached the file.
///
/// Expected: the in-memory guild is gone after reload
#[tokio::test]
async fn discards_unsaved_changes() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let path = test.path("missing-dir/servers.json");
    let store = ServerConfigStore::open(&path).await;
    store
        .upsert_channel(7, "Guild", 70, "events", ChannelKind::Event, 700)
        .await;

    store.reload().await;

    assert!(store.find_by_id(7).await.is_none());
    assert!(store.all().await.is_empty());
    Ok(())
}

/// Tests that reload replaces memory with the file as it is now.
///
/// Expected: store contents equal the rewritten file
#[tokio::test]
async fn reads_current_file() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_server(ServerEntryFactory::new().server_id(1).build())
        .build()?;
    let store = ServerConfigStore::open(&test.servers_path).await;

    test.write_raw_servers(&payload::birthday_only_servers_file().to_string())?;
    store.reload().await;

    let guilds = store.all().await;
    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0].guild_name, "Test Server");
    assert!(guilds[0].event_channel.is_none());
    Ok(())
}

/// Tests that persisted changes survive a reload.
///
/// Expected: the same configuration before and after
#[tokio::test]
async fn keeps_persisted_changes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_empty_servers_file().build()?;
    let store = ServerConfigStore::open(&test.servers_path).await;
    store
        .upsert_channel(7, "Guild", 70, "events", ChannelKind::Event, 700)
        .await;
    let before = store.all().await;

    store.reload().await;

    assert_eq!(store.all().await, before);
    Ok(())
}
