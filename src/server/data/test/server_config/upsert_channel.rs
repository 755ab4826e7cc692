use super::*;

/// Tests configuring a guild for the first time.
///
/// Verifies that the guild is created, the binding stored, and the whole store written
/// to disk with the `""` sentinel for the other channel.
///
/// Expected: guild persisted with only the birthday channel
#[tokio::test]
async fn creates_guild_and_persists() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = ServerConfigStore::open(&test.servers_path).await;

    let guild = store
        .upsert_channel(7, "Guild", 70, "birthdays", ChannelKind::Birthday, 700)
        .await;

    assert_eq!(guild.guild_id, 7);
    assert_eq!(
        guild.channel(ChannelKind::Birthday),
        Some(&ChannelBinding {
            channel_id: 70,
            channel_name: "birthdays".to_string(),
            role_id: 700,
        })
    );

    let written = test.read_servers_json()?;
    assert_eq!(written[0]["server_id"], 7);
    assert_eq!(written[0]["birthday_channel"]["announcement_rol"], 700);
    assert_eq!(written[0]["event_channel"], "");
    Ok(())
}

/// Tests repeated identical calls.
///
/// Expected: one guild with the same binding as after the first call
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = ServerConfigStore::open(&test.servers_path).await;

    let first = store
        .upsert_channel(7, "Guild", 70, "events", ChannelKind::Event, 700)
        .await;
    let second = store
        .upsert_channel(7, "Guild", 70, "events", ChannelKind::Event, 700)
        .await;

    assert_eq!(first, second);
    assert_eq!(store.all().await.len(), 1);
    assert_eq!(test.read_servers()?.len(), 1);
    Ok(())
}

/// Tests reconfiguring the same channel kind.
///
/// Verifies that the binding is replaced wholesale rather than merged.
///
/// Expected: only the latest channel and role
#[tokio::test]
async fn replaces_binding_of_same_kind() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = ServerConfigStore::open(&test.servers_path).await;

    store
        .upsert_channel(7, "Guild", 70, "old", ChannelKind::Event, 700)
        .await;
    store
        .upsert_channel(7, "Guild", 71, "new", ChannelKind::Event, 7)
        .await;

    let binding = store
        .find_by_id(7)
        .await
        .unwrap()
        .event_channel
        .unwrap();
    assert_eq!(binding.channel_id, 71);
    assert_eq!(binding.channel_name, "new");
    assert_eq!(binding.role_id, 7);
    Ok(())
}

/// Tests configuring one kind on a guild that has the other kind.
///
/// Verifies that the existing binding and the stored guild name are left untouched.
///
/// Expected: both bindings present, original name kept
#[tokio::test]
async fn keeps_other_kind_and_name() -> Result<(), TestError> {
    let event_channel = ChannelEntryFactory::new()
        .channel_id(2)
        .name("event-channel")
        .role_id(20)
        .build();
    let test = TestBuilder::new()
        .with_server(
            ServerEntryFactory::new()
                .server_id(1)
                .name("Stored Name")
                .event_channel(event_channel)
                .build(),
        )
        .build()?;
    let store = ServerConfigStore::open(&test.servers_path).await;

    let guild = store
        .upsert_channel(1, "Renamed", 3, "birthday-channel", ChannelKind::Birthday, 30)
        .await;

    assert_eq!(guild.guild_name, "Stored Name");
    assert_eq!(guild.channel(ChannelKind::Event).unwrap().channel_id, 2);
    assert_eq!(guild.channel(ChannelKind::Birthday).unwrap().channel_id, 3);

    let written = test.read_servers()?;
    assert_eq!(written[0].event_channel.as_ref().unwrap().announcement_rol, 20);
    assert_eq!(written[0].birthday_channel.as_ref().unwrap().announcement_rol, 30);
    Ok(())
}

/// Tests an upsert when the file cannot be written.
///
/// Verifies that the write failure is swallowed and the change kept in memory.
///
/// Expected: binding visible through `find_by_id`, no file created
#[tokio::test]
async fn keeps_change_in_memory_when_write_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let path = test.path("missing-dir/servers.json");
    let store = ServerConfigStore::open(&path).await;

    store
        .upsert_channel(7, "Guild", 70, "events", ChannelKind::Event, 700)
        .await;

    assert!(store.find_by_id(7).await.unwrap().event_channel.is_some());
    assert!(!path.exists());
    Ok(())
}
