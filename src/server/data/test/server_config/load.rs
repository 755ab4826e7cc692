use super::*;

/// Tests loading when no servers file exists.
///
/// Verifies that a fresh deployment starts with no configured guilds and does not
/// create the file just by loading.
///
/// Expected: empty list
#[tokio::test]
async fn missing_file_loads_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let guilds = ServerConfigStore::load(&test.servers_path).await;

    assert!(guilds.is_empty());
    assert!(!test.servers_path.exists());
    Ok(())
}

/// Tests loading a complete servers file.
///
/// Expected: one guild with both channels bound
#[tokio::test]
async fn loads_configured_guilds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_raw_servers_file(payload::complete_servers_file().to_string())
        .build()?;

    let guilds = ServerConfigStore::load(&test.servers_path).await;

    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0].guild_name, "Test Server");
    assert_eq!(
        guilds[0].channel(ChannelKind::Event).unwrap().channel_name,
        "event-channel"
    );
    assert_eq!(guilds[0].channel(ChannelKind::Event).unwrap().role_id, 2);
    Ok(())
}

/// Tests loading a file using the `""` sentinel for an unconfigured channel.
///
/// Expected: the event channel is absent
#[tokio::test]
async fn empty_string_channel_is_absent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_raw_servers_file(payload::birthday_only_servers_file().to_string())
        .build()?;

    let guilds = ServerConfigStore::load(&test.servers_path).await;

    assert!(guilds[0].channel(ChannelKind::Birthday).is_some());
    assert!(guilds[0].channel(ChannelKind::Event).is_none());
    Ok(())
}

/// Tests loading a file that is not a servers file.
///
/// Expected: empty list, no error
#[tokio::test]
async fn invalid_file_loads_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_raw_servers_file("\"No Json\"")
        .build()?;

    assert!(ServerConfigStore::load(&test.servers_path).await.is_empty());

    test.write_raw_servers("{not json")?;
    assert!(ServerConfigStore::load(&test.servers_path).await.is_empty());
    Ok(())
}
