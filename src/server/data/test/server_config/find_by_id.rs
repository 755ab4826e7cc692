use super::*;

/// Tests finding a configured guild.
///
/// Expected: Some(GuildConfig) named "Test Server"
#[tokio::test]
async fn finds_configured_guild() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_raw_servers_file(payload::complete_servers_file().to_string())
        .build()?;
    let store = ServerConfigStore::open(&test.servers_path).await;

    let guild = store.find_by_id(1).await.unwrap();

    assert_eq!(guild.guild_name, "Test Server");
    Ok(())
}

/// Tests finding a guild that was never configured.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_server(ServerEntryFactory::new().server_id(1).build())
        .build()?;
    let store = ServerConfigStore::open(&test.servers_path).await;

    assert!(store.find_by_id(2).await.is_none());
    assert!(store.find_by_id(0).await.is_none());
    Ok(())
}
