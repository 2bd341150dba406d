use super::*;

/// Tests recording an apply event.
///
/// Verifies ids are stored as strings and the options are stored as JSON.
///
/// Expected: Ok with the row reflecting the event
#[tokio::test]
async fn stores_event_with_options_json() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let options = ApplyOptions {
        include_voice_channels: false,
        ..Default::default()
    };
    let repo = TemplateUsageRepository::new(db);
    let usage = repo
        .create(&ApplyEvent {
            template_name: "Gaming".to_string(),
            guild_id: 123456789,
            guild_name: "My Guild".to_string(),
            user_id: 987654321,
            is_ai_generated: true,
            options,
            success: false,
        })
        .await?;

    assert_eq!(usage.template_name, "Gaming");
    assert_eq!(usage.guild_id, "123456789");
    assert_eq!(usage.guild_name.as_deref(), Some("My Guild"));
    assert_eq!(usage.user_id, "987654321");
    assert!(usage.is_ai_generated);
    assert!(!usage.success);

    let stored: ApplyOptions =
        serde_json::from_str(usage.customization_options.as_deref().unwrap()).unwrap();
    assert_eq!(stored, options);

    Ok(())
}

/// Tests that an empty guild name is stored as NULL.
///
/// Expected: Ok with `guild_name` None
#[tokio::test]
async fn stores_empty_guild_name_as_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TemplateUsageRepository::new(db);
    let usage = repo
        .create(&ApplyEvent {
            template_name: "Gaming".to_string(),
            guild_id: 1,
            guild_name: String::new(),
            user_id: 2,
            is_ai_generated: false,
            options: ApplyOptions::default(),
            success: true,
        })
        .await?;

    assert!(usage.guild_name.is_none());

    Ok(())
}
