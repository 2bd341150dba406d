use super::*;

/// Tests recording a view with a guild.
///
/// Expected: Ok with ids stored as strings
#[tokio::test]
async fn stores_view_with_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TemplateViewRepository::new(db);
    let view = repo
        .create(&ViewEvent {
            template_name: "Gaming".to_string(),
            user_id: 7,
            guild_id: Some(99),
        })
        .await?;

    assert_eq!(view.template_name, "Gaming");
    assert_eq!(view.user_id, "7");
    assert_eq!(view.guild_id.as_deref(), Some("99"));

    Ok(())
}

/// Tests recording a view from a direct message.
///
/// Expected: Ok with `guild_id` None
#[tokio::test]
async fn stores_view_without_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TemplateViewRepository::new(db);
    let view = repo
        .create(&ViewEvent {
            template_name: "Gaming".to_string(),
            user_id: 7,
            guild_id: None,
        })
        .await?;

    assert!(view.guild_id.is_none());

    Ok(())
}
