use super::*;

/// Tests ordering templates by total uses.
///
/// Expected: Ok with templates ordered highest first and limited
#[tokio::test]
async fn orders_by_total_uses_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_template_analytics(db, "Study", 3).await?;
    factory::create_template_analytics(db, "Gaming", 10).await?;
    factory::create_template_analytics(db, "Community", 7).await?;

    let repo = TemplateAnalyticsRepository::new(db);
    let popular = repo.get_popular(2).await?;

    let names: Vec<_> = popular.iter().map(|s| s.template_name.as_str()).collect();
    assert_eq!(names, vec!["Gaming", "Community"]);

    Ok(())
}

/// Tests an empty analytics table.
///
/// Expected: Ok with no templates
#[tokio::test]
async fn returns_empty_without_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TemplateAnalyticsRepository::new(db);

    assert!(repo.get_popular(10).await?.is_empty());

    Ok(())
}
