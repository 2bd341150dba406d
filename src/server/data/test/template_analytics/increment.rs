use super::*;

/// Tests counting the first apply of a template.
///
/// Expected: Ok with a row holding one successful use
#[tokio::test]
async fn creates_counters_on_first_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TemplateAnalyticsRepository::new(db);
    repo.increment(&apply_event("Gaming", true, false)).await?;

    let stats = repo.get_by_template_name("Gaming").await?.unwrap();
    assert_eq!(stats.total_uses, 1);
    assert_eq!(stats.successful_uses, 1);
    assert_eq!(stats.failed_uses, 0);
    assert_eq!(stats.ai_generated_uses, 0);

    Ok(())
}

/// Tests accumulating successful, failed and AI-generated uses.
///
/// Expected: Ok with counters matching the recorded events
#[tokio::test]
async fn accumulates_counters_per_outcome() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TemplateAnalyticsRepository::new(db);
    repo.increment(&apply_event("Gaming", true, false)).await?;
    repo.increment(&apply_event("Gaming", false, false)).await?;
    repo.increment(&apply_event("Gaming", true, true)).await?;

    let stats = repo.get_by_template_name("Gaming").await?.unwrap();
    assert_eq!(stats.total_uses, 3);
    assert_eq!(stats.successful_uses, 2);
    assert_eq!(stats.failed_uses, 1);
    assert_eq!(stats.ai_generated_uses, 1);

    Ok(())
}

/// Tests that counters of different templates are independent.
///
/// Expected: Ok with one row per template
#[tokio::test]
async fn keeps_templates_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_template_analytics(db, "Study", 5).await?;

    let repo = TemplateAnalyticsRepository::new(db);
    repo.increment(&apply_event("Gaming", true, false)).await?;

    assert_eq!(repo.get_by_template_name("Study").await?.unwrap().total_uses, 5);
    assert_eq!(repo.get_by_template_name("Gaming").await?.unwrap().total_uses, 1);

    Ok(())
}
