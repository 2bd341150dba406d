use super::*;
use test_utils::factory::template_analytics::TemplateAnalyticsFactory;

/// Tests reading the counters of a template.
///
/// Expected: Ok with every counter converted
#[tokio::test]
async fn returns_counters_of_template() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TemplateAnalyticsFactory::new(db)
        .template_name("Gaming")
        .total_uses(4)
        .successful_uses(3)
        .failed_uses(1)
        .ai_generated_uses(2)
        .build()
        .await?;

    let repo = TemplateAnalyticsRepository::new(db);
    let stats = repo.get_by_template_name("Gaming").await?.unwrap();

    assert_eq!(stats.template_name, "Gaming");
    assert_eq!(stats.total_uses, 4);
    assert_eq!(stats.successful_uses, 3);
    assert_eq!(stats.failed_uses, 1);
    assert_eq!(stats.ai_generated_uses, 2);

    Ok(())
}

/// Tests reading a template that was never applied.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unused_template() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TemplateAnalyticsRepository::new(db);

    assert!(repo.get_by_template_name("Missing").await?.is_none());

    Ok(())
}
