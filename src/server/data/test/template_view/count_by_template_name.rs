use super::*;

/// Tests counting views per template.
///
/// Expected: Ok with the views of the requested template only
#[tokio::test]
async fn counts_views_of_template() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_template_view(db, "Gaming").await?;
    factory::create_template_view(db, "Gaming").await?;
    factory::create_template_view(db, "Study").await?;

    let repo = TemplateViewRepository::new(db);

    assert_eq!(repo.count_by_template_name("Gaming").await?, 2);
    assert_eq!(repo.count_by_template_name("Missing").await?, 0);

    Ok(())
}
