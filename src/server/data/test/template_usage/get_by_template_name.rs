use super::*;

/// Tests listing usage rows of one template.
///
/// Expected: Ok with only that template's rows, newest first
#[tokio::test]
async fn returns_rows_of_template_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_usage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = TemplateUsageFactory::new(db, "Gaming")
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = TemplateUsageFactory::new(db, "Gaming")
        .success(false)
        .build()
        .await?;
    TemplateUsageFactory::new(db, "Study").build().await?;

    let repo = TemplateUsageRepository::new(db);
    let rows = repo.get_by_template_name("Gaming").await?;

    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
