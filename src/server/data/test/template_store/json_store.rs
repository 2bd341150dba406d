use super::*;

/// Tests initializing an empty data directory.
///
/// Expected: Ok with an empty submission document created
#[tokio::test]
async fn init_creates_empty_submission_document() -> Result<(), StoreError> {
    let dir = TempDir::new()?;
    let store = JsonTemplateStore::new(dir.path().join("data"));

    store.init().await?;

    let contents = std::fs::read_to_string(dir.path().join("data").join(USER_SUBMITTED_FILE))?;
    assert_eq!(contents, "{}");
    assert!(store.load_user_submitted().await?.is_empty());

    Ok(())
}

/// Tests a missing built-in template file.
///
/// Expected: Ok with an empty catalog
#[tokio::test]
async fn missing_builtin_file_yields_empty_catalog() -> Result<(), StoreError> {
    let dir = TempDir::new()?;
    let store = JsonTemplateStore::new(dir.path());

    assert!(store.load_builtin().await?.is_empty());

    Ok(())
}

/// Tests reading built-in templates keyed by name.
///
/// Expected: Ok with the parsed templates
#[tokio::test]
async fn loads_builtin_templates() -> Result<(), StoreError> {
    let dir = TempDir::new()?;
    let templates = BTreeMap::from([("Gaming".to_string(), sample_template("Gaming"))]);
    std::fs::write(
        dir.path().join(BUILTIN_FILE),
        serde_json::to_vec(&templates)?,
    )?;
    let store = JsonTemplateStore::new(dir.path());

    let loaded = store.load_builtin().await?;

    assert_eq!(loaded, templates);

    Ok(())
}

/// Tests a malformed built-in template file.
///
/// Expected: Err(StoreError::Json)
#[tokio::test]
async fn rejects_malformed_builtin_file() -> Result<(), StoreError> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join(BUILTIN_FILE), "{ not json")?;
    let store = JsonTemplateStore::new(dir.path());

    let result = store.load_builtin().await;

    assert!(matches!(result, Err(StoreError::Json(_))));

    Ok(())
}

/// Tests writing and reading user submissions.
///
/// Expected: Ok with the same submissions read back
#[tokio::test]
async fn saves_and_loads_user_submissions() -> Result<(), StoreError> {
    let dir = TempDir::new()?;
    let store = JsonTemplateStore::new(dir.path());
    store.init().await?;

    let submissions = BTreeMap::from([(
        "Gaming".to_string(),
        UserTemplate {
            data: sample_template("Gaming"),
            metadata: SubmissionMetadata {
                submitted_by: 42,
                submitted_at: "2026-03-01 12:00:00".to_string(),
                status: SubmissionStatus::Pending,
            },
        },
    )]);

    store.save_user_submitted(&submissions).await?;

    assert_eq!(store.load_user_submitted().await?, submissions);

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(
        dir.path().join(USER_SUBMITTED_FILE),
    )?)?;
    assert_eq!(raw["Gaming"]["metadata"]["status"], "pending");
    assert_eq!(raw["Gaming"]["data"]["categories"][0]["channels"][1]["type"], "voice");

    Ok(())
}

/// Tests writing a backup document.
///
/// Expected: Ok with the document under the backups directory
#[tokio::test]
async fn writes_backup_document() -> Result<(), StoreError> {
    let dir = TempDir::new()?;
    let store = JsonTemplateStore::new(dir.path());
    let template = sample_template("My Guild Backup");

    store.save_backup("1000_20260301_120000", &template).await?;

    let path = store.backup_path("1000_20260301_120000");
    assert_eq!(path, dir.path().join("backups").join("1000_20260301_120000.json"));
    let written: Template = serde_json::from_slice(&std::fs::read(path)?)?;
    assert_eq!(written, template);

    Ok(())
}

/// Tests the templates bundled with the repository.
///
/// Expected: every template parses, is keyed by its own name, and only references
/// its own roles (or `@everyone`) in overwrites
#[tokio::test]
async fn bundled_templates_are_consistent() -> Result<(), StoreError> {
    let store = JsonTemplateStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));

    let templates = store.load_builtin().await?;
    assert!(!templates.is_empty());

    for (key, template) in &templates {
        assert_eq!(key, &template.name);

        let roles: Vec<&str> = template.roles.iter().map(|r| r.name.as_str()).collect();
        let referenced = template.categories.iter().flat_map(|category| {
            category
                .permissions
                .keys()
                .chain(category.channels.iter().flat_map(|c| c.permissions.keys()))
        });
        for role in referenced {
            assert!(
                role == "@everyone" || roles.contains(&role.as_str()),
                "'{}' references unknown role '{}'",
                template.name,
                role
            );
        }
    }

    Ok(())
}
