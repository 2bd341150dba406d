use super::*;
use crate::server::service::preview::{build_preview, key_permissions, PreviewService, Viewer};

/// Tests that administrator hides every other notable permission.
///
/// Expected: only "Administrator" listed
#[test]
fn administrator_implies_other_key_permissions() {
    let role = template(serde_json::json!({
        "name": "T",
        "roles": [{ "name": "Owner", "permissions": {
            "administrator": true, "manage_guild": true, "ban_members": true
        } }]
    }))
    .roles
    .remove(0);

    assert_eq!(key_permissions(&role), vec!["Administrator"]);
}

/// Tests listing notable permissions in a fixed order, ignoring false values.
///
/// Expected: display names in notable order
#[test]
fn lists_granted_notable_permissions() {
    let role = template(serde_json::json!({
        "name": "T",
        "roles": [{ "name": "Mod", "permissions": {
            "priority_speaker": true, "kick_members": true, "manage_guild": false,
            "send_messages": true, "manage_emojis": true
        } }]
    }))
    .roles
    .remove(0);

    assert_eq!(key_permissions(&role), vec!["Kick Members", "Priority Speaker"]);
}

/// Tests truncation of roles, categories and channels.
///
/// Expected: 10 roles, 5 categories, 5 channels each, with the remainder counted
#[test]
fn truncates_long_lists() {
    let roles: Vec<_> = (0..12)
        .map(|i| serde_json::json!({ "name": format!("Role {}", i) }))
        .collect();
    let channels: Vec<_> = (0..7)
        .map(|i| serde_json::json!({ "name": format!("channel-{}", i) }))
        .collect();
    let categories: Vec<_> = (0..6)
        .map(|i| serde_json::json!({ "name": format!("Category {}", i), "channels": channels.clone() }))
        .collect();
    let template = template(serde_json::json!({
        "name": "Large",
        "roles": roles,
        "categories": categories
    }));

    let preview = build_preview(&template);

    assert_eq!(preview.role_count, 12);
    assert_eq!(preview.category_count, 6);
    assert_eq!(preview.channel_count, 42);
    assert_eq!(preview.roles.len(), 10);
    assert_eq!(preview.more_roles, 2);
    assert_eq!(preview.categories.len(), 5);
    assert_eq!(preview.more_categories, 1);
    assert_eq!(preview.categories[0].channels.len(), 5);
    assert_eq!(preview.categories[0].more_channels, 2);

    let markdown = preview.to_markdown();
    assert!(markdown.contains("- +2 more"));
    assert!(markdown.contains("+1 more categories"));
}

/// Tests the default description.
///
/// Expected: placeholder description for an empty one
#[test]
fn uses_placeholder_for_missing_description() {
    let preview = build_preview(&example_template());

    assert_eq!(preview.description, "No description available");
    assert_eq!(preview.category, "Other");
    assert_eq!(preview.roles[0].key_permissions, vec!["Kick Members"]);
}

/// Tests view tracking.
///
/// Expected: one view event with a viewer, none without
#[tokio::test]
async fn tracks_view_only_with_viewer() {
    let tracker = RecordingTracker::default();
    let service = PreviewService::new(&tracker);
    let template = community_template();

    service.preview(&template, None).await;
    let preview = service
        .preview(
            &template,
            Some(Viewer {
                user_id: 7,
                guild_id: Some(GUILD_ID),
            }),
        )
        .await;

    assert_eq!(preview.name, "Community");
    let views = tracker.views();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].template_name, "Community");
    assert_eq!(views[0].user_id, 7);
    assert_eq!(views[0].guild_id, Some(GUILD_ID));
}
