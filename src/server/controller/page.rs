use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};

use crate::server::state::AppState;

const DISCORD_AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize";

/// Administrator, so that every template role and channel can be created.
const INVITE_PERMISSIONS: u64 = 8;

/// Landing page with the bot invite link.
pub async fn landing(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_landing(&state.client_id, None))
}

/// Fallback for unknown paths: the landing page with a 404 status.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    tracing::warn!("404 error, path: {}", uri.path());

    (
        StatusCode::NOT_FOUND,
        Html(render_landing(&state.client_id, Some("Page not found"))),
    )
}

/// Invite link for the bot, or `None` when no client id is configured.
pub fn invite_url(client_id: &str) -> Option<String> {
    if client_id.is_empty() {
        return None;
    }

    Some(format!(
        "{}?client_id={}&permissions={}&scope=bot%20applications.commands",
        DISCORD_AUTHORIZE_URL, client_id, INVITE_PERMISSIONS
    ))
}

fn render_landing(client_id: &str, error: Option<&str>) -> String {
    let invite = match invite_url(client_id) {
        Some(url) => format!(r#"<a class="invite" href="{}">Add to Discord</a>"#, url),
        None => "<p>The invite link is not configured.</p>".to_string(),
    };
    let error = error
        .map(|message| format!(r#"<p class="error">{}</p>"#, message))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>ServerSetup Bot</title>
</head>
<body>
<main>
<h1>ServerSetup Bot</h1>
{error}
<p>Set up a complete Discord server from a template in seconds: roles, categories, channels and permissions.</p>
{invite}
<h2>Commands</h2>
<ul>
<li><code>/templates</code> lists the available templates</li>
<li><code>/preview</code> shows what a template creates</li>
<li><code>/apply</code> applies a template to your server</li>
<li><code>/backup</code> saves your server's structure</li>
<li><code>/submit-template</code> shares your server as a template</li>
</ul>
</main>
</body>
</html>
"#
    )
}
