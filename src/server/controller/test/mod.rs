use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::{
    model::template::Template,
    server::{
        data::template_store::InMemoryTemplateStore,
        router::router,
        service::{
            catalog::TemplateCatalog, metrics::ServiceMetrics, usage::DatabaseUsageTracker,
        },
        state::AppState,
    },
};


const CLIENT_ID: &str = "123456789";

fn starter_template() -> Template {
    serde_json::from_value(serde_json::json!({
        "name": "Starter",
        "description": "A small server",
        "category": "General",
        "roles": [
            { "name": "Admin", "permissions": { "administrator": true } },
            { "name": "Member" }
        ],
        "categories": [
            { "name": "Text", "channels": [{ "name": "chat" }, { "name": "memes" }] },
            { "name": "Voice", "channels": [{ "name": "Lounge", "type": "voice" }] }
        ]
    }))
    .unwrap()
}

/// Router over an in-memory catalog holding `starter_template` and the given database.
async fn test_app(db: &DatabaseConnection) -> (Router, Arc<ServiceMetrics>) {
    let store = InMemoryTemplateStore::new().with_builtin([starter_template()]);
    let catalog = TemplateCatalog::load(Arc::new(store)).await.unwrap();
    let metrics = Arc::new(ServiceMetrics::new());

    let state = AppState::new(
        Arc::new(catalog),
        DatabaseUsageTracker::new(db.clone()),
        metrics.clone(),
        CLIENT_ID.to_string(),
    );

    (router().with_state(state), metrics)
}

/// Router with a fresh analytics database.
async fn fresh_app() -> (Router, Arc<ServiceMetrics>) {
    let test = TestBuilder::new().with_usage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    test_app(db).await
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

async fn assert_status(app: &Router, uri: &str, status: StatusCode) -> Response {
    let response = get(app, uri).await;
    assert_eq!(response.status(), status, "GET {}", uri);
    response
}
