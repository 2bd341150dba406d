use crate::{
    model::template::{SubmissionMetadata, SubmissionStatus, Template, UserTemplate},
    server::{
        data::template_store::{
            JsonTemplateStore, TemplateStore, BUILTIN_FILE, USER_SUBMITTED_FILE,
        },
        error::store::StoreError,
    },
};
use std::collections::BTreeMap;
use tempfile::TempDir;

mod json_store;

fn sample_template(name: &str) -> Template {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "description": "Sample",
        "category": "Gaming",
        "roles": [{ "name": "Mod", "color": "0x3498db", "permissions": { "kick_members": true } }],
        "categories": [{
            "name": "General",
            "permissions": { "Mod": { "send_messages": true, "read_messages": null } },
            "channels": [{ "name": "chat", "type": "text" }, { "name": "Lounge", "type": "voice" }]
        }]
    }))
    .unwrap()
}
