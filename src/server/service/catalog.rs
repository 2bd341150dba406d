//! Template catalog and community submissions.
//!
//! Built-in templates are loaded once and cached. User submissions live in the store
//! and are always read fresh; every read-modify-write of the submission document holds
//! the catalog's submission lock so concurrent submissions and reviews never lose an
//! update.

use chrono::Utc;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    model::template::{SubmissionMetadata, SubmissionStatus, Template, UserTemplate},
    server::{
        data::template_store::TemplateStore,
        error::AppError,
        model::apply::{ApplyOptions, ApplyReport},
        service::{apply::TemplateApplier, guild_api::GuildApi, usage::UsageTracker},
    },
};

/// Category used for templates that do not name one.
pub const DEFAULT_CATEGORY: &str = "Other";

pub struct TemplateCatalog {
    store: Arc<dyn TemplateStore>,
    builtin: BTreeMap<String, Template>,
    submissions: Mutex<()>,
}

impl TemplateCatalog {
    /// Loads the built-in templates from the store.
    ///
    /// # Arguments
    /// - `store` - Store holding built-in templates and user submissions
    ///
    /// # Returns
    /// - `Ok(TemplateCatalog)` - Catalog with built-in templates cached
    /// - `Err(AppError::Store)` - Built-in document could not be read
    pub async fn load(store: Arc<dyn TemplateStore>) -> Result<Self, AppError> {
        let builtin = store.load_builtin().await?;
        tracing::info!("Loaded {} templates", builtin.len());

        Ok(Self {
            store,
            builtin,
            submissions: Mutex::new(()),
        })
    }

    pub fn store(&self) -> &dyn TemplateStore {
        self.store.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.builtin.get(name)
    }

    /// Template name to description.
    pub fn list(&self) -> BTreeMap<String, String> {
        self.builtin
            .values()
            .map(|t| (t.name.clone(), t.description.clone()))
            .collect()
    }

    /// Category to template name to description.
    pub fn by_category(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        let mut categories: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();

        for (name, template) in &self.builtin {
            let category = if template.category.is_empty() {
                DEFAULT_CATEGORY
            } else {
                template.category.as_str()
            };

            categories
                .entry(category.to_string())
                .or_default()
                .insert(name.clone(), template.description.clone());
        }

        categories
    }

    /// Stores a template submitted by a user for review.
    ///
    /// A submission with the name of an earlier submission replaces it.
    ///
    /// # Arguments
    /// - `user_id` - Submitting user
    /// - `template` - Submitted template
    ///
    /// # Returns
    /// - `Ok(UserTemplate)` - The stored submission with pending status
    /// - `Err(AppError::BadRequest)` - Name is empty, or the template has neither roles
    ///   nor categories
    /// - `Err(AppError::Store)` - Submission document could not be read or written
    pub async fn submit(&self, user_id: u64, template: Template) -> Result<UserTemplate, AppError> {
        if template.name.trim().is_empty() {
            return Err(AppError::BadRequest("Template name is required".to_string()));
        }
        if template.roles.is_empty() && template.categories.is_empty() {
            return Err(AppError::BadRequest(
                "Template must define at least one role or category".to_string(),
            ));
        }

        let submission = UserTemplate {
            data: template,
            metadata: SubmissionMetadata {
                submitted_by: user_id,
                submitted_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                status: SubmissionStatus::Pending,
            },
        };

        let _guard = self.submissions.lock().await;

        let mut submissions = self.store.load_user_submitted().await?;
        submissions.insert(submission.data.name.clone(), submission.clone());
        self.store.save_user_submitted(&submissions).await?;

        tracing::info!(
            "User {} submitted template '{}'",
            user_id,
            submission.data.name
        );

        Ok(submission)
    }

    /// Submissions still waiting for review, keyed by template name.
    pub async fn pending_submissions(&self) -> Result<BTreeMap<String, UserTemplate>, AppError> {
        let _guard = self.submissions.lock().await;

        let submissions = self.store.load_user_submitted().await?;

        Ok(submissions
            .into_iter()
            .filter(|(_, s)| s.metadata.status == SubmissionStatus::Pending)
            .collect())
    }

    /// Sets the review status of a submission.
    ///
    /// # Returns
    /// - `Ok(UserTemplate)` - The updated submission
    /// - `Err(AppError::NotFound)` - No submission with that name
    /// - `Err(AppError::Store)` - Submission document could not be read or written
    pub async fn review(
        &self,
        name: &str,
        status: SubmissionStatus,
    ) -> Result<UserTemplate, AppError> {
        let _guard = self.submissions.lock().await;

        let mut submissions = self.store.load_user_submitted().await?;
        let submission = submissions
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(format!("Submitted template '{}' not found", name)))?;
        submission.metadata.status = status;
        let updated = submission.clone();

        self.store.save_user_submitted(&submissions).await?;

        tracing::info!("Template submission '{}' reviewed as {:?}", name, status);

        Ok(updated)
    }

    /// Applies a built-in template by name.
    ///
    /// An unknown name is tracked as a failed apply and returned before any call to
    /// the guild.
    ///
    /// # Returns
    /// - `Ok(ApplyReport)` - Outcome of every template item
    /// - `Err(AppError::NotFound)` - No template with that name
    /// - `Err(AppError::GuildApi)` - The walk was aborted
    pub async fn apply(
        &self,
        api: &dyn GuildApi,
        tracker: &dyn UsageTracker,
        name: &str,
        options: ApplyOptions,
        user_id: u64,
    ) -> Result<ApplyReport, AppError> {
        let applier = TemplateApplier::new(api, tracker);

        let Some(template) = self.get(name) else {
            tracing::error!("Template '{}' not found", name);
            applier.track_missing(name, options, user_id).await;
            return Err(AppError::NotFound(format!("Template '{}' not found", name)));
        };

        applier.apply(template, options, user_id).await
    }
}
