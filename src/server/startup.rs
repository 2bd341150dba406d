use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, data::template_store::JsonTemplateStore, error::AppError,
    service::catalog::TemplateCatalog,
};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,serversetup=debug";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `info,serversetup=debug`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// analytics tables exist. This function must complete successfully before usage can
/// be tracked.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Prepares the template directory and loads the catalog from it.
///
/// # Arguments
/// - `config` - Application configuration containing the template directory
///
/// # Returns
/// - `Ok(Arc<TemplateCatalog>)` - Catalog with built-in templates cached
/// - `Err(AppError::Store)` - The directory could not be prepared or a document is invalid
pub async fn load_catalog(config: &Config) -> Result<Arc<TemplateCatalog>, AppError> {
    let store = JsonTemplateStore::new(&config.template_data_dir);
    store.init().await?;

    let catalog = TemplateCatalog::load(Arc::new(store)).await?;

    Ok(Arc::new(catalog))
}
