//! Server-side bot, API backend and business logic.
//!
//! This module contains the complete backend implementation: the Discord bot that
//! applies and backs up server templates, the HTTP API serving the catalog and usage
//! statistics, the template store and the analytics persistence. The backend uses
//! Axum as the web framework, SeaORM for database operations, and Serenity for
//! Discord bot integration.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Slash commands and the Serenity guild adapter
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Template application, backup, preview, catalog and usage tracking
//! - **Data Layer** (`data/`) - Analytics tables and the JSON template store
//! - **Model Layer** (`model/`) - Guild snapshots, permission vocabulary and apply reports
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (catalog, tracker, metrics)
//! - **Startup** (`startup`) - Logging, database and template store initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util`) - Color parsing and formatting
//!
//! # Request Flow
//!
//! A slash command or HTTP request flows through these layers:
//!
//! 1. **Bot** or **Router** receives the interaction or request
//! 2. **Bot** or **Controller** parses arguments and calls a service
//! 3. **Service** executes business logic against the `GuildApi` and the template store
//! 4. **Data** persists usage analytics and template documents
//! 5. **Bot** or **Controller** renders the result as a reply or DTO

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
