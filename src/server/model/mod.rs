//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer: the snapshot
//! of a remote guild's hierarchy, the permission vocabulary, apply options and outcome
//! reports, backup results and analytics records. Entity models are converted at the
//! repository boundary; serializable documents live in the top-level `model` module.

pub mod apply;
pub mod backup;
pub mod guild;
pub mod permission;
pub mod usage;
