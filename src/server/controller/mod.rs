//! HTTP request handlers.
//!
//! Controllers extract request data, call into the service layer and convert domain
//! models to DTOs. They never talk to the database or Discord directly.

pub mod page;
pub mod status;
pub mod template;

#[cfg(test)]
mod test;
