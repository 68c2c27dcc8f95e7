//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - PostgreSQL repository implementations and pool setup

pub mod persistence;
