//! Domain layer: entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access traits implemented by
//!   [`crate::infrastructure::persistence`]
//! - [`click_event`] - Request metadata captured on redirect
//!
//! Nothing here depends on HTTP or on a concrete database.

pub mod click_event;
pub mod entities;
pub mod repositories;
