//! Core domain entities.
//!
//! - [`Url`] - A shortened link
//! - [`Click`] - A resolution event on a shortened link
//!
//! Creation inputs live in separate structs ([`NewUrl`], [`NewClick`]) because
//! identifiers and timestamps are assigned by the store.

pub mod click;
pub mod url;

pub use click::{Click, NewClick};
pub use url::{NewUrl, Url};
