//! Helper functions shared across layers.
//!
//! - [`short_code`] - Short code derivation and lookup validation
//! - [`url_validator`] - Validation of submitted URLs
//! - [`ip_hash`] - One-way hashing of client addresses
//! - [`client_ip`] - Client address extraction from requests
//! - [`db_error`] - Classification of database errors

pub mod client_ip;
pub mod db_error;
pub mod ip_hash;
pub mod short_code;
pub mod url_validator;
