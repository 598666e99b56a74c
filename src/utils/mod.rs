//! Utility functions shared across layers.
//!
//! - [`password`] - bcrypt hashing and verification off the async runtime

pub mod password;
