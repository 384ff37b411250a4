//! Endpoint operations for the Retain.cc API.
//!
//! Each module covers one resource collection:
//! - `users`: create, fetch, update, and delete user records
//! - `companies`: create and update company records
//!
//! All operations use the shared HTTP transport and error handling.

pub mod companies;
pub mod users;
