//! HTTP communication layer for the Retain.cc API.
//!
//! This module handles all HTTP traffic to the remote service: client
//! construction, authentication, request dispatch, and response decoding.

mod client;

// Re-export client's public API
pub use client::{Transport, USER_AGENT};

// Re-export common types used in our public API
pub use reqwest::Method;
