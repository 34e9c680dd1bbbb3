//! API helper module
//!
//! A thin wrapper around HTTP requests that surfaces non-success responses
//! as errors carrying the raw response text and decodes JSON bodies.

mod client;

pub use client::{ApiClient, ApiError, get, post, post_empty};
