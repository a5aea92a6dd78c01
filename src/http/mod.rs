//! HTTP transport
//!
//! A thin wrapper over `reqwest` that owns client construction (timeout,
//! user agent, default headers) and converts non-2xx responses into
//! descriptive status errors. One request in flight at a time; no retries,
//! no rate limiting.

mod client;


pub use client::{HttpClient, HttpClientConfig};
