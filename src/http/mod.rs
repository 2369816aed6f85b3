//! Synchronous HTTP request wrappers
//!
//! Thin GET/POST/PUT helpers over a blocking client. Transport failures and
//! non-2xx responses are folded into an error-shaped [`ApiResult`] instead of
//! propagating; callers branch on the result's shape.

/// Request dispatch and response handling
pub mod client;

/// Call outcome type
pub mod result;

pub use client::HttpClient;
pub use result::ApiResult;
