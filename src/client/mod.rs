//! Client Module
//!
//! HTTP transport and response validation.

pub mod http;
pub mod response;

pub use http::HttpClient;
pub use response::{validate_body, validate_response, RateResult};
