//! # Blog Shared
//!
//! Wire types shared between the API server and the web gateway.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
