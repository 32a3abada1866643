//! HTTP request handlers for the mock server.

pub mod launches;

pub use launches::*;
