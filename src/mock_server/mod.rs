//! Mock ReportPortal API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! ReportPortal API for integration and end-to-end testing. Unlike wiremock
//! which mocks at the HTTP level per-test, this server maintains state across
//! requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use reportportal_client::mock_server::MockServer;
//! use reportportal_client::{get_launch, ReportPortalClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ReportPortalClient::new("test-token", server.url(), "test_project").unwrap();
//!
//!     // Server comes with default fixtures
//!     let launch = get_launch(&client, "1").await.unwrap();
//!     assert_eq!(launch.name, "nightly regression");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
