//! ReportPortal API client library.
//!
//! A Rust library for interacting with the ReportPortal REST API. The
//! library is built around [`ReportPortalClient`], which holds the
//! connection settings, and free async functions grouped by resource
//! that perform one HTTP call each.
//!
//! # Quick Start
//!
//! ```no_run
//! use reportportal_client::{
//!     get_launch, get_launches, start_launch, ReportPortalClient, StartLaunchRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> reportportal_client::Result<()> {
//!     // Create client from environment variables
//!     let client = ReportPortalClient::from_env()?;
//!
//!     // Start a new launch
//!     let launch = start_launch(&client, &StartLaunchRequest::new("smoke")).await?;
//!     println!("Started launch {} #{}", launch.id, launch.number);
//!
//!     // Fetch it back by ID
//!     let launch = get_launch(&client, &launch.id).await?;
//!     println!("Launch: {}", launch.name);
//!
//!     // List launches of the project
//!     let page = get_launches(&client, None, false).await?;
//!     println!("Found {} launches", page.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Each API operation is a free async function taking the client as its
//! first argument:
//!
//! - [`get_launches`] / [`get_launch`] - Fetch launches
//! - [`start_launch`] / [`finish_launch`] - Open and close launches
//! - [`update_launch`] / [`delete_launch`] - Modify and remove launches
//! - [`merge_launches`] / [`analyze_launch`] - Combine and analyze launches
//!
//! Entity fields are typed: timestamps are [`chrono::DateTime`] values
//! carried on the wire in the format described in [`datetime`], and the
//! launch mode is the [`LaunchMode`] enum. Malformed values fail at
//! deserialization rather than surfacing as raw strings.
//!
//! Listings accept a [`FilterOption`] describing filtering, paging, and
//! sorting; see the [`filtering`] module for the query grammar.
//!
//! # Configuration
//!
//! [`ReportPortalClient::from_env`] reads configuration from environment
//! variables:
//!
//! - `RP_UUID` (required) - Your ReportPortal API token
//! - `RP_ENDPOINT` (required) - Base URL of the API, e.g. `https://rp.example.com/api/v1`
//! - `RP_PROJECT` (required) - Project name requests are scoped to

mod client;
pub mod datetime;
mod error;
pub mod filtering;
mod models;
mod pagination;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::ReportPortalClient;
pub use error::{ReportPortalError, Result};
pub use pagination::{Page, PageInfo};

// Re-export filtering types
pub use filtering::{Filter, FilterOperation, FilterOption, Paging, SortDirection, Sorting};

// Re-export models
pub use models::{
    // Launch types
    Defect,
    Defects,
    Executions,
    FinishLaunchRequest,
    Launch,
    LaunchMode,
    MergeLaunchesRequest,
    StartLaunchRequest,
    Statistic,
    UpdateLaunchRequest,
    // Message type
    Message,
};

// Re-export launch operations
pub use models::{
    analyze_launch, delete_launch, finish_launch, get_launch, get_launches, merge_launches,
    start_launch, update_launch,
};
