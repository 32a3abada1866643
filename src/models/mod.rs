//! Data models for the ReportPortal API.

mod launch;
mod message;

pub use launch::*;
pub use message::*;
