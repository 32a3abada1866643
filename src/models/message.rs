//! Plain-message responses.

use serde::{Deserialize, Serialize};

/// A confirmation message returned by mutating operations.
///
/// Finish, stop, delete, update, and analyze all answer with a single
/// human-readable string rather than an entity body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The message text.
    #[serde(rename = "msg")]
    pub info: String,
}
