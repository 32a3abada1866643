//! Launch model, request payloads, and launch operations.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ReportPortalClient;
use crate::error::{ReportPortalError, Result};
use crate::filtering::FilterOption;
use crate::models::message::Message;
use crate::pagination::Page;

/// A ReportPortal launch.
///
/// Launches are top-level test-run records: one launch aggregates the
/// execution and defect statistics of everything reported under it. A
/// launch is created by [`start_launch`], closed by [`finish_launch`], and
/// carries no end time while still running.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launch {
    /// Launch ID assigned by the server.
    pub id: String,

    /// Launch name. Launches with the same name share a number sequence.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Ordinal number of this launch within its name (1-indexed).
    #[serde(default)]
    pub number: u32,

    /// Launch mode; debug launches are hidden from the default listing.
    #[serde(default)]
    pub mode: LaunchMode,

    /// When the launch was started.
    #[serde(with = "crate::datetime")]
    pub start_time: DateTime<Utc>,

    /// When the launch was finished; absent while the launch is running.
    #[serde(default, with = "crate::datetime::option")]
    pub end_time: Option<DateTime<Utc>>,

    /// Tags attached to the launch.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Aggregated execution and defect statistics.
    #[serde(default)]
    pub statistics: Option<Statistic>,
}

impl Launch {
    /// Whether the launch has finished (an end time is present).
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Whether this is a debug-mode launch.
    pub fn is_debug(&self) -> bool {
        self.mode == LaunchMode::Debug
    }
}

/// Launch mode.
///
/// Encoded on the wire as a lowercase string (`"default"` or `"debug"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Regular launch, visible in the default listing.
    #[default]
    Default,
    /// Debug launch, listed only via the debug listing.
    Debug,
}

impl LaunchMode {
    /// The canonical wire string for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchMode::Default => "default",
            LaunchMode::Debug => "debug",
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaunchMode {
    type Err = ReportPortalError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "default" => Ok(LaunchMode::Default),
            "debug" => Ok(LaunchMode::Debug),
            other => Err(ReportPortalError::InvalidMode(other.to_string())),
        }
    }
}

/// Aggregated statistics of a launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistic {
    /// Execution counts.
    #[serde(default)]
    pub executions: Executions,
    /// Defect counts by category.
    #[serde(default)]
    pub defects: Defects,
}

/// Execution counts of a launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Executions {
    /// Total number of executions.
    #[serde(default)]
    pub total: u32,
    /// Number of passed executions.
    #[serde(default)]
    pub passed: u32,
    /// Number of failed executions.
    #[serde(default)]
    pub failed: u32,
    /// Number of skipped executions.
    #[serde(default)]
    pub skipped: u32,
}

/// Defect counts of a launch, by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defects {
    /// Product bugs.
    #[serde(default)]
    pub product_bugs: Defect,
    /// Automation bugs.
    #[serde(default)]
    pub automation_bugs: Defect,
    /// System issues.
    #[serde(default)]
    pub system_issue: Defect,
    /// Defects still to investigate.
    #[serde(default)]
    pub to_investigate: Defect,
}

impl Defects {
    /// Total defect count across all four categories.
    pub fn total(&self) -> u32 {
        self.product_bugs.total
            + self.automation_bugs.total
            + self.system_issue.total
            + self.to_investigate.total
    }
}

/// Count of defects in a single category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defect {
    /// Number of defects in this category.
    #[serde(default)]
    pub total: u32,
}

/// Payload for [`start_launch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartLaunchRequest {
    /// Launch name.
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Launch start time.
    #[serde(with = "crate::datetime")]
    pub start_time: DateTime<Utc>,

    /// Launch mode.
    #[serde(default)]
    pub mode: LaunchMode,

    /// Tags to attach to the launch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl StartLaunchRequest {
    /// Create a request for a launch starting now, in default mode.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            start_time: Utc::now(),
            mode: LaunchMode::Default,
            tags: Vec::new(),
        }
    }
}

/// Payload for [`finish_launch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishLaunchRequest {
    /// Launch end time.
    #[serde(with = "crate::datetime")]
    pub end_time: DateTime<Utc>,
}

impl FinishLaunchRequest {
    /// Create a request closing the launch at the given time.
    pub fn new(end_time: DateTime<Utc>) -> Self {
        Self { end_time }
    }
}

/// Payload for [`update_launch`]. Unset fields are left unchanged remotely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLaunchRequest {
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New launch mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<LaunchMode>,

    /// Replacement tag set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Payload for [`merge_launches`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeLaunchesRequest {
    /// IDs of the launches to merge.
    pub launches: Vec<String>,

    /// Name of the merged launch.
    pub name: String,

    /// Description of the merged launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags of the merged launch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Start time of the merged launch.
    #[serde(default, with = "crate::datetime::option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// End time of the merged launch.
    #[serde(default, with = "crate::datetime::option", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Launch operations
// ---------------------------------------------------------------------------

/// List launches of the project.
///
/// Passing `debug = true` lists debug-mode launches instead of regular
/// ones. The optional filter specification contributes query parameters as
/// described in the [`filtering`](crate::filtering) module.
///
/// # Example
///
/// ```ignore
/// use reportportal_client::{get_launches, Filter, FilterOperation, FilterOption};
///
/// let filter = FilterOption::new()
///     .with_filter(Filter::new(FilterOperation::Contains, "name", "smoke"));
/// let page = get_launches(&client, Some(&filter), false).await?;
/// for launch in &page {
///     println!("{} #{}", launch.name, launch.number);
/// }
/// ```
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
// `debug` stays out of the span fields; the span macro's own `debug`
// helper shadows same-named arguments in its expansion.
#[tracing::instrument(skip(client, filter, debug))]
pub async fn get_launches(
    client: &ReportPortalClient,
    filter: Option<&FilterOption>,
    debug: bool,
) -> Result<Page<Launch>> {
    let path = if debug {
        format!("{}/launch/mode", client.project())
    } else {
        format!("{}/launch", client.project())
    };

    let response = match filter {
        Some(filter) => {
            client
                .get_with_query(&path, &filter.to_query_pairs())
                .await?
        }
        None => client.get(&path).await?,
    };

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Get a single launch by ID.
///
/// # Errors
///
/// Returns [`ReportPortalError::NotFound`] if no launch with this ID exists
/// remotely; other failures are surfaced unchanged.
#[tracing::instrument(skip(client))]
pub async fn get_launch(client: &ReportPortalClient, id: &str) -> Result<Launch> {
    let path = format!("{}/launch/{}", client.project(), urlencoding::encode(id));

    let response = client.get(&path).await.map_err(|err| match err {
        ReportPortalError::ApiError {
            status_code: Some(404),
            ..
        } => ReportPortalError::NotFound {
            entity_type: "Launch",
            id: id.to_string(),
        },
        other => other,
    })?;

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Start a new launch and return its created representation.
#[tracing::instrument(skip(client, request))]
pub async fn start_launch(
    client: &ReportPortalClient,
    request: &StartLaunchRequest,
) -> Result<Launch> {
    let path = format!("{}/launch/", client.project());

    let response = client.post(&path, request).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Finish a launch.
///
/// With `force = false` this performs a regular finish; with `force = true`
/// it stops the launch even if test items are still in progress.
#[tracing::instrument(skip(client, request))]
pub async fn finish_launch(
    client: &ReportPortalClient,
    id: &str,
    request: &FinishLaunchRequest,
    force: bool,
) -> Result<Message> {
    let suffix = if force { "stop" } else { "finish" };
    let path = format!(
        "{}/launch/{}/{}",
        client.project(),
        urlencoding::encode(id),
        suffix
    );

    let response = client.put(&path, request).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Delete a launch by ID.
#[tracing::instrument(skip(client))]
pub async fn delete_launch(client: &ReportPortalClient, id: &str) -> Result<Message> {
    let path = format!("{}/launch/{}", client.project(), urlencoding::encode(id));

    let response = client.delete(&path).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Merge several launches into one and return the merged representation.
#[tracing::instrument(skip(client, request))]
pub async fn merge_launches(
    client: &ReportPortalClient,
    request: &MergeLaunchesRequest,
) -> Result<Launch> {
    let path = format!("{}/launch/merge", client.project());

    let response = client.post(&path, request).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Update a launch's description, mode, or tags.
#[tracing::instrument(skip(client, request))]
pub async fn update_launch(
    client: &ReportPortalClient,
    id: &str,
    request: &UpdateLaunchRequest,
) -> Result<Message> {
    let path = format!(
        "{}/launch/{}/update",
        client.project(),
        urlencoding::encode(id)
    );

    let response = client.put(&path, request).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Trigger an analysis strategy on a launch.
///
/// The strategy is a server-defined name; `"history"` triggers the
/// history-based analyzer.
#[tracing::instrument(skip(client))]
pub async fn analyze_launch(
    client: &ReportPortalClient,
    id: &str,
    strategy: &str,
) -> Result<Message> {
    let path = format!(
        "{}/launch/{}/analyze/{}",
        client.project(),
        urlencoding::encode(id),
        urlencoding::encode(strategy)
    );

    let response = client.post_empty(&path).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
