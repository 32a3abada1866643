//! Launch endpoint handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::{
    Defects, Executions, FinishLaunchRequest, Launch, LaunchMode, MergeLaunchesRequest, Message,
    Page, PageInfo, StartLaunchRequest, Statistic, UpdateLaunchRequest,
};

/// Error body for a missing launch.
fn launch_not_found(id: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error_code": 4041,
            "message": format!("Launch '{}' not found. Did you use correct Launch ID?", id)
        })),
    )
}

/// Error body for an operation on a launch that has already finished.
fn launch_already_finished(id: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_ACCEPTABLE,
        Json(serde_json::json!({
            "error_code": 4063,
            "message": format!("Launch '{}' is already finished", id)
        })),
    )
}

/// Error body for an operation that needs a finished launch.
fn launch_in_progress(id: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_ACCEPTABLE,
        Json(serde_json::json!({
            "error_code": 4064,
            "message": format!("Launch '{}' is still in progress", id)
        })),
    )
}

/// Build one listing page from the filtered launches.
///
/// Honors `filter.cnt.name`, `filter.eq.name`, `page.page`, `page.size`,
/// and `page.sort` (fields `name`, `number`, `start_time`).
async fn list_page(
    state: Arc<RwLock<MockState>>,
    mode: LaunchMode,
    query: HashMap<String, String>,
) -> Json<Page<Launch>> {
    let state = state.read().await;

    let page_number: u32 = query
        .get("page.page")
        .and_then(|value| value.parse().ok())
        .unwrap_or(1)
        .max(1);
    let page_size: u32 = query
        .get("page.size")
        .and_then(|value| value.parse().ok())
        .unwrap_or(20)
        .max(1);

    let mut launches = state.list_launches(
        mode,
        query.get("filter.cnt.name").map(String::as_str),
        query.get("filter.eq.name").map(String::as_str),
    );

    if let Some(sort) = query.get("page.sort") {
        let (field, direction) = sort.split_once(',').unwrap_or((sort.as_str(), "asc"));
        match field {
            "name" => launches.sort_by(|a, b| a.name.cmp(&b.name)),
            "number" => launches.sort_by_key(|launch| launch.number),
            // Anything else keeps the start_time order from the state
            _ => {}
        }
        if direction == "desc" {
            launches.reverse();
        }
    }

    let total_elements = launches.len() as u64;
    let total_pages = (total_elements as u32).div_ceil(page_size);

    let start = (page_number as usize - 1) * page_size as usize;
    let end = (start + page_size as usize).min(launches.len());
    let content: Vec<Launch> = if start < launches.len() {
        launches[start..end].iter().map(|l| (*l).clone()).collect()
    } else {
        vec![]
    };

    Json(Page {
        content,
        page: PageInfo {
            number: page_number,
            size: page_size,
            total_elements,
            total_pages,
        },
    })
}

/// GET /{project}/launch
pub async fn list_launches(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(_project): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    list_page(state, LaunchMode::Default, query).await
}

/// GET /{project}/launch/mode
pub async fn list_debug_launches(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(_project): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    list_page(state, LaunchMode::Debug, query).await
}

/// GET /{project}/launch/{id}
pub async fn get_launch(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_launch(&id) {
        Some(launch) => (StatusCode::OK, Json(launch.clone())).into_response(),
        None => launch_not_found(&id).into_response(),
    }
}

/// POST /{project}/launch/
pub async fn start_launch(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(_project): Path<String>,
    Json(request): Json<StartLaunchRequest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    let id = state.next_launch_id();
    let launch = Launch {
        id: id.clone(),
        name: request.name.clone(),
        description: request.description,
        number: state.next_launch_number(&request.name),
        mode: request.mode,
        start_time: request.start_time,
        end_time: None,
        tags: request.tags,
        statistics: Some(Statistic::default()),
    };
    state.launches.insert(id, launch.clone());

    (StatusCode::CREATED, Json(launch))
}

/// PUT /{project}/launch/{id}/finish
pub async fn finish_launch(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, String)>,
    Json(request): Json<FinishLaunchRequest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.launches.get_mut(&id) {
        Some(launch) if launch.is_finished() => launch_already_finished(&id).into_response(),
        Some(launch) => {
            launch.end_time = Some(request.end_time);
            (
                StatusCode::OK,
                Json(Message {
                    info: format!("Launch with ID = '{}' successfully finished.", id),
                }),
            )
                .into_response()
        }
        None => launch_not_found(&id).into_response(),
    }
}

/// PUT /{project}/launch/{id}/stop
pub async fn stop_launch(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, String)>,
    Json(request): Json<FinishLaunchRequest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.launches.get_mut(&id) {
        Some(launch) if launch.is_finished() => launch_already_finished(&id).into_response(),
        Some(launch) => {
            launch.end_time = Some(request.end_time);
            (
                StatusCode::OK,
                Json(Message {
                    info: format!("Launch with ID = '{}' successfully stopped.", id),
                }),
            )
                .into_response()
        }
        None => launch_not_found(&id).into_response(),
    }
}

/// PUT /{project}/launch/{id}/update
pub async fn update_launch(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, String)>,
    Json(request): Json<UpdateLaunchRequest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.launches.get_mut(&id) {
        Some(launch) => {
            if let Some(description) = request.description {
                launch.description = Some(description);
            }
            if let Some(mode) = request.mode {
                launch.mode = mode;
            }
            if let Some(tags) = request.tags {
                launch.tags = tags;
            }
            (
                StatusCode::OK,
                Json(Message {
                    info: format!("Launch with ID = '{}' successfully updated.", id),
                }),
            )
                .into_response()
        }
        None => launch_not_found(&id).into_response(),
    }
}

/// DELETE /{project}/launch/{id}
pub async fn delete_launch(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.get_launch(&id) {
        Some(launch) if !launch.is_finished() => launch_in_progress(&id).into_response(),
        Some(_) => {
            state.launches.remove(&id);
            (
                StatusCode::OK,
                Json(Message {
                    info: format!("Launch with ID = '{}' successfully deleted.", id),
                }),
            )
                .into_response()
        }
        None => launch_not_found(&id).into_response(),
    }
}

/// POST /{project}/launch/merge
pub async fn merge_launches(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(_project): Path<String>,
    Json(request): Json<MergeLaunchesRequest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if request.launches.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error_code": 4001,
                "message": "No launches to merge"
            })),
        )
            .into_response();
    }

    // Validate sources before touching anything
    for id in &request.launches {
        match state.get_launch(id) {
            Some(launch) if !launch.is_finished() => {
                return launch_in_progress(id).into_response();
            }
            Some(_) => {}
            None => return launch_not_found(id).into_response(),
        }
    }

    // Number the merged launch before its sources disappear from the sequence
    let number = state.next_launch_number(&request.name);

    let sources: Vec<Launch> = request
        .launches
        .iter()
        .filter_map(|id| state.launches.remove(id))
        .collect();

    let mut executions = Executions::default();
    let mut defects = Defects::default();
    for source in &sources {
        if let Some(statistics) = &source.statistics {
            executions.total += statistics.executions.total;
            executions.passed += statistics.executions.passed;
            executions.failed += statistics.executions.failed;
            executions.skipped += statistics.executions.skipped;
            add_defects(&mut defects, &statistics.defects);
        }
    }

    let start_time = request.start_time.unwrap_or_else(|| {
        sources
            .iter()
            .map(|launch| launch.start_time)
            .min()
            .expect("sources are non-empty")
    });
    let end_time = request
        .end_time
        .or_else(|| sources.iter().filter_map(|launch| launch.end_time).max());

    let id = state.next_launch_id();
    let merged = Launch {
        id: id.clone(),
        name: request.name.clone(),
        description: request.description,
        number,
        mode: LaunchMode::Default,
        start_time,
        end_time,
        tags: request.tags,
        statistics: Some(Statistic {
            executions,
            defects,
        }),
    };
    state.launches.insert(id, merged.clone());

    (StatusCode::OK, Json(merged)).into_response()
}

/// POST /{project}/launch/{id}/analyze/{strategy}
pub async fn analyze_launch(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id, strategy)): Path<(String, String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_launch(&id) {
        Some(_) => (
            StatusCode::OK,
            Json(Message {
                info: format!(
                    "Analysis of launch '{}' started with strategy '{}'.",
                    id, strategy
                ),
            }),
        )
            .into_response(),
        None => launch_not_found(&id).into_response(),
    }
}

/// Accumulate defect counts per category.
fn add_defects(into: &mut Defects, from: &Defects) {
    into.product_bugs.total += from.product_bugs.total;
    into.automation_bugs.total += from.automation_bugs.total;
    into.system_issue.total += from.system_issue.total;
    into.to_investigate.total += from.to_investigate.total;
}
