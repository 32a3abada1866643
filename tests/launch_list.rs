//! Execution tests for launch listings.
//!
//! Uses wiremock to mock the ReportPortal API and test actual execution flow.

use reportportal_client::{
    get_launches, Filter, FilterOperation, FilterOption, Paging, ReportPortalClient, SortDirection,
    Sorting,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_json() -> serde_json::Value {
    serde_json::json!({
        "content": [
            {
                "id": "1",
                "name": "smoke",
                "number": 1,
                "start_time": "2019-09-17T09:14:31.786Z"
            },
            {
                "id": "2",
                "name": "nightly regression",
                "number": 4,
                "start_time": "2019-09-17T21:00:00.000Z"
            }
        ],
        "page": {
            "number": 1,
            "size": 20,
            "totalElements": 2,
            "totalPages": 1
        }
    })
}

#[tokio::test]
async fn test_list_launches_returns_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test_project/launch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ReportPortalClient::new("test-token", &mock_server.uri(), "test_project").unwrap();
    let page = get_launches(&client, None, false).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.content[0].name, "smoke");
    assert_eq!(page.content[1].name, "nightly regression");
    assert_eq!(page.page.total_elements, 2);
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_list_debug_launches_uses_mode_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test_project/launch/mode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [
                {
                    "id": "9",
                    "name": "diagnostics",
                    "mode": "debug",
                    "start_time": "2019-09-17T09:14:31.786Z"
                }
            ],
            "page": {"number": 1, "size": 20, "totalElements": 1, "totalPages": 1}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ReportPortalClient::new("test-token", &mock_server.uri(), "test_project").unwrap();
    let page = get_launches(&client, None, true).await.unwrap();

    assert_eq!(page.len(), 1);
    assert!(page.content[0].is_debug());
}

#[tokio::test]
async fn test_list_launches_single_criterion_is_single_param() {
    let mock_server = MockServer::start().await;

    // Two values for one criterion collapse into one comma-joined parameter
    Mock::given(method("GET"))
        .and(path("/test_project/launch"))
        .and(query_param("filter.cnt.name", "smoke,nightly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ReportPortalClient::new("test-token", &mock_server.uri(), "test_project").unwrap();
    let filter = FilterOption::new().with_filter(Filter::with_values(
        FilterOperation::Contains,
        "name",
        vec!["smoke".to_string(), "nightly".to_string()],
    ));

    let page = get_launches(&client, Some(&filter), false).await.unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn test_list_launches_paging_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test_project/launch"))
        .and(query_param("page.page", "2"))
        .and(query_param("page.size", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [],
            "page": {"number": 2, "size": 50, "totalElements": 51, "totalPages": 2}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ReportPortalClient::new("test-token", &mock_server.uri(), "test_project").unwrap();
    let filter = FilterOption::new().with_paging(Paging::new(2, 50));

    let page = get_launches(&client, Some(&filter), false).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.page.number, 2);
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_list_launches_sorting_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test_project/launch"))
        .and(query_param("page.sort", "start_time,desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ReportPortalClient::new("test-token", &mock_server.uri(), "test_project").unwrap();
    let filter =
        FilterOption::new().with_sorting(Sorting::new("start_time", SortDirection::Descending));

    let page = get_launches(&client, Some(&filter), false).await.unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn test_list_launches_combined_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test_project/launch"))
        .and(query_param("filter.eq.name", "smoke"))
        .and(query_param("page.page", "1"))
        .and(query_param("page.size", "10"))
        .and(query_param("page.sort", "number,asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ReportPortalClient::new("test-token", &mock_server.uri(), "test_project").unwrap();
    let filter = FilterOption::new()
        .with_filter(Filter::new(FilterOperation::Equals, "name", "smoke"))
        .with_paging(Paging::new(1, 10))
        .with_sorting(Sorting::new("number", SortDirection::Ascending));

    let page = get_launches(&client, Some(&filter), false).await.unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn test_list_launches_empty_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test_project/launch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [],
            "page": {"number": 1, "size": 20, "totalElements": 0, "totalPages": 0}
        })))
        .mount(&mock_server)
        .await;

    let client = ReportPortalClient::new("test-token", &mock_server.uri(), "test_project").unwrap();
    let page = get_launches(&client, None, false).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(page.page.total_elements, 0);
}
