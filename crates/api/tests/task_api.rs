//! HTTP-level integration tests for the `/tasks` endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, create_task, create_user, delete, empty_app, get,
    post_json, post_raw, put_json,
};
use serde_json::json;
use taskdesk_db::Store;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_task_returns_201_envelope() {
    let app = empty_app();
    let user_id = create_user(&app, "ada", "ada@example.com").await;

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"title": "Write report", "description": "Q3", "user_id": user_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Task created successfully");
    assert_eq!(json["data"]["title"], "Write report");
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["user_id"], user_id);
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn create_task_with_missing_fields_lists_errors() {
    let response = post_json(empty_app(), "/api/v1/tasks", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Validation failed");
    assert!(json["errors"]["title"].is_array());
    assert!(json["errors"]["user_id"].is_array());
}

#[tokio::test]
async fn create_task_with_bad_status_is_rejected() {
    let app = empty_app();
    let user_id = create_user(&app, "ada", "ada@example.com").await;

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"title": "x", "status": "archived", "user_id": user_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let messages = json["errors"]["status"].as_array().unwrap();
    assert!(messages[0].as_str().unwrap().contains("pending"));
}

#[tokio::test]
async fn create_task_for_unknown_user_is_rejected() {
    let response = post_json(
        empty_app(),
        "/api/v1/tasks",
        json!({"title": "Orphan", "user_id": 999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "The selected user_id is invalid.");
}

#[tokio::test]
async fn malformed_json_returns_envelope() {
    let response = post_raw(empty_app(), "/api/v1/tasks", "{\"title\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
    assert_eq!(json["message"], json["error"]);
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_task_returns_task() {
    let app = empty_app();
    let user_id = create_user(&app, "ada", "ada@example.com").await;
    let task_id = create_task(&app, user_id, "Read").await;

    let response = get(app, &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Task retrieved successfully");
    assert_eq!(json["data"]["id"], task_id);
}

#[tokio::test]
async fn get_missing_task_returns_404() {
    let response = get(empty_app(), "/api/v1/tasks/77").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = body_bytes(response).await;
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"success":false,"message":"Task not found","error":"Task not found"}"#
    );
}

#[tokio::test]
async fn invalid_task_ids_return_400() {
    for id in ["0", "-1", "abc"] {
        let response = get(empty_app(), &format!("/api/v1/tasks/{id}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id = {id}");

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid task ID");
    }
}

#[tokio::test]
async fn undecodable_task_id_returns_400_envelope() {
    let app = empty_app();
    let user_id = create_user(&app, "ada", "ada@example.com").await;
    create_task(&app, user_id, "Keep me").await;

    let responses = [
        get(app.clone(), "/api/v1/tasks/%FF").await,
        put_json(app.clone(), "/api/v1/tasks/%FF", json!({"title": "x"})).await,
        delete(app.clone(), "/api/v1/tasks/%FF").await,
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json,
            json!({
                "success": false,
                "message": "Invalid task ID",
                "error": "Invalid task ID"
            })
        );
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_tasks_paginates() {
    let store = Store::new();
    let app = build_test_app(store);
    let user_id = create_user(&app, "ada", "ada@example.com").await;
    for i in 1..=25 {
        create_task(&app, user_id, &format!("Task {i}")).await;
    }

    let response = get(app, "/api/v1/tasks?page=2&limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Tasks retrieved successfully");
    assert_eq!(
        json["pagination"],
        json!({"page": 2, "limit": 10, "total": 25, "totalPages": 3, "hasMore": true})
    );

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(data[0]["title"], "Task 11");
    assert_eq!(data[9]["title"], "Task 20");
}

#[tokio::test]
async fn list_tasks_defaults_and_empty_store() {
    let response = get(empty_app(), "/api/v1/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
    assert_eq!(
        json["pagination"],
        json!({"page": 1, "limit": 10, "total": 0, "totalPages": 1, "hasMore": false})
    );
}

#[tokio::test]
async fn list_tasks_filters_by_user_id() {
    let app = empty_app();
    let ada = create_user(&app, "ada", "ada@example.com").await;
    let grace = create_user(&app, "grace", "grace@example.com").await;
    create_task(&app, ada, "a1").await;
    create_task(&app, grace, "g1").await;
    create_task(&app, ada, "a2").await;

    let response = get(app, &format!("/api/v1/tasks?userId={ada}")).await;
    let json = body_json(response).await;

    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["a1", "a2"]);
    assert_eq!(json["pagination"]["total"], 2);
}

#[tokio::test]
async fn blank_user_filter_lists_every_task() {
    let app = empty_app();
    let ada = create_user(&app, "ada", "ada@example.com").await;
    let grace = create_user(&app, "grace", "grace@example.com").await;
    create_task(&app, ada, "a1").await;
    create_task(&app, grace, "g1").await;

    let response = get(app, "/api/v1/tasks?userId=&page=").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["total"], 2);
}

#[tokio::test]
async fn list_tasks_rejects_out_of_range_limit() {
    let response = get(empty_app(), "/api/v1/tasks?limit=500").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(
        json["errors"]["limit"],
        json!(["The limit must be between 1 and 100."])
    );
    assert!(json.get("pagination").is_none());
}

#[tokio::test]
async fn list_tasks_rejects_non_numeric_page() {
    let response = get(empty_app(), "/api/v1/tasks?page=two").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_task_changes_only_given_fields() {
    let app = empty_app();
    let user_id = create_user(&app, "ada", "ada@example.com").await;
    let task_id = create_task(&app, user_id, "Draft").await;

    let response = put_json(
        app,
        &format!("/api/v1/tasks/{task_id}"),
        json!({"status": "in_progress"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Task updated successfully");
    assert_eq!(json["data"]["title"], "Draft");
    assert_eq!(json["data"]["status"], "in_progress");
}

#[tokio::test]
async fn update_missing_task_returns_404() {
    let response = put_json(empty_app(), "/api/v1/tasks/5", json!({"title": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Task not found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_task_omits_data() {
    let app = empty_app();
    let user_id = create_user(&app, "ada", "ada@example.com").await;
    let task_id = create_task(&app, user_id, "Temp").await;

    let response = delete(app.clone(), &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({"success": true, "message": "Task deleted successfully"})
    );

    let again = delete(app, &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
