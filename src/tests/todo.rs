use std::fs;
use std::path::PathBuf;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use crate::config::{test_config, AppKind};
use crate::routes::todo_router;
use crate::state::TodoState;
use super::{body_string, get, location, post_form, send};

fn app(seed: &str) -> (TempDir, PathBuf, Router) {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), AppKind::Todo);
    let path = PathBuf::from(&config.storage.tasks_file);
    if !seed.is_empty() {
        fs::write(&path, seed).unwrap();
    }
    (dir, path, todo_router(TodoState::new(&config)))
}

#[tokio::test]
async fn index_lists_tasks_with_positions() {
    let (_dir, _path, app) = app("a\nb\n");
    let response = send(&app, get("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"href="/edit/1""#));
    assert!(body.contains(r#"action="/delete/0""#));
    assert!(body.contains("To-Do List (2)"));
}

#[tokio::test]
async fn add_appends_and_ignores_blank() {
    let (_dir, path, app) = app("");
    let response = send(&app, post_form("/add", "task=write+report", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    send(&app, post_form("/add", "task=+++", None)).await;
    assert_eq!(fs::read_to_string(&path).unwrap(), "write report\n");

    let response = send(&app, get("/add", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn edit_replaces_task_at_index() {
    let (_dir, path, app) = app("a\nb\nc\n");
    let response = send(&app, get("/edit/1", None)).await;
    assert!(body_string(response).await.contains(r#"value="b""#));

    let response = send(&app, post_form("/edit/1", "task=x", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nx\nc\n");
}

#[tokio::test]
async fn edit_page_past_the_end_is_empty() {
    let (_dir, _path, app) = app("a\n");
    let response = send(&app, get("/edit/5", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains(r#"name="task" value="""#));
}

#[tokio::test]
async fn edit_past_the_end_is_not_found() {
    let (_dir, path, app) = app("a\n");
    let response = send(&app, post_form("/edit/5", "task=z", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
}

#[tokio::test]
async fn delete_without_form_body_removes_by_position() {
    let (_dir, path, app) = app("a\nb\nc\n");
    let request = Request::post("/delete/0").body(Body::empty()).unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(fs::read_to_string(&path).unwrap(), "b\nc\n");

    // Out of range is ignored
    let response = send(&app, post_form("/delete/10", "", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(fs::read_to_string(&path).unwrap(), "b\nc\n");
}

#[tokio::test]
async fn stale_delete_is_refused() {
    let (_dir, path, app) = app("a\nb\nc\n");
    // Two pages rendered the same list; the first delete shifts "b" into index 0
    send(&app, post_form("/delete/0", "expected=a", None)).await;
    let response = send(&app, post_form("/delete/0", "expected=a", None)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(fs::read_to_string(&path).unwrap(), "b\nc\n");

    let response = send(&app, post_form("/edit/0", "task=q&expected=a", None)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn unparsable_index_is_not_found() {
    let (_dir, path, app) = app("a\nb\n");
    let response = send(&app, post_form("/delete/-1", "", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = send(&app, get("/edit/abc", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = send(&app, post_form("/edit/-1", "task=x", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
}

#[tokio::test]
async fn missing_task_field_is_bad_request() {
    let (_dir, path, app) = app("a\n");
    let response = send(&app, post_form("/add", "", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let response = send(&app, post_form("/edit/0", "expected=a", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
}

#[tokio::test]
async fn blank_line_in_file_keeps_later_indices() {
    let (_dir, path, app) = app("a\n\nc\n");
    let response = send(&app, get("/edit/2", None)).await;
    assert!(body_string(response).await.contains(r#"value="c""#));

    send(&app, post_form("/delete/0", "expected=a", None)).await;
    assert_eq!(fs::read_to_string(&path).unwrap(), "\nc\n");
}
