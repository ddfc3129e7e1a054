//! Task API Gateway
//!
//! reqwest wrappers over the task endpoints, one async function per
//! operation. Every call attaches the session bearer token when one is
//! stored and returns `Result<_, ApiError>`.

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use thiserror::Error;

use crate::models::{Task, TaskStatus};
use crate::session;

/// Base URL of the task API; same-origin `/api/` unless overridden at
/// build time.
const API_BASE: &str = match option_env!("TASKS_API_BASE") {
    Some(base) => base,
    None => "/api/",
};

/// Uniform failure type for every gateway call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("сбой сети: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("{detail} (HTTP {status})")]
    Server { status: u16, detail: String },
}

// ========================
// Request Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    title: &'a str,
    status: TaskStatus,
}

#[derive(Serialize)]
struct UpdateStatusArgs {
    status: TaskStatus,
}

#[derive(Serialize)]
struct BulkMoveArgs {
    from_status: TaskStatus,
    to_status: TaskStatus,
}

#[derive(Serialize)]
struct BulkDeleteArgs {
    status: TaskStatus,
}

/// Absolute URL for an API path. A relative configured base is resolved
/// against the current origin; reqwest rejects relative URLs.
fn url(path: &str) -> String {
    if API_BASE.starts_with("http") {
        return format!("{API_BASE}{path}");
    }
    let origin = web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{API_BASE}{path}")
}

/// Attach the bearer token and translate failures into [`ApiError`].
async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
    let req = match session::access_token() {
        Some(token) => req.bearer_auth(token),
        None => req,
    };
    let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Server { status: status.as_u16(), detail: error_detail(&body) })
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend reports failures as JSON carrying either a `detail` or an
/// `error` field; anything else falls back to a generic message.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|d| d.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| "запрос отклонён сервером".to_string())
}

// ========================
// Task Operations
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let resp = send(Client::new().get(url("tasks/"))).await?;
    resp.json().await.map_err(|e| ApiError::Transport(e.to_string()))
}

/// Create a task. New tasks always enter the board in the `new` column.
pub async fn create_task(title: &str) -> Result<Task, ApiError> {
    let args = CreateTaskArgs { title, status: TaskStatus::New };
    let resp = send(Client::new().post(url("tasks/")).json(&args)).await?;
    resp.json().await.map_err(|e| ApiError::Transport(e.to_string()))
}

pub async fn update_task_status(id: u32, status: TaskStatus) -> Result<Task, ApiError> {
    let args = UpdateStatusArgs { status };
    let resp = send(Client::new().patch(url(&format!("tasks/{id}/"))).json(&args)).await?;
    resp.json().await.map_err(|e| ApiError::Transport(e.to_string()))
}

pub async fn delete_task(id: u32) -> Result<(), ApiError> {
    send(Client::new().delete(url(&format!("tasks/{id}/")))).await?;
    Ok(())
}

/// Move every task currently in `from_status` to `to_status`. The set is
/// evaluated server-side at processing time; no ids travel with the call.
pub async fn bulk_move(from_status: TaskStatus, to_status: TaskStatus) -> Result<(), ApiError> {
    let args = BulkMoveArgs { from_status, to_status };
    send(Client::new().post(url("tasks/bulk_move/")).json(&args)).await?;
    Ok(())
}

/// Delete every task currently in `status`, server-side.
pub async fn bulk_delete(status: TaskStatus) -> Result<(), ApiError> {
    let args = BulkDeleteArgs { status };
    send(Client::new().post(url("tasks/bulk_delete/")).json(&args)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_detail_field() {
        let body = r#"{"detail": "Authentication credentials were not provided."}"#;
        assert_eq!(error_detail(body), "Authentication credentials were not provided.");
    }

    #[test]
    fn test_error_detail_falls_back_to_error_field() {
        let body = r#"{"error": "Both 'from_status' and 'to_status' are required"}"#;
        assert_eq!(error_detail(body), "Both 'from_status' and 'to_status' are required");
    }

    #[test]
    fn test_error_detail_generic_for_opaque_bodies() {
        assert_eq!(error_detail("<html>502 Bad Gateway</html>"), "запрос отклонён сервером");
        assert_eq!(error_detail(r#"{"detail": 42}"#), "запрос отклонён сервером");
        assert_eq!(error_detail(""), "запрос отклонён сервером");
    }

    #[test]
    fn test_create_args_fix_status_to_new() {
        let json = serde_json::to_string(&CreateTaskArgs { title: "Т1", status: TaskStatus::New }).unwrap();
        assert_eq!(json, r#"{"title":"Т1","status":"new"}"#);
    }

    #[test]
    fn test_bulk_args_use_the_wire_status_names() {
        let json = serde_json::to_string(&BulkMoveArgs {
            from_status: TaskStatus::New,
            to_status: TaskStatus::InProgress,
        })
        .unwrap();
        assert_eq!(json, r#"{"from_status":"new","to_status":"in_progress"}"#);

        let json = serde_json::to_string(&BulkDeleteArgs { status: TaskStatus::Done }).unwrap();
        assert_eq!(json, r#"{"status":"done"}"#);
    }
}
