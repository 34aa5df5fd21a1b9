use crate::models::{
    ApiError, CompleteTaskResponse, CreateTaskRequest, MessageResponse, UpdateTaskRequest,
};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use common::domain::task_form::{FieldSpec, TASK_FIELDS};
use common::entities::tasks;
use common::services::ServiceError;
use std::sync::Arc;

pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .db
        .ping()
        .await
        .map_err(|e| ApiError::from(ServiceError::from(e)))?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

pub async fn task_schema() -> Json<&'static [FieldSpec]> {
    Json(TASK_FIELDS.as_slice())
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<tasks::Model>), ApiError> {
    let task = state
        .services
        .task_service
        .create_task(payload.as_form())
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<tasks::Model>>, ApiError> {
    let tasks = state.services.task_service.list_tasks().await?;
    Ok(Json(tasks))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<tasks::Model>, ApiError> {
    let task = state.services.task_service.get_task(id).await?;
    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<tasks::Model>, ApiError> {
    let task = state
        .services
        .task_service
        .update_task(id, payload.as_form())
        .await?;
    Ok(Json(task))
}

pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<CompleteTaskResponse>, ApiError> {
    let task = state.services.task_service.complete_task(id).await?;
    Ok(Json(CompleteTaskResponse {
        message: "Task marked as complete".to_string(),
        task,
    }))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.services.task_service.delete_task(id).await?;
    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
