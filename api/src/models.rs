use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::domain::task_form::RawTaskForm;
use common::entities::tasks;
use common::services::ServiceError;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks`. Everything is optional at this level so the
/// validation layer can report all missing fields together instead of
/// failing on the first one during deserialization. `complete` is not
/// accepted here; a task always starts open.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTaskRequest {
    pub nom_task: Option<String>,
    pub nom_employe: Option<String>,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
}

impl CreateTaskRequest {
    pub fn as_form(&self) -> RawTaskForm<'_> {
        RawTaskForm {
            nom_task: self.nom_task.as_deref(),
            nom_employe: self.nom_employe.as_deref(),
            date_debut: self.date_debut.as_deref(),
            date_fin: self.date_fin.as_deref(),
        }
    }
}

/// Body of `PUT /api/tasks/:id`. Absent fields keep their stored value.
/// `complete` is deliberately not a member: completion state only changes
/// through `PATCH /api/tasks/:id/complete`, and a body that tries to smuggle
/// it in is rejected whole.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTaskRequest {
    pub nom_task: Option<String>,
    pub nom_employe: Option<String>,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
}

impl UpdateTaskRequest {
    pub fn as_form(&self) -> RawTaskForm<'_> {
        RawTaskForm {
            nom_task: self.nom_task.as_deref(),
            nom_employe: self.nom_employe.as_deref(),
            date_debut: self.date_debut.as_deref(),
            date_fin: self.date_fin.as_deref(),
        }
    }
}

#[derive(Serialize)]
pub struct CompleteTaskResponse {
    pub message: String,
    pub task: tasks::Model,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Service failures rendered onto the wire. Not-found errors use a
/// `{"message": ...}` body, everything else `{"error": ...}` plus the
/// offending field names when the failure came from form validation.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ServiceError {
            code,
            message,
            data,
        } = self.0;
        let status =
            StatusCode::from_u16(code as u16).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!("request failed: {}", message);
        }

        let body = if status == StatusCode::NOT_FOUND {
            serde_json::json!({ "message": message })
        } else {
            let mut body = serde_json::json!({ "error": message });
            if let Some(serde_json::Value::Object(extra)) = data {
                for (key, value) in extra {
                    body[key.as_str()] = value;
                }
            }
            body
        };

        (status, Json(body)).into_response()
    }
}
