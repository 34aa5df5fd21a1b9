use super::ServiceError;
use crate::domain::task_form::{self, RawTaskForm};
use crate::entities::tasks;
use crate::repositories::tasks::{NewTaskRecord, TaskRepository};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait TaskService: Send + Sync {
    async fn create_task(&self, form: RawTaskForm<'_>) -> Result<tasks::Model, ServiceError>;

    async fn list_tasks(&self) -> Result<Vec<tasks::Model>, ServiceError>;

    async fn get_task(&self, id: i32) -> Result<tasks::Model, ServiceError>;

    async fn update_task(
        &self,
        id: i32,
        form: RawTaskForm<'_>,
    ) -> Result<tasks::Model, ServiceError>;

    async fn complete_task(&self, id: i32) -> Result<tasks::Model, ServiceError>;

    async fn delete_task(&self, id: i32) -> Result<(), ServiceError>;
}

pub struct TaskServiceImpl {
    repo: Arc<dyn TaskRepository>,
}

impl TaskServiceImpl {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    async fn fetch_task(&self, id: i32) -> Result<tasks::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::new(404, "Task not found"))
    }
}

#[async_trait]
impl TaskService for TaskServiceImpl {
    async fn create_task(&self, form: RawTaskForm<'_>) -> Result<tasks::Model, ServiceError> {
        let valid = task_form::validate_new(form)?;
        let task = self
            .repo
            .insert(NewTaskRecord {
                nom_task: &valid.nom_task,
                nom_employe: &valid.nom_employe,
                date_debut: valid.date_debut,
                date_fin: valid.date_fin,
            })
            .await?;
        Ok(task)
    }

    async fn list_tasks(&self) -> Result<Vec<tasks::Model>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    async fn get_task(&self, id: i32) -> Result<tasks::Model, ServiceError> {
        self.fetch_task(id).await
    }

    async fn update_task(
        &self,
        id: i32,
        form: RawTaskForm<'_>,
    ) -> Result<tasks::Model, ServiceError> {
        let task = self.fetch_task(id).await?;
        let changes = task_form::validate_changes(form)?;
        if changes.is_empty() {
            return Ok(task);
        }
        Ok(self.repo.update(task, changes).await?)
    }

    async fn complete_task(&self, id: i32) -> Result<tasks::Model, ServiceError> {
        let task = self.fetch_task(id).await?;
        Ok(self.repo.set_complete(task).await?)
    }

    async fn delete_task(&self, id: i32) -> Result<(), ServiceError> {
        let task = self.fetch_task(id).await?;
        Ok(self.repo.delete(task).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_map_to_bad_request_errors() {
        let errors = task_form::validate_new(RawTaskForm::default()).unwrap_err();
        let err = ServiceError::from(errors);

        assert_eq!(err.code, 400);
        assert!(err.message.contains("Task name is required"));
        assert!(err.message.contains("End date is required"));

        let data = err.data.unwrap();
        assert_eq!(
            data["fields"],
            serde_json::json!(["nomTask", "nomEmploye", "dateDebut", "dateFin"])
        );
    }

    #[test]
    fn single_field_failures_keep_a_plain_message() {
        let errors = task_form::validate_changes(RawTaskForm {
            date_fin: Some("next week"),
            ..Default::default()
        })
        .unwrap_err();
        let err = ServiceError::from(errors);

        assert_eq!(err.code, 400);
        assert_eq!(err.message, "End date is not a valid date");
        assert_eq!(err.data.unwrap()["fields"], serde_json::json!(["dateFin"]));
    }

    #[test]
    fn database_errors_map_to_internal_errors() {
        let err = ServiceError::from(sea_orm::DbErr::Custom("connection lost".to_string()));
        assert_eq!(err.code, 500);
        assert!(err.message.contains("connection lost"));
        assert!(err.data.is_none());
    }
}
