use crate::repositories::tasks::TaskRepositoryImpl;
use crate::services::tasks::TaskServiceImpl;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repositories {
    pub task_repo: Arc<dyn crate::repositories::tasks::TaskRepository>,
}

#[derive(Clone)]
pub struct Services {
    pub task_service: Arc<dyn crate::services::tasks::TaskService>,
}

pub fn build_repositories(db: Arc<DatabaseConnection>) -> Repositories {
    Repositories {
        task_repo: Arc::new(TaskRepositoryImpl::new(db)),
    }
}

pub fn build_services(repos: &Repositories) -> Services {
    Services {
        task_service: Arc::new(TaskServiceImpl::new(repos.task_repo.clone())),
    }
}
