use crate::domain::task_form::TaskChanges;
use crate::entities::{prelude::*, tasks};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

pub struct NewTaskRecord<'a> {
    pub nom_task: &'a str,
    pub nom_employe: &'a str,
    pub date_debut: NaiveDateTime,
    pub date_fin: NaiveDateTime,
}

#[async_trait::async_trait]
pub trait TaskRepository: Send + Sync {
    async fn insert(&self, record: NewTaskRecord<'_>) -> Result<tasks::Model, DbErr>;

    async fn find_all(&self) -> Result<Vec<tasks::Model>, DbErr>;

    async fn find_by_id(&self, id: i32) -> Result<Option<tasks::Model>, DbErr>;

    async fn update(&self, task: tasks::Model, changes: TaskChanges)
        -> Result<tasks::Model, DbErr>;

    async fn set_complete(&self, task: tasks::Model) -> Result<tasks::Model, DbErr>;

    async fn delete(&self, task: tasks::Model) -> Result<(), DbErr>;
}

pub struct TaskRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn insert(&self, record: NewTaskRecord<'_>) -> Result<tasks::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();
        let new_task = tasks::ActiveModel {
            nom_task: Set(record.nom_task.to_string()),
            nom_employe: Set(record.nom_employe.to_string()),
            date_debut: Set(record.date_debut),
            date_fin: Set(record.date_fin),
            complete: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        new_task.insert(self.db.as_ref()).await
    }

    async fn find_all(&self) -> Result<Vec<tasks::Model>, DbErr> {
        Tasks::find()
            .order_by_asc(tasks::Column::Id)
            .all(self.db.as_ref())
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<tasks::Model>, DbErr> {
        Tasks::find_by_id(id).one(self.db.as_ref()).await
    }

    async fn update(
        &self,
        task: tasks::Model,
        changes: TaskChanges,
    ) -> Result<tasks::Model, DbErr> {
        let mut active: tasks::ActiveModel = task.into();
        if let Some(nom_task) = changes.nom_task {
            active.nom_task = Set(nom_task);
        }
        if let Some(nom_employe) = changes.nom_employe {
            active.nom_employe = Set(nom_employe);
        }
        if let Some(date_debut) = changes.date_debut {
            active.date_debut = Set(date_debut);
        }
        if let Some(date_fin) = changes.date_fin {
            active.date_fin = Set(date_fin);
        }
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        active.update(self.db.as_ref()).await
    }

    async fn set_complete(&self, task: tasks::Model) -> Result<tasks::Model, DbErr> {
        let mut active: tasks::ActiveModel = task.into();
        active.complete = Set(true);
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        active.update(self.db.as_ref()).await
    }

    async fn delete(&self, task: tasks::Model) -> Result<(), DbErr> {
        let _ = Tasks::delete_by_id(task.id).exec(self.db.as_ref()).await?;
        Ok(())
    }
}
