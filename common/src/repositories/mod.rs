pub mod tasks;

pub use tasks::{NewTaskRecord, TaskRepository, TaskRepositoryImpl};
