pub use super::tasks::Entity as Tasks;
