pub mod prelude;
pub mod tasks;
