use sea_orm::{Database, DatabaseConnection, DbErr};

/// Opens the database connection.
///
/// Schema management does not happen here: the versioned migrations in the
/// `migration` crate are applied by the `setup` binary before the API is
/// started.
pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    tracing::debug!("database connection established");
    Ok(db)
}
