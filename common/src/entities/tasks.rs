use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The persisted Task record.
///
/// Serialized form is the wire contract: camelCase names (`nomTask`,
/// `dateDebut`, ...) with dates as ISO-8601 strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom_task: String,
    pub nom_employe: String,
    pub date_debut: DateTime,
    pub date_fin: DateTime,
    pub complete: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
