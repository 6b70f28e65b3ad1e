//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// One JSON document of any collection
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// Collection name (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,

    /// Record id (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Serialized entity without sidecars
    pub body: Json,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
