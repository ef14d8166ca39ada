//! Tea entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub style: String,
    pub healthy: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for pantry_core::domain::Tea {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            style: model.style,
            healthy: model.healthy,
        }
    }
}

impl From<pantry_core::domain::NewTea> for ActiveModel {
    fn from(draft: pantry_core::domain::NewTea) -> Self {
        Self {
            id: NotSet,
            style: Set(draft.style),
            healthy: Set(draft.healthy),
        }
    }
}
