//! Beer entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "beers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub style: String,
    pub alcohol: f64,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub cereal: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for pantry_core::domain::Beer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            style: model.style,
            alcohol: model.alcohol,
            cereal: model.cereal,
        }
    }
}

impl From<pantry_core::domain::NewBeer> for ActiveModel {
    fn from(draft: pantry_core::domain::NewBeer) -> Self {
        Self {
            id: NotSet,
            style: Set(draft.style),
            alcohol: Set(draft.alcohol),
            cereal: Set(draft.cereal),
        }
    }
}
