//! Post entity for SeaORM.
//!
//! `user_id` is a plain column: the posts table carries no foreign key
//! to users, matching the observed storage contract.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub title: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub content: String,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for pantry_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            user_id: model.user_id,
        }
    }
}

impl From<pantry_core::domain::NewPost> for ActiveModel {
    fn from(draft: pantry_core::domain::NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            user_id: Set(draft.user_id),
        }
    }
}
