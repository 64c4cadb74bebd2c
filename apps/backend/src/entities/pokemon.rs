use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "SmallInteger")]
    pub gen: i16,
    #[sea_orm(column_name = "height_dm")]
    pub height_dm: i32,
    #[sea_orm(column_name = "weight_hg")]
    pub weight_hg: i32,
    pub types: Vec<String>,
    pub habitat: String,
    pub color: String,
    #[sea_orm(column_name = "evolution_stage", column_type = "SmallInteger")]
    pub evolution_stage: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
