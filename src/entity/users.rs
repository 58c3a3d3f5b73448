use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum Step {
    #[default]
    #[sea_orm(string_value = "ASK_NAME")]
    #[serde(rename = "ASK_NAME")]
    AskName,
    #[sea_orm(string_value = "ASK_PHONE")]
    #[serde(rename = "ASK_PHONE")]
    AskPhone,
    #[sea_orm(string_value = "ASK_JOB")]
    #[serde(rename = "ASK_JOB")]
    AskJob,
    #[sea_orm(string_value = "DONE")]
    #[serde(rename = "DONE")]
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub telegram_id: i64,
    pub username: Option<String>,
    pub name: String,
    pub phone: String,
    pub job: String,
    pub step: Step,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
