use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The fixed set of editable static pages.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum StaticPageKind {
    #[sea_orm(string_value = "TERMS")]
    #[serde(rename = "TERMS")]
    Terms,
    #[sea_orm(string_value = "PRIVACY")]
    #[serde(rename = "PRIVACY")]
    Privacy,
    #[sea_orm(string_value = "REFUND")]
    #[serde(rename = "REFUND")]
    Refund,
    #[sea_orm(string_value = "ABOUT")]
    #[serde(rename = "ABOUT")]
    About,
}

/// Singleton-per-kind static content (terms, privacy policy, refund policy,
/// about). The kind carries a unique index; writes are upserts keyed on it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "static_page")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub kind: StaticPageKind,
    pub content: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
