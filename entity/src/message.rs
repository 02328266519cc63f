use sea_orm::entity::prelude::*;

/// A message inside a channel. Messages are append-only: created on send,
/// never mutated or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Derived channel key this message belongs to.
    pub channel_name: String,
    pub sender_id: String,
    pub body: Option<String>,
    /// Ordered attachment URIs, stored as a JSON array.
    pub files: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::channel::Entity",
        from = "Column::ChannelName",
        to = "super::channel::Column::ChannelName"
    )]
    Channel,
}

impl Related<super::channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Channel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
