use sea_orm::entity::prelude::*;

/// A 1:1 conversation between two participants.
///
/// `channel_name` is the commutative key derived from the two participant ids
/// (sorted lexicographically, then concatenated) and carries a unique index so
/// that concurrent first-contact sends cannot create duplicate rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "channel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub channel_name: String,
    pub person1_id: String,
    pub person2_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::message::Entity")]
    Message,
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
