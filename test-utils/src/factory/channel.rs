//! Channel factory for creating test channel entities.
//!
//! The factory derives the channel key the same way the application does:
//! the two participant ids are sorted lexicographically and concatenated,
//! so the key is identical regardless of argument order.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test channels between two participants.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::channel::ChannelFactory;
///
/// let channel = ChannelFactory::new(&db, &sender.id, &receiver.id)
///     .build()
///     .await?;
/// ```
pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    person1_id: String,
    person2_id: String,
}

impl<'a> ChannelFactory<'a> {
    /// Creates a new ChannelFactory for the given participant pair.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `person1_id` - First participant id
    /// - `person2_id` - Second participant id
    ///
    /// # Returns
    /// - `ChannelFactory` - New factory instance
    pub fn new(
        db: &'a DatabaseConnection,
        person1_id: impl Into<String>,
        person2_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            person1_id: person1_id.into(),
            person2_id: person2_id.into(),
        }
    }

    /// Builds and inserts the channel entity into the database.
    ///
    /// The channel key is derived from the sorted participant ids, so swapping
    /// the constructor arguments produces the same `channel_name`.
    ///
    /// # Returns
    /// - `Ok(entity::channel::Model)` - Created channel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        let mut pair = [self.person1_id.as_str(), self.person2_id.as_str()];
        pair.sort_unstable();
        let channel_name = format!("{}{}", pair[0], pair[1]);

        let now = Utc::now();
        entity::channel::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            channel_name: ActiveValue::Set(channel_name),
            person1_id: ActiveValue::Set(self.person1_id),
            person2_id: ActiveValue::Set(self.person2_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel between two participants with default values.
///
/// Shorthand for `ChannelFactory::new(db, person1_id, person2_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `person1_id` - First participant id
/// - `person2_id` - Second participant id
///
/// # Returns
/// - `Ok(entity::channel::Model)` - Created channel entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_channel(
    db: &DatabaseConnection,
    person1_id: impl Into<String>,
    person2_id: impl Into<String>,
) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db, person1_id, person2_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::user::create_user;

    #[tokio::test]
    async fn derives_commutative_channel_name() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_messaging_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let a = create_user(db).await?;
        let b = create_user(db).await?;

        let channel = create_channel(db, &b.id, &a.id).await?;

        let mut pair = [a.id.as_str(), b.id.as_str()];
        pair.sort_unstable();
        assert_eq!(channel.channel_name, format!("{}{}", pair[0], pair[1]));

        Ok(())
    }
}
