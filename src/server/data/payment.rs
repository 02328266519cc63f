//! Payment data repository for database operations.

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::query::Pagination;

/// Repository providing database operations for payment records.
pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's settled payment records, newest first, with pagination.
    ///
    /// Only PAID records appear in the personal transaction history;
    /// pending and refunded ones are admin-dashboard concerns.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the payment records
    /// - `pagination` - Resolved page, limit, and sort parameters
    ///
    /// # Returns
    /// - `Ok((payments, total))` - Page of payments and the total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_user(
        &self,
        user_id: &str,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::payment::Model>, u64), DbErr> {
        let condition = Condition::all()
            .add(entity::payment::Column::UserId.eq(user_id))
            .add(entity::payment::Column::Status.eq(entity::payment::PaymentStatus::Paid));
        self.get_all_filtered(condition, pagination).await
    }

    /// Gets payments matching a filter condition with pagination.
    ///
    /// # Arguments
    /// - `condition` - Composed filter condition
    /// - `pagination` - Resolved page, limit, and sort parameters
    ///
    /// # Returns
    /// - `Ok((payments, total))` - Page of payments and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_filtered(
        &self,
        condition: Condition,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::payment::Model>, u64), DbErr> {
        let total = entity::prelude::Payment::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let payments = pagination
            .apply(entity::prelude::Payment::find().filter(condition))
            .all(self.db)
            .await?;

        Ok((payments, total))
    }
}
