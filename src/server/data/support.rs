//! Support ticket data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::{model::support::CreateSupportTicketDto, query::Pagination};

/// Repository providing database operations for support tickets.
pub struct SupportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new ticket in PENDING status.
    ///
    /// # Arguments
    /// - `dto` - Reporter details and the request description
    ///
    /// # Returns
    /// - `Ok(Model)` - The created ticket row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        dto: CreateSupportTicketDto,
    ) -> Result<entity::support_ticket::Model, DbErr> {
        let now = Utc::now();
        entity::support_ticket::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            full_name: ActiveValue::Set(dto.full_name),
            email: ActiveValue::Set(dto.email),
            contact_number: ActiveValue::Set(dto.contact_number),
            subject: ActiveValue::Set(dto.subject),
            description: ActiveValue::Set(dto.description),
            status: ActiveValue::Set(entity::support_ticket::SupportStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find_by_id(id).one(self.db).await
    }

    /// Marks a ticket CLOSED and returns the refreshed row, or `None` when
    /// the ticket does not exist.
    ///
    /// # Arguments
    /// - `id` - Id of the ticket
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Closed ticket
    /// - `Ok(None)` - No ticket with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn close(&self, id: &str) -> Result<Option<entity::support_ticket::Model>, DbErr> {
        let Some(ticket) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::support_ticket::ActiveModel = ticket.into();
        active.status = ActiveValue::Set(entity::support_ticket::SupportStatus::Closed);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Gets tickets matching a filter condition with pagination.
    ///
    /// # Arguments
    /// - `condition` - Composed filter condition
    /// - `pagination` - Resolved page, limit, and sort parameters
    ///
    /// # Returns
    /// - `Ok((tickets, total))` - Page of tickets and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_filtered(
        &self,
        condition: Condition,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::support_ticket::Model>, u64), DbErr> {
        let total = entity::prelude::SupportTicket::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let tickets = pagination
            .apply(entity::prelude::SupportTicket::find().filter(condition))
            .all(self.db)
            .await?;

        Ok((tickets, total))
    }
}
