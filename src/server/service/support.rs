//! Support ticket and admin notification flows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        notification::{CreateNotificationParam, NotificationRepository},
        support::SupportRepository,
    },
    error::AppError,
    model::{
        support::{
            CreateSupportTicketDto, NotificationDto, NotificationListQuery, SupportListQuery,
            SupportTicketDto,
        },
    },
    query::{FilterBuilder, Paginated, Pagination},
};

pub struct SupportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a support request and records an admin notification for it.
    ///
    /// Accepted without authentication so visitors can reach out before
    /// creating an account.
    ///
    /// # Arguments
    /// - `dto` - Reporter details and the request description
    ///
    /// # Returns
    /// - `Ok(SupportTicketDto)` - The created ticket
    /// - `Err(AppError)` - Database error
    pub async fn create_ticket(
        &self,
        dto: CreateSupportTicketDto,
    ) -> Result<SupportTicketDto, AppError> {
        let ticket = SupportRepository::new(self.db).create(dto).await?;

        NotificationRepository::new(self.db)
            .create(CreateNotificationParam {
                title: "New support request".to_string(),
                body: format!("{} opened: {}", ticket.full_name, ticket.subject),
                message: Some(ticket.id.clone()),
            })
            .await?;

        Ok(SupportTicketDto::from_entity(ticket))
    }

    /// Gets the open-ticket listing for the admin dashboard.
    ///
    /// Pinned to PENDING status: closed tickets leave the queue. The search
    /// term narrows within that scope.
    ///
    /// # Arguments
    /// - `query` - Search term and pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<SupportTicketDto>)` - Page of open tickets with the total match count
    /// - `Err(AppError)` - Database error
    pub async fn get_all(
        &self,
        query: SupportListQuery,
    ) -> Result<Paginated<SupportTicketDto>, AppError> {
        let pagination = Pagination::from_query(
            query.page.as_deref(),
            query.limit.as_deref(),
            query.sort_by,
            query.sort_order.as_deref(),
        );

        let condition = FilterBuilder::new()
            .search(
                query.search_term.as_deref(),
                &[
                    entity::support_ticket::Column::FullName,
                    entity::support_ticket::Column::Email,
                    entity::support_ticket::Column::Subject,
                ],
            )
            .equals(
                entity::support_ticket::Column::Status,
                Some(entity::support_ticket::SupportStatus::Pending),
            )
            .build();

        let (tickets, total) = SupportRepository::new(self.db)
            .get_all_filtered(condition, &pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            tickets
                .into_iter()
                .map(SupportTicketDto::from_entity)
                .collect(),
        ))
    }

    /// Gets one ticket by id.
    ///
    /// # Arguments
    /// - `id` - Id of the ticket
    ///
    /// # Returns
    /// - `Ok(SupportTicketDto)` - The ticket
    /// - `Err(AppError)` - No ticket with that id
    pub async fn get_by_id(&self, id: &str) -> Result<SupportTicketDto, AppError> {
        let ticket = SupportRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Support ticket not found".to_string()))?;

        Ok(SupportTicketDto::from_entity(ticket))
    }

    /// Closes a ticket.
    ///
    /// # Arguments
    /// - `id` - Id of the ticket
    ///
    /// # Returns
    /// - `Ok(SupportTicketDto)` - The closed ticket
    /// - `Err(AppError)` - No ticket with that id
    pub async fn close_ticket(&self, id: &str) -> Result<SupportTicketDto, AppError> {
        let ticket = SupportRepository::new(self.db)
            .close(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Support ticket not found".to_string()))?;

        Ok(SupportTicketDto::from_entity(ticket))
    }

    /// Gets admin notifications, newest first.
    ///
    /// # Arguments
    /// - `query` - Pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<NotificationDto>)` - Page of notifications
    /// - `Err(AppError)` - Database error
    pub async fn get_notifications(
        &self,
        query: NotificationListQuery,
    ) -> Result<Paginated<NotificationDto>, AppError> {
        let pagination =
            Pagination::from_query(query.page.as_deref(), query.limit.as_deref(), None, None);

        let (notifications, total) = NotificationRepository::new(self.db)
            .get_all(&pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            notifications
                .into_iter()
                .map(NotificationDto::from_entity)
                .collect(),
        ))
    }

    /// Marks a notification read.
    ///
    /// # Arguments
    /// - `id` - Id of the notification
    ///
    /// # Returns
    /// - `Ok(NotificationDto)` - The refreshed notification
    /// - `Err(AppError)` - No notification with that id
    pub async fn mark_notification_read(&self, id: &str) -> Result<NotificationDto, AppError> {
        let notification = NotificationRepository::new(self.db)
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        Ok(NotificationDto::from_entity(notification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::support_ticket::SupportStatus;
    use test_utils::{builder::TestBuilder, factory::SupportTicketFactory};

    /// Tests that the ticket listing is an open-work queue.
    ///
    /// Expected: closed tickets never appear, even with no filters supplied
    #[tokio::test]
    async fn listing_only_shows_pending_tickets() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::SupportTicket)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let open = SupportTicketFactory::new(db).build().await.unwrap();
        SupportTicketFactory::new(db)
            .status(SupportStatus::Closed)
            .build()
            .await
            .unwrap();

        let page = SupportService::new(db)
            .get_all(SupportListQuery::default())
            .await
            .unwrap();

        assert_eq!(page.meta.total, 1);
        assert_eq!(page.data[0].id, open.id);
        assert_eq!(page.data[0].status, SupportStatus::Pending);
    }

    /// Tests that search narrows within the pending scope, not around it.
    ///
    /// Expected: a closed ticket stays hidden even when the term matches it
    #[tokio::test]
    async fn search_does_not_resurface_closed_tickets() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::SupportTicket)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        SupportTicketFactory::new(db)
            .subject("Refund for cancelled trip")
            .status(SupportStatus::Closed)
            .build()
            .await
            .unwrap();

        let page = SupportService::new(db)
            .get_all(SupportListQuery {
                search_term: Some("refund".to_string()),
                ..SupportListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(page.meta.total, 0);
    }
}
