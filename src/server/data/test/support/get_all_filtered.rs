use super::*;

use crate::server::query::{FilterBuilder, Pagination};
use entity::support_ticket::SupportStatus;
use test_utils::factory::SupportTicketFactory;

/// Tests the status filter used by the pending-only admin view.
///
/// Expected: closed tickets excluded
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SupportTicket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SupportTicketFactory::new(db).build().await?;
    SupportTicketFactory::new(db).build().await?;
    SupportTicketFactory::new(db)
        .status(SupportStatus::Closed)
        .build()
        .await?;

    let condition = FilterBuilder::new()
        .equals(
            entity::support_ticket::Column::Status,
            Some(SupportStatus::Pending),
        )
        .build();

    let (tickets, total) = SupportRepository::new(db)
        .get_all_filtered(condition, &Pagination::default())
        .await?;

    assert_eq!(total, 2);
    assert!(tickets
        .iter()
        .all(|ticket| ticket.status == SupportStatus::Pending));

    Ok(())
}

/// Tests the free-text search over reporter name, email, and subject.
///
/// Expected: matches on subject included
#[tokio::test]
async fn searches_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SupportTicket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SupportTicketFactory::new(db)
        .subject("Refund request for booking")
        .build()
        .await?;
    SupportTicketFactory::new(db)
        .subject("Lost luggage")
        .build()
        .await?;

    let condition = FilterBuilder::new()
        .search(
            Some("refund"),
            &[
                entity::support_ticket::Column::FullName,
                entity::support_ticket::Column::Email,
                entity::support_ticket::Column::Subject,
            ],
        )
        .build();

    let (_, total) = SupportRepository::new(db)
        .get_all_filtered(condition, &Pagination::default())
        .await?;

    assert_eq!(total, 1);

    Ok(())
}
