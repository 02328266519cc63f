use super::*;

use entity::support_ticket::SupportStatus;
use test_utils::factory::create_support_ticket;

/// Tests closing a pending ticket.
///
/// Expected: status flips to CLOSED
#[tokio::test]
async fn closes_pending_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SupportTicket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = create_support_ticket(db).await?;
    assert_eq!(ticket.status, SupportStatus::Pending);

    let closed = SupportRepository::new(db).close(&ticket.id).await?.unwrap();
    assert_eq!(closed.status, SupportStatus::Closed);

    Ok(())
}

/// Tests closing a ticket that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SupportTicket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SupportRepository::new(db).close("missing").await?;
    assert!(result.is_none());

    Ok(())
}
