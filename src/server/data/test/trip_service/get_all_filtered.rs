use super::*;

use crate::server::query::{FilterBuilder, Pagination};
use entity::trip_service::ServiceType;
use entity::user::UserRole;
use test_utils::factory::{TripServiceFactory, UserFactory};

/// Tests the price range filter on the catalog listing.
///
/// Expected: only listings inside the closed range survive
#[tokio::test]
async fn filters_by_price_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = UserFactory::new(db).role(UserRole::Agent).build().await?;
    for price in [50.0, 150.0, 500.0] {
        TripServiceFactory::new(db, &agent.id).price(price).build().await?;
    }

    let condition = FilterBuilder::new()
        .numeric_range(entity::trip_service::Column::Price, Some(100.0), Some(200.0))
        .build();

    let (services, total) = TripServiceRepository::new(db)
        .get_all_filtered(condition, &Pagination::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(services[0].price, 150.0);

    Ok(())
}

/// Tests combining a location search with a service type filter.
///
/// Expected: both clauses apply, AND semantics at the top level
#[tokio::test]
async fn combines_search_and_type_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = UserFactory::new(db).role(UserRole::Agent).build().await?;
    TripServiceFactory::new(db, &agent.id)
        .from_location("Geneva")
        .service_type(ServiceType::DayTrip)
        .build()
        .await?;
    TripServiceFactory::new(db, &agent.id)
        .from_location("Geneva")
        .service_type(ServiceType::ByTheHour)
        .build()
        .await?;
    TripServiceFactory::new(db, &agent.id)
        .from_location("Zurich")
        .service_type(ServiceType::DayTrip)
        .build()
        .await?;

    let condition = FilterBuilder::new()
        .search(
            Some("geneva"),
            &[
                entity::trip_service::Column::FromLocation,
                entity::trip_service::Column::ToLocation,
            ],
        )
        .equals(
            entity::trip_service::Column::ServiceType,
            Some(ServiceType::DayTrip),
        )
        .build();

    let (services, total) = TripServiceRepository::new(db)
        .get_all_filtered(condition, &Pagination::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(services[0].from_location, "Geneva");
    assert_eq!(services[0].service_type, ServiceType::DayTrip);

    Ok(())
}

/// Tests the owner-scoped listing.
///
/// Expected: only the requested agent's listings, others excluded
#[tokio::test]
async fn scopes_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = UserFactory::new(db).role(UserRole::Agent).build().await?;
    let other = UserFactory::new(db).role(UserRole::Agent).build().await?;

    TripServiceFactory::new(db, &agent.id).build().await?;
    TripServiceFactory::new(db, &agent.id).build().await?;
    TripServiceFactory::new(db, &other.id).build().await?;

    let (services, total) = TripServiceRepository::new(db)
        .get_by_owner(&agent.id, &Pagination::default())
        .await?;

    assert_eq!(total, 2);
    assert!(services.iter().all(|service| service.user_id == agent.id));

    Ok(())
}
