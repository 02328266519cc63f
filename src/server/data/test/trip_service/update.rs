use super::*;

use crate::server::model::trip_service::UpdateTripServiceDto;
use entity::trip_service::ServiceStatus;
use test_utils::factory::create_trip_service_with_owner;

fn empty_update() -> UpdateTripServiceDto {
    UpdateTripServiceDto {
        from_location: None,
        to_location: None,
        description: None,
        price: None,
        route_type: None,
        service_type: None,
        is_popular: None,
        status: None,
    }
}

/// Tests that a partial update only touches the provided fields.
///
/// Expected: price and status changed, locations untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, service) = create_trip_service_with_owner(db).await?;
    let from_location = service.from_location.clone();

    let updated = TripServiceRepository::new(db)
        .update(
            &service.id,
            UpdateTripServiceDto {
                price: Some(275.0),
                status: Some(ServiceStatus::Inactive),
                ..empty_update()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 275.0);
    assert_eq!(updated.status, ServiceStatus::Inactive);
    assert_eq!(updated.from_location, from_location);

    Ok(())
}

/// Tests updating a listing that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TripServiceRepository::new(db)
        .update("missing", empty_update())
        .await?;

    assert!(result.is_none());

    Ok(())
}
