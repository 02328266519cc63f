use super::*;

use crate::server::model::vehicle::UpdateVehicleDto;
use test_utils::factory::create_vehicle;

fn empty_update() -> UpdateVehicleDto {
    UpdateVehicleDto {
        name: None,
        plate_number: None,
        seat_count: None,
        base_price: None,
        image: None,
        is_active: None,
    }
}

/// Tests that a partial update only touches the provided fields.
///
/// Expected: seat count changed, plate untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = create_vehicle(db).await?;
    let plate_number = vehicle.plate_number.clone();

    let updated = VehicleRepository::new(db)
        .update(
            &vehicle.id,
            UpdateVehicleDto {
                seat_count: Some(7),
                ..empty_update()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.seat_count, 7);
    assert_eq!(updated.plate_number, plate_number);

    Ok(())
}

/// Tests updating a vehicle that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VehicleRepository::new(db)
        .update("missing", empty_update())
        .await?;

    assert!(result.is_none());

    Ok(())
}
