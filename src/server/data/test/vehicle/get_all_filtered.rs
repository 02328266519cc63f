use super::*;

use crate::server::query::{FilterBuilder, Pagination};
use test_utils::factory::VehicleFactory;

/// Tests the active-only filter on the fleet listing.
///
/// Expected: retired vehicles excluded
#[tokio::test]
async fn filters_by_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VehicleFactory::new(db).build().await?;
    VehicleFactory::new(db).active(false).build().await?;

    let condition = FilterBuilder::new()
        .equals(entity::vehicle::Column::IsActive, Some(true))
        .build();

    let (vehicles, total) = VehicleRepository::new(db)
        .get_all_filtered(condition, &Pagination::default())
        .await?;

    assert_eq!(total, 1);
    assert!(vehicles[0].is_active);

    Ok(())
}

/// Tests the base price range filter.
///
/// Expected: one-sided lower bound keeps only pricier vehicles
#[tokio::test]
async fn filters_by_price_floor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VehicleFactory::new(db).base_price(80.0).build().await?;
    VehicleFactory::new(db).base_price(220.0).build().await?;

    let condition = FilterBuilder::new()
        .numeric_range(entity::vehicle::Column::BasePrice, Some(100.0), None)
        .build();

    let (vehicles, total) = VehicleRepository::new(db)
        .get_all_filtered(condition, &Pagination::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(vehicles[0].base_price, 220.0);

    Ok(())
}
