//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test vehicles with customizable fields.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    plate_number: String,
    seat_count: i32,
    base_price: f64,
    is_active: bool,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle {id}"` where id is auto-incremented
    /// - plate_number: `"PLATE-{id}"`
    /// - seat_count: `4`
    /// - base_price: `50.0`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `VehicleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            plate_number: format!("PLATE-{}", id),
            seat_count: 4,
            base_price: 50.0,
            is_active: true,
        }
    }

    /// Sets the vehicle name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seat count.
    pub fn seat_count(mut self, seat_count: i32) -> Self {
        self.seat_count = seat_count;
        self
    }

    /// Sets the base price.
    pub fn base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    /// Sets whether the vehicle is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(self.name),
            plate_number: ActiveValue::Set(self.plate_number),
            seat_count: ActiveValue::Set(self.seat_count),
            base_price: ActiveValue::Set(self.base_price),
            image: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
///
/// Shorthand for `VehicleFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::vehicle::Model)` - Created vehicle entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
