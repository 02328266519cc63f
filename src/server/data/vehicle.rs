//! Vehicle data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto},
    query::Pagination,
};

/// Repository providing database operations for the vehicle fleet.
pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle, active by default.
    pub async fn create(&self, dto: CreateVehicleDto) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(dto.name),
            plate_number: ActiveValue::Set(dto.plate_number),
            seat_count: ActiveValue::Set(dto.seat_count),
            base_price: ActiveValue::Set(dto.base_price),
            image: ActiveValue::Set(dto.image),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    /// Applies a partial update and returns the refreshed row, or `None`
    /// when the vehicle does not exist.
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateVehicleDto,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let Some(vehicle) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::vehicle::ActiveModel = vehicle.into();
        if let Some(name) = dto.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(plate_number) = dto.plate_number {
            active.plate_number = ActiveValue::Set(plate_number);
        }
        if let Some(seat_count) = dto.seat_count {
            active.seat_count = ActiveValue::Set(seat_count);
        }
        if let Some(base_price) = dto.base_price {
            active.base_price = ActiveValue::Set(base_price);
        }
        if let Some(image) = dto.image {
            active.image = ActiveValue::Set(Some(image));
        }
        if let Some(is_active) = dto.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets vehicles matching a filter condition with pagination.
    pub async fn get_all_filtered(
        &self,
        condition: Condition,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::vehicle::Model>, u64), DbErr> {
        let total = entity::prelude::Vehicle::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let vehicles = pagination
            .apply(entity::prelude::Vehicle::find().filter(condition))
            .all(self.db)
            .await?;

        Ok((vehicles, total))
    }
}
