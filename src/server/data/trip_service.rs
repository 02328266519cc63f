//! Trip service data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::{
    model::trip_service::{CreateTripServiceParam, UpdateTripServiceDto},
    query::Pagination,
};

/// Repository providing database operations for the trip service catalog.
pub struct TripServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripServiceRepository<'a> {
    /// Creates a new TripServiceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TripServiceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new catalog entry in ACTIVE status.
    ///
    /// # Arguments
    /// - `param` - Listing fields and the owning agent's id
    ///
    /// # Returns
    /// - `Ok(Model)` - The created trip service row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateTripServiceParam,
    ) -> Result<entity::trip_service::Model, DbErr> {
        let now = Utc::now();
        entity::trip_service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(param.user_id),
            from_location: ActiveValue::Set(param.from_location),
            to_location: ActiveValue::Set(param.to_location),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            route_type: ActiveValue::Set(param.route_type),
            service_type: ActiveValue::Set(param.service_type),
            is_popular: ActiveValue::Set(false),
            status: ActiveValue::Set(entity::trip_service::ServiceStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Finds a catalog entry by id.
    ///
    /// # Arguments
    /// - `id` - Id of the trip service
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Entry found
    /// - `Ok(None)` - No entry with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::trip_service::Model>, DbErr> {
        entity::prelude::TripService::find_by_id(id).one(self.db).await
    }

    /// Applies a partial update and returns the refreshed row.
    ///
    /// Absent fields are left untouched. Returns `None` when the entry does
    /// not exist.
    ///
    /// # Arguments
    /// - `id` - Id of the trip service
    /// - `dto` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated row
    /// - `Ok(None)` - No entry with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateTripServiceDto,
    ) -> Result<Option<entity::trip_service::Model>, DbErr> {
        let Some(service) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::trip_service::ActiveModel = service.into();
        if let Some(from_location) = dto.from_location {
            active.from_location = ActiveValue::Set(from_location);
        }
        if let Some(to_location) = dto.to_location {
            active.to_location = ActiveValue::Set(to_location);
        }
        if let Some(description) = dto.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = dto.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(route_type) = dto.route_type {
            active.route_type = ActiveValue::Set(Some(route_type));
        }
        if let Some(service_type) = dto.service_type {
            active.service_type = ActiveValue::Set(service_type);
        }
        if let Some(is_popular) = dto.is_popular {
            active.is_popular = ActiveValue::Set(is_popular);
        }
        if let Some(status) = dto.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a catalog entry.
    ///
    /// # Arguments
    /// - `id` - Id of the trip service
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No entry with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::TripService::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets catalog entries matching a filter condition with pagination.
    ///
    /// # Arguments
    /// - `condition` - Composed filter condition
    /// - `pagination` - Resolved page, limit, and sort parameters
    ///
    /// # Returns
    /// - `Ok((services, total))` - Page of entries and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_filtered(
        &self,
        condition: Condition,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::trip_service::Model>, u64), DbErr> {
        let total = entity::prelude::TripService::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let services = pagination
            .apply(entity::prelude::TripService::find().filter(condition))
            .all(self.db)
            .await?;

        Ok((services, total))
    }

    /// Gets all entries owned by an agent with pagination.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning agent
    /// - `pagination` - Resolved page, limit, and sort parameters
    ///
    /// # Returns
    /// - `Ok((services, total))` - Page of entries and the total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_owner(
        &self,
        user_id: &str,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::trip_service::Model>, u64), DbErr> {
        let condition =
            Condition::all().add(entity::trip_service::Column::UserId.eq(user_id));
        self.get_all_filtered(condition, pagination).await
    }
}
