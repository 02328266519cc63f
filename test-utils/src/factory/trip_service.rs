//! Trip service factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::trip_service::{ServiceStatus, ServiceType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test trip services with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::trip_service::TripServiceFactory;
///
/// let service = TripServiceFactory::new(&db, &agent.id)
///     .from_location("Geneva")
///     .to_location("Zermatt")
///     .price(420.0)
///     .build()
///     .await?;
/// ```
pub struct TripServiceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    from_location: String,
    to_location: String,
    description: Option<String>,
    price: f64,
    route_type: Option<String>,
    service_type: ServiceType,
    is_popular: bool,
    status: ServiceStatus,
}

impl<'a> TripServiceFactory<'a> {
    /// Creates a new TripServiceFactory with default values.
    ///
    /// Defaults:
    /// - from_location: `"Origin {id}"` where id is auto-incremented
    /// - to_location: `"Destination {id}"`
    /// - price: `100.0`
    /// - service_type: `ServiceType::DayTrip`
    /// - status: `ServiceStatus::Active`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the agent who owns the listing
    ///
    /// # Returns
    /// - `TripServiceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: user_id.into(),
            from_location: format!("Origin {}", id),
            to_location: format!("Destination {}", id),
            description: Some("Test trip service".to_string()),
            price: 100.0,
            route_type: None,
            service_type: ServiceType::DayTrip,
            is_popular: false,
            status: ServiceStatus::Active,
        }
    }

    /// Sets the origin location.
    pub fn from_location(mut self, from_location: impl Into<String>) -> Self {
        self.from_location = from_location.into();
        self
    }

    /// Sets the destination location.
    pub fn to_location(mut self, to_location: impl Into<String>) -> Self {
        self.to_location = to_location.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the listed price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the route type.
    pub fn route_type(mut self, route_type: Option<String>) -> Self {
        self.route_type = route_type;
        self
    }

    /// Sets the service type.
    pub fn service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = service_type;
        self
    }

    /// Sets whether the listing is featured as popular.
    pub fn popular(mut self, is_popular: bool) -> Self {
        self.is_popular = is_popular;
        self
    }

    /// Sets the listing status.
    pub fn status(mut self, status: ServiceStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the trip service entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trip_service::Model)` - Created trip service entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trip_service::Model, DbErr> {
        let now = Utc::now();
        entity::trip_service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(self.user_id),
            from_location: ActiveValue::Set(self.from_location),
            to_location: ActiveValue::Set(self.to_location),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            route_type: ActiveValue::Set(self.route_type),
            service_type: ActiveValue::Set(self.service_type),
            is_popular: ActiveValue::Set(self.is_popular),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trip service with default values for the specified owner.
///
/// Shorthand for `TripServiceFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the agent who owns the listing
///
/// # Returns
/// - `Ok(entity::trip_service::Model)` - Created trip service entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_trip_service(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::trip_service::Model, DbErr> {
    TripServiceFactory::new(db, user_id).build().await
}
