//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a channel together with its two participants.
///
/// This is a convenience method that creates:
/// 1. Two users (sender and receiver)
/// 2. A channel between them, keyed by their sorted ids
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((sender, receiver, channel))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_channel_with_participants(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::channel::Model,
    ),
    DbErr,
> {
    let sender = crate::factory::user::create_user(db).await?;
    let receiver = crate::factory::user::create_user(db).await?;
    let channel = crate::factory::channel::create_channel(db, &sender.id, &receiver.id).await?;

    Ok((sender, receiver, channel))
}

/// Creates a trip service owned by a freshly created agent.
///
/// This creates an agent user, then a trip service listed by that agent.
/// Useful when a test only cares about the service and not the owner.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((agent, service))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_service_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::trip_service::Model), DbErr> {
    let agent = crate::factory::user::UserFactory::new(db)
        .role(entity::user::UserRole::Agent)
        .build()
        .await?;
    let service = crate::factory::trip_service::create_trip_service(db, &agent.id).await?;

    Ok((agent, service))
}
