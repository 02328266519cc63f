//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let vehicle = factory::vehicle::create_vehicle(&db).await?;
//!
//!     // Create a conversation with both participants
//!     let (sender, receiver, channel) =
//!         factory::helpers::create_channel_with_participants(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let user = factory::user::UserFactory::new(&db)
//!     .email("agent@example.com")
//!     .role(entity::user::UserRole::Agent)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `channel` - Create channel entities
//! - `message` - Create message entities
//! - `trip_service` - Create trip service entities
//! - `vehicle` - Create vehicle entities
//! - `blog` - Create blog entities
//! - `support_ticket` - Create support ticket entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod blog;
pub mod channel;
pub mod helpers;
pub mod message;
pub mod support_ticket;
pub mod trip_service;
pub mod user;
pub mod vehicle;

// Re-export commonly used factory functions for concise usage
pub use blog::create_blog;
pub use channel::create_channel;
pub use helpers::{create_channel_with_participants, create_trip_service_with_owner};
pub use message::{create_message, MessageFactory};
pub use support_ticket::{create_support_ticket, SupportTicketFactory};
pub use trip_service::{create_trip_service, TripServiceFactory};
pub use user::{create_user, create_user_with_email, UserFactory};
pub use vehicle::{create_vehicle, VehicleFactory};
