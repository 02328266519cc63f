//! Domain models, parameter types, and API DTOs.
//!
//! Each domain has its own module containing the request/response DTOs for
//! its endpoints and the parameter structs passed between controllers,
//! services, and repositories. DTOs serialize with camelCase field names to
//! match the public API; parameter and domain types stay snake_case Rust.

pub mod api;
pub mod auth;
pub mod blog;
pub mod channel;
pub mod content;
pub mod message;
pub mod otp;
pub mod payment;
pub mod support;
pub mod trip_service;
pub mod user;
pub mod vehicle;
