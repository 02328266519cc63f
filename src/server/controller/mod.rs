//! HTTP request handlers.
//!
//! Controllers translate between HTTP and the service layer: they extract
//! state, run the auth guard, hand DTOs to a service, and wrap the result in
//! a status code. No business rules live here.

pub mod auth;
pub mod blog;
pub mod content;
pub mod message;
pub mod payment;
pub mod support;
pub mod trip_service;
pub mod user;
pub mod vehicle;
