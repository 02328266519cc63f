//! Business logic layer.
//!
//! Services sit between the HTTP controllers and the data repositories:
//! controllers hand them DTOs and the authenticated user, services enforce
//! the domain rules (ownership, OTP lifecycles, onboarding state), and
//! repositories do the actual persistence. Infrastructure clients that hold
//! connections or secrets (`token`, `mail`, `stripe`) live in `AppState` and
//! are borrowed by the domain services that need them.

pub mod auth;
pub mod blog;
pub mod content;
pub mod mail;
pub mod message;
pub mod payment;
pub mod stripe;
pub mod support;
pub mod token;
pub mod trip_service;
pub mod user;
pub mod vehicle;
