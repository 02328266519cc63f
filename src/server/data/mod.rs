//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! them to the service layer, which applies business rules before the controller converts
//! to DTOs. All database queries, inserts, updates, and deletes are performed through
//! these repositories.

pub mod blog;
pub mod channel;
pub mod faq;
pub mod message;
pub mod notification;
pub mod payment;
pub mod static_page;
pub mod support;
pub mod trip_service;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
