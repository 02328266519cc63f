//! SeaORM entity definitions for the voyago database schema.

pub mod blog;
pub mod channel;
pub mod faq;
pub mod message;
pub mod notification;
pub mod payment;
pub mod static_page;
pub mod support_ticket;
pub mod trip_service;
pub mod user;
pub mod vehicle;

pub mod prelude;
