mod channel;
mod message;
mod static_page;
mod support;
mod trip_service;
mod user;
mod vehicle;
