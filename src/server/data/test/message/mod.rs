use crate::server::data::message::{CreateMessageParam, MessageRepository};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_history;
