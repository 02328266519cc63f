use crate::server::data::channel::ChannelRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_or_create;
mod get_for_user;
