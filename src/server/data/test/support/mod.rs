use crate::server::data::support::SupportRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod close;
mod get_all_filtered;
