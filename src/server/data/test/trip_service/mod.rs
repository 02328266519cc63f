use crate::server::data::trip_service::TripServiceRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_all_filtered;
mod update;
