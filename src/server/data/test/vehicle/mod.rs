use crate::server::data::vehicle::VehicleRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_all_filtered;
mod update;
