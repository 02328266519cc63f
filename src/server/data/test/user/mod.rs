use crate::server::{
    data::user::{CreateUserParam, UserRepository},
    model::otp::OtpChallenge,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod activate;
mod create;
mod find_by_email;
mod get_all_filtered;
mod update_profile;
