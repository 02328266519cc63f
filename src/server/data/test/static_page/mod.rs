use crate::server::data::static_page::StaticPageRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod upsert;
