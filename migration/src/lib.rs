pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_channel_table;
mod m20260801_000003_create_message_table;
mod m20260801_000004_create_trip_service_table;
mod m20260801_000005_create_vehicle_table;
mod m20260801_000006_create_blog_table;
mod m20260801_000007_create_support_ticket_table;
mod m20260801_000008_create_payment_table;
mod m20260801_000009_create_faq_table;
mod m20260801_000010_create_static_page_table;
mod m20260801_000011_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_channel_table::Migration),
            Box::new(m20260801_000003_create_message_table::Migration),
            Box::new(m20260801_000004_create_trip_service_table::Migration),
            Box::new(m20260801_000005_create_vehicle_table::Migration),
            Box::new(m20260801_000006_create_blog_table::Migration),
            Box::new(m20260801_000007_create_support_ticket_table::Migration),
            Box::new(m20260801_000008_create_payment_table::Migration),
            Box::new(m20260801_000009_create_faq_table::Migration),
            Box::new(m20260801_000010_create_static_page_table::Migration),
            Box::new(m20260801_000011_create_notification_table::Migration),
        ]
    }
}
