pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_farm_table;
mod m20260810_000002_create_user_table;
mod m20260810_000003_create_flock_table;
mod m20260810_000004_create_house_table;
mod m20260810_000005_create_egg_production_table;
mod m20260810_000006_create_feed_usage_table;
mod m20260810_000007_create_expense_table;
mod m20260811_000008_create_customer_table;
mod m20260811_000009_create_sale_table;
mod m20260811_000010_create_inventory_item_table;
mod m20260811_000011_create_inventory_transaction_table;
mod m20260812_000012_create_production_record_table;
mod m20260812_000013_create_subscriber_table;
mod m20260812_000014_create_audit_log_table;
mod m20260813_000015_create_chat_thread_table;
mod m20260813_000016_create_chat_participant_table;
mod m20260813_000017_create_chat_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_farm_table::Migration),
            Box::new(m20260810_000002_create_user_table::Migration),
            Box::new(m20260810_000003_create_flock_table::Migration),
            Box::new(m20260810_000004_create_house_table::Migration),
            Box::new(m20260810_000005_create_egg_production_table::Migration),
            Box::new(m20260810_000006_create_feed_usage_table::Migration),
            Box::new(m20260810_000007_create_expense_table::Migration),
            Box::new(m20260811_000008_create_customer_table::Migration),
            Box::new(m20260811_000009_create_sale_table::Migration),
            Box::new(m20260811_000010_create_inventory_item_table::Migration),
            Box::new(m20260811_000011_create_inventory_transaction_table::Migration),
            Box::new(m20260812_000012_create_production_record_table::Migration),
            Box::new(m20260812_000013_create_subscriber_table::Migration),
            Box::new(m20260812_000014_create_audit_log_table::Migration),
            Box::new(m20260813_000015_create_chat_thread_table::Migration),
            Box::new(m20260813_000016_create_chat_participant_table::Migration),
            Box::new(m20260813_000017_create_chat_message_table::Migration),
        ]
    }
}
