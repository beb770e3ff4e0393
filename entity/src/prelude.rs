pub use super::audit_log::Entity as AuditLog;
pub use super::chat_message::Entity as ChatMessage;
pub use super::chat_participant::Entity as ChatParticipant;
pub use super::chat_thread::Entity as ChatThread;
pub use super::customer::Entity as Customer;
pub use super::egg_production::Entity as EggProduction;
pub use super::expense::Entity as Expense;
pub use super::farm::Entity as Farm;
pub use super::feed_usage::Entity as FeedUsage;
pub use super::flock::Entity as Flock;
pub use super::house::Entity as House;
pub use super::inventory_item::Entity as InventoryItem;
pub use super::inventory_transaction::Entity as InventoryTransaction;
pub use super::production_record::Entity as ProductionRecord;
pub use super::sale::Entity as Sale;
pub use super::subscriber::Entity as Subscriber;
pub use super::user::Entity as User;
