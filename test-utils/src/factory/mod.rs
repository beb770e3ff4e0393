//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let farm = factory::farm::create_farm(&db).await?;
//!     let user = factory::user::create_user(&db, farm.id).await?;
//!
//!     // Create the common farm + owner pair in one call
//!     let (farm, owner) = factory::helpers::create_farm_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db, farm.id)
//!     .email("owner@example.com")
//!     .staff(true)
//!     .build()
//!     .await?;
//! ```

pub mod customer;
pub mod farm;
pub mod flock;
pub mod helpers;
pub mod inventory_item;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use customer::create_customer;
pub use farm::create_farm;
pub use flock::create_flock;
pub use inventory_item::create_inventory_item;
pub use user::create_user;
