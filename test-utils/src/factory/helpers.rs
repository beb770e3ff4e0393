//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a farm together with its owner account.
///
/// Most tests start from this pair: the farm establishes the tenant scope
/// and the owner is a non-staff user of that farm.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((farm, owner))` - Created farm and owner entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_farm_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::farm::Model, entity::user::Model), DbErr> {
    let farm = crate::factory::farm::create_farm(db).await?;
    let owner = crate::factory::user::create_user(db, farm.id).await?;

    Ok((farm, owner))
}

/// Creates a farm, its owner, and a flock belonging to the farm.
///
/// Convenience for record tests whose rows hang off a flock.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((farm, owner, flock))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_farm_with_flock(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::farm::Model,
        entity::user::Model,
        entity::flock::Model,
    ),
    DbErr,
> {
    let (farm, owner) = create_farm_with_owner(db).await?;
    let flock = crate::factory::flock::create_flock(db, farm.id).await?;

    Ok((farm, owner, flock))
}
