use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::billing::BillingService};

/// Starts the hourly subscription expiry sweep.
///
/// Subscribers whose paid period has lapsed while their status is still
/// active or past_due are flipped to expired. Webhooks normally handle this,
/// but a missed or delayed event must not leave a farm on a dead
/// subscription indefinitely.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Top of every hour.
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = BillingService::new(&db).expire_lapsed().await {
                tracing::error!("Error sweeping lapsed subscriptions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Subscription expiry scheduler started");

    Ok(())
}
