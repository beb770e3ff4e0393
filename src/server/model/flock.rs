//! Flock domain models and parameters.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::flock::{CreateFlockDto, FlockDto, FlockSummaryDto, PaginatedFlocksDto, UpdateFlockDto};

/// Status a flock starts in; updates may move it to "sold" or "culled".
pub const FLOCK_STATUS_ACTIVE: &str = "active";

pub const FLOCK_STATUSES: [&str; 3] = ["active", "sold", "culled"];

#[derive(Debug, Clone, PartialEq)]
pub struct Flock {
    pub id: i32,
    pub farm_id: i32,
    pub name: String,
    pub breed: String,
    pub batch_code: String,
    pub bird_count: i32,
    pub acquired_at: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Flock {
    pub fn from_entity(entity: entity::flock::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            name: entity.name,
            breed: entity.breed,
            batch_code: entity.batch_code,
            bird_count: entity.bird_count,
            acquired_at: entity.acquired_at,
            status: entity.status,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FlockDto {
        FlockDto {
            id: self.id,
            name: self.name,
            breed: self.breed,
            batch_code: self.batch_code,
            bird_count: self.bird_count,
            acquired_at: self.acquired_at,
            status: self.status,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFlockParam {
    pub farm_id: i32,
    pub name: String,
    pub breed: String,
    pub batch_code: String,
    pub bird_count: i32,
    pub acquired_at: NaiveDate,
    pub notes: Option<String>,
}

impl CreateFlockParam {
    pub fn from_dto(farm_id: i32, dto: CreateFlockDto) -> Self {
        Self {
            farm_id,
            name: dto.name,
            breed: dto.breed,
            batch_code: dto.batch_code,
            bird_count: dto.bird_count,
            acquired_at: dto.acquired_at,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateFlockParam {
    pub name: String,
    pub breed: String,
    pub batch_code: String,
    pub bird_count: i32,
    pub acquired_at: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
}

impl UpdateFlockParam {
    pub fn from_dto(dto: UpdateFlockDto) -> Self {
        Self {
            name: dto.name,
            breed: dto.breed,
            batch_code: dto.batch_code,
            bird_count: dto.bird_count,
            acquired_at: dto.acquired_at,
            status: dto.status,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedFlocks {
    pub flocks: Vec<Flock>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedFlocks {
    pub fn into_dto(self) -> PaginatedFlocksDto {
        PaginatedFlocksDto {
            flocks: self.flocks.into_iter().map(Flock::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Aggregated lifetime totals for one flock, assembled by the flock service
/// from the egg production, feed usage, expense, sale and production record
/// repositories.
#[derive(Debug, Clone, PartialEq)]
pub struct FlockSummary {
    pub flock_id: i32,
    pub eggs_collected: i64,
    pub eggs_damaged: i64,
    pub feed_used_kg: f64,
    pub feed_cost: f64,
    pub expense_total: f64,
    pub sales_revenue: f64,
    pub mortality: i64,
}

impl FlockSummary {
    pub fn into_dto(self) -> FlockSummaryDto {
        FlockSummaryDto {
            flock_id: self.flock_id,
            eggs_collected: self.eggs_collected,
            eggs_damaged: self.eggs_damaged,
            feed_used_kg: self.feed_used_kg,
            feed_cost: self.feed_cost,
            expense_total: self.expense_total,
            sales_revenue: self.sales_revenue,
            mortality: self.mortality,
        }
    }
}
