use chrono::NaiveDate;

use crate::model::feed_usage::{FeedUsageDto, PaginatedFeedUsageDto, UpsertFeedUsageDto};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedUsage {
    pub id: i32,
    pub farm_id: i32,
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub cost: f64,
}

impl FeedUsage {
    pub fn from_entity(entity: entity::feed_usage::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            flock_id: entity.flock_id,
            record_date: entity.record_date,
            feed_type: entity.feed_type,
            quantity_kg: entity.quantity_kg,
            cost: entity.cost,
        }
    }

    pub fn into_dto(self) -> FeedUsageDto {
        FeedUsageDto {
            id: self.id,
            flock_id: self.flock_id,
            record_date: self.record_date,
            feed_type: self.feed_type,
            quantity_kg: self.quantity_kg,
            cost: self.cost,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertFeedUsageParam {
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub cost: f64,
}

impl UpsertFeedUsageParam {
    pub fn from_dto(dto: UpsertFeedUsageDto) -> Self {
        Self {
            flock_id: dto.flock_id,
            record_date: dto.record_date,
            feed_type: dto.feed_type,
            quantity_kg: dto.quantity_kg,
            cost: dto.cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedFeedUsage {
    pub records: Vec<FeedUsage>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedFeedUsage {
    pub fn into_dto(self) -> PaginatedFeedUsageDto {
        PaginatedFeedUsageDto {
            records: self.records.into_iter().map(FeedUsage::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
