use chrono::NaiveDate;

use crate::model::egg_production::{
    EggProductionDto, PaginatedEggProductionDto, UpsertEggProductionDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EggProduction {
    pub id: i32,
    pub farm_id: i32,
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub eggs_collected: i32,
    pub eggs_damaged: i32,
    pub notes: Option<String>,
}

impl EggProduction {
    pub fn from_entity(entity: entity::egg_production::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            flock_id: entity.flock_id,
            record_date: entity.record_date,
            eggs_collected: entity.eggs_collected,
            eggs_damaged: entity.eggs_damaged,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> EggProductionDto {
        EggProductionDto {
            id: self.id,
            flock_id: self.flock_id,
            record_date: self.record_date,
            eggs_collected: self.eggs_collected,
            eggs_damaged: self.eggs_damaged,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertEggProductionParam {
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub eggs_collected: i32,
    pub eggs_damaged: i32,
    pub notes: Option<String>,
}

impl UpsertEggProductionParam {
    pub fn from_dto(dto: UpsertEggProductionDto) -> Self {
        Self {
            flock_id: dto.flock_id,
            record_date: dto.record_date,
            eggs_collected: dto.eggs_collected,
            eggs_damaged: dto.eggs_damaged,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedEggProduction {
    pub records: Vec<EggProduction>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedEggProduction {
    pub fn into_dto(self) -> PaginatedEggProductionDto {
        PaginatedEggProductionDto {
            records: self
                .records
                .into_iter()
                .map(EggProduction::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
