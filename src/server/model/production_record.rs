use chrono::NaiveDate;

use crate::model::production_record::{
    PaginatedProductionRecordsDto, ProductionRecordDto, UpsertProductionRecordDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRecord {
    pub id: i32,
    pub farm_id: i32,
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub mortality: i32,
    pub average_weight_kg: f64,
    pub notes: Option<String>,
}

impl ProductionRecord {
    pub fn from_entity(entity: entity::production_record::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            flock_id: entity.flock_id,
            record_date: entity.record_date,
            mortality: entity.mortality,
            average_weight_kg: entity.average_weight_kg,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> ProductionRecordDto {
        ProductionRecordDto {
            id: self.id,
            flock_id: self.flock_id,
            record_date: self.record_date,
            mortality: self.mortality,
            average_weight_kg: self.average_weight_kg,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertProductionRecordParam {
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub mortality: i32,
    pub average_weight_kg: f64,
    pub notes: Option<String>,
}

impl UpsertProductionRecordParam {
    pub fn from_dto(dto: UpsertProductionRecordDto) -> Self {
        Self {
            flock_id: dto.flock_id,
            record_date: dto.record_date,
            mortality: dto.mortality,
            average_weight_kg: dto.average_weight_kg,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProductionRecords {
    pub records: Vec<ProductionRecord>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProductionRecords {
    pub fn into_dto(self) -> PaginatedProductionRecordsDto {
        PaginatedProductionRecordsDto {
            records: self
                .records
                .into_iter()
                .map(ProductionRecord::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
