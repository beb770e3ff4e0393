use crate::model::house::{HouseDto, PaginatedHousesDto, UpsertHouseDto};

#[derive(Debug, Clone, PartialEq)]
pub struct House {
    pub id: i32,
    pub farm_id: i32,
    pub name: String,
    pub capacity: i32,
    pub location: Option<String>,
}

impl House {
    pub fn from_entity(entity: entity::house::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            name: entity.name,
            capacity: entity.capacity,
            location: entity.location,
        }
    }

    pub fn into_dto(self) -> HouseDto {
        HouseDto {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            location: self.location,
        }
    }
}

/// Shared by create and full-update operations.
#[derive(Debug, Clone)]
pub struct UpsertHouseParam {
    pub name: String,
    pub capacity: i32,
    pub location: Option<String>,
}

impl UpsertHouseParam {
    pub fn from_dto(dto: UpsertHouseDto) -> Self {
        Self {
            name: dto.name,
            capacity: dto.capacity,
            location: dto.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedHouses {
    pub houses: Vec<House>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedHouses {
    pub fn into_dto(self) -> PaginatedHousesDto {
        PaginatedHousesDto {
            houses: self.houses.into_iter().map(House::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
