use chrono::NaiveDate;

use crate::model::sale::{PaginatedSalesDto, SaleDto, UpsertSaleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: i32,
    pub farm_id: i32,
    pub customer_id: Option<i32>,
    pub flock_id: Option<i32>,
    pub product: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
    pub sale_date: NaiveDate,
}

impl Sale {
    pub fn from_entity(entity: entity::sale::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            customer_id: entity.customer_id,
            flock_id: entity.flock_id,
            product: entity.product,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            total: entity.total,
            sale_date: entity.sale_date,
        }
    }

    pub fn into_dto(self) -> SaleDto {
        SaleDto {
            id: self.id,
            customer_id: self.customer_id,
            flock_id: self.flock_id,
            product: self.product,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total: self.total,
            sale_date: self.sale_date,
        }
    }
}

/// Note: no `total` field; the service recomputes it from quantity and
/// unit price so a client can never post an inconsistent row.
#[derive(Debug, Clone)]
pub struct UpsertSaleParam {
    pub customer_id: Option<i32>,
    pub flock_id: Option<i32>,
    pub product: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub sale_date: NaiveDate,
}

impl UpsertSaleParam {
    pub fn from_dto(dto: UpsertSaleDto) -> Self {
        Self {
            customer_id: dto.customer_id,
            flock_id: dto.flock_id,
            product: dto.product,
            quantity: dto.quantity,
            unit_price: dto.unit_price,
            sale_date: dto.sale_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSales {
    pub sales: Vec<Sale>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedSales {
    pub fn into_dto(self) -> PaginatedSalesDto {
        PaginatedSalesDto {
            sales: self.sales.into_iter().map(Sale::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
