use crate::model::customer::{CustomerDto, PaginatedCustomersDto, UpsertCustomerDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub farm_id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertCustomerParam {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl UpsertCustomerParam {
    pub fn from_dto(dto: UpsertCustomerDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCustomers {
    pub customers: Vec<Customer>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCustomers {
    pub fn into_dto(self) -> PaginatedCustomersDto {
        PaginatedCustomersDto {
            customers: self.customers.into_iter().map(Customer::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
