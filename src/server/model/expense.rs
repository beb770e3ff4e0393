use chrono::NaiveDate;

use crate::model::expense::{ExpenseDto, PaginatedExpensesDto, UpsertExpenseDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub farm_id: i32,
    pub flock_id: Option<i32>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
}

impl Expense {
    pub fn from_entity(entity: entity::expense::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            flock_id: entity.flock_id,
            category: entity.category,
            description: entity.description,
            amount: entity.amount,
            expense_date: entity.expense_date,
        }
    }

    pub fn into_dto(self) -> ExpenseDto {
        ExpenseDto {
            id: self.id,
            flock_id: self.flock_id,
            category: self.category,
            description: self.description,
            amount: self.amount,
            expense_date: self.expense_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertExpenseParam {
    pub flock_id: Option<i32>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
}

impl UpsertExpenseParam {
    pub fn from_dto(dto: UpsertExpenseDto) -> Self {
        Self {
            flock_id: dto.flock_id,
            category: dto.category,
            description: dto.description,
            amount: dto.amount,
            expense_date: dto.expense_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedExpenses {
    pub expenses: Vec<Expense>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedExpenses {
    pub fn into_dto(self) -> PaginatedExpensesDto {
        PaginatedExpensesDto {
            expenses: self.expenses.into_iter().map(Expense::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
