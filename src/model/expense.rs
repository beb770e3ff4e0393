use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ExpenseDto {
    pub id: i32,
    pub flock_id: Option<i32>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpsertExpenseDto {
    pub flock_id: Option<i32>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedExpensesDto {
    pub expenses: Vec<ExpenseDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
