use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        expense::{ExpenseDto, PaginatedExpensesDto, UpsertExpenseDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::expense::UpsertExpenseParam,
        service::expense::ExpenseService,
        state::AppState,
    },
};

/// Tag for grouping expense endpoints in OpenAPI documentation
pub static EXPENSE_TAG: &str = "expense";

#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = EXPENSE_TAG,
    request_body = UpsertExpenseDto,
    responses(
        (status = 201, description = "Expense created", body = ExpenseDto),
        (status = 400, description = "Invalid expense data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such flock on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertExpenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let expense = ExpenseService::new(&state.db)
        .create(user.farm_id, user.id, UpsertExpenseParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(expense.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = EXPENSE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated expenses", body = PaginatedExpensesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_expenses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let expenses = ExpenseService::new(&state.db)
        .get_paginated(user.farm_id, params.page, params.entries)
        .await?;

    Ok(Json(expenses.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/expenses/{id}",
    tag = EXPENSE_TAG,
    params(("id" = i32, Path, description = "Expense id")),
    responses(
        (status = 200, description = "Expense", body = ExpenseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such expense on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let expense = ExpenseService::new(&state.db)
        .get_by_id(user.farm_id, id)
        .await?;

    Ok(Json(expense.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    tag = EXPENSE_TAG,
    params(("id" = i32, Path, description = "Expense id")),
    request_body = UpsertExpenseDto,
    responses(
        (status = 200, description = "Expense updated", body = ExpenseDto),
        (status = 400, description = "Invalid expense data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such expense on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertExpenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let expense = ExpenseService::new(&state.db)
        .update(
            user.farm_id,
            user.id,
            id,
            UpsertExpenseParam::from_dto(payload),
        )
        .await?;

    Ok(Json(expense.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    tag = EXPENSE_TAG,
    params(("id" = i32, Path, description = "Expense id")),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such expense on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    ExpenseService::new(&state.db)
        .delete(user.farm_id, user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
