use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        customer::{CustomerDto, PaginatedCustomersDto, UpsertCustomerDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::customer::UpsertCustomerParam,
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = UpsertCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let customer = CustomerService::new(&state.db)
        .create(user.farm_id, user.id, UpsertCustomerParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated customers", body = PaginatedCustomersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let customers = CustomerService::new(&state.db)
        .get_paginated(user.farm_id, params.page, params.entries)
        .await?;

    Ok(Json(customers.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = CustomerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such customer on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let customer = CustomerService::new(&state.db)
        .get_by_id(user.farm_id, id)
        .await?;

    Ok(Json(customer.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer id")),
    request_body = UpsertCustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such customer on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let customer = CustomerService::new(&state.db)
        .update(
            user.farm_id,
            user.id,
            id,
            UpsertCustomerParam::from_dto(payload),
        )
        .await?;

    Ok(Json(customer.into_dto()))
}

/// Delete a customer. Past sales keep their rows with the customer
/// reference nulled.
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such customer on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    CustomerService::new(&state.db)
        .delete(user.farm_id, user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
