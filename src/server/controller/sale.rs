use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        sale::{PaginatedSalesDto, SaleDto, UpsertSaleDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::sale::UpsertSaleParam,
        service::sale::SaleService,
        state::AppState,
    },
};

/// Tag for grouping sale endpoints in OpenAPI documentation
pub static SALE_TAG: &str = "sale";

/// Record a sale.
///
/// The stored total is always quantity times unit price; a client-supplied
/// total is ignored.
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = SALE_TAG,
    request_body = UpsertSaleDto,
    responses(
        (status = 201, description = "Sale created", body = SaleDto),
        (status = 400, description = "Invalid sale data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such customer or flock on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_sale(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let sale = SaleService::new(&state.db)
        .create(user.farm_id, user.id, UpsertSaleParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(sale.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/sales",
    tag = SALE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated sales", body = PaginatedSalesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_sales(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let sales = SaleService::new(&state.db)
        .get_paginated(user.farm_id, params.page, params.entries)
        .await?;

    Ok(Json(sales.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = SALE_TAG,
    params(("id" = i32, Path, description = "Sale id")),
    responses(
        (status = 200, description = "Sale", body = SaleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such sale on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_sale(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let sale = SaleService::new(&state.db)
        .get_by_id(user.farm_id, id)
        .await?;

    Ok(Json(sale.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/sales/{id}",
    tag = SALE_TAG,
    params(("id" = i32, Path, description = "Sale id")),
    request_body = UpsertSaleDto,
    responses(
        (status = 200, description = "Sale updated", body = SaleDto),
        (status = 400, description = "Invalid sale data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such sale on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_sale(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let sale = SaleService::new(&state.db)
        .update(user.farm_id, user.id, id, UpsertSaleParam::from_dto(payload))
        .await?;

    Ok(Json(sale.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = SALE_TAG,
    params(("id" = i32, Path, description = "Sale id")),
    responses(
        (status = 204, description = "Sale deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such sale on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_sale(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    SaleService::new(&state.db)
        .delete(user.farm_id, user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
