use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inventory::{
            CreateInventoryTransactionDto, InventoryItemDto, InventoryTransactionDto,
            PaginatedInventoryItemsDto, UpsertInventoryItemDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::inventory::UpsertInventoryItemParam,
        service::inventory::InventoryService,
        state::AppState,
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    request_body = UpsertInventoryItemDto,
    responses(
        (status = 201, description = "Item created", body = InventoryItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertInventoryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let item = InventoryService::new(&state.db)
        .create_item(
            user.farm_id,
            user.id,
            UpsertInventoryItemParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated items", body = PaginatedInventoryItemsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_items(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let items = InventoryService::new(&state.db)
        .get_items_paginated(user.farm_id, params.page, params.entries)
        .await?;

    Ok(Json(items.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item", body = InventoryItemDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such item on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let item = InventoryService::new(&state.db)
        .get_item(user.farm_id, id)
        .await?;

    Ok(Json(item.into_dto()))
}

/// Update an item's descriptive fields.
///
/// The stock quantity is not editable here; it only moves through
/// transactions.
#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Item id")),
    request_body = UpsertInventoryItemDto,
    responses(
        (status = 200, description = "Item updated", body = InventoryItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such item on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertInventoryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let item = InventoryService::new(&state.db)
        .update_item(
            user.farm_id,
            user.id,
            id,
            UpsertInventoryItemParam::from_dto(payload),
        )
        .await?;

    Ok(Json(item.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such item on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    InventoryService::new(&state.db)
        .delete_item(user.farm_id, user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Record a stock movement against an item.
///
/// Positive deltas are intake, negative deltas consumption. A movement that
/// would drive the stock negative is rejected.
#[utoipa::path(
    post,
    path = "/api/inventory/{id}/transactions",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Item id")),
    request_body = CreateInventoryTransactionDto,
    responses(
        (status = 201, description = "Movement recorded", body = InventoryTransactionDto),
        (status = 400, description = "Insufficient stock", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such item on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateInventoryTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let (_, transaction) = InventoryService::new(&state.db)
        .apply_transaction(user.farm_id, user.id, id, payload.delta, payload.reason)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// Movement history of one item, newest first.
#[utoipa::path(
    get,
    path = "/api/inventory/{id}/transactions",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Movements", body = Vec<InventoryTransactionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such item on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let transactions = InventoryService::new(&state.db)
        .get_transactions(user.farm_id, id)
        .await?;

    Ok(Json(
        transactions
            .into_iter()
            .map(|t| t.into_dto())
            .collect::<Vec<_>>(),
    ))
}
