use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flock::{CreateFlockDto, FlockDto, FlockSummaryDto, PaginatedFlocksDto, UpdateFlockDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::flock::{CreateFlockParam, UpdateFlockParam},
        service::flock::FlockService,
        state::AppState,
    },
};

/// Tag for grouping flock endpoints in OpenAPI documentation
pub static FLOCK_TAG: &str = "flock";

#[utoipa::path(
    post,
    path = "/api/flocks",
    tag = FLOCK_TAG,
    request_body = CreateFlockDto,
    responses(
        (status = 201, description = "Flock created", body = FlockDto),
        (status = 400, description = "Invalid flock data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_flock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFlockDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let flock = FlockService::new(&state.db)
        .create(user.id, CreateFlockParam::from_dto(user.farm_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(flock.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/flocks",
    tag = FLOCK_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated flocks", body = PaginatedFlocksDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_flocks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let flocks = FlockService::new(&state.db)
        .get_paginated(user.farm_id, params.page, params.entries)
        .await?;

    Ok(Json(flocks.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/flocks/{id}",
    tag = FLOCK_TAG,
    params(("id" = i32, Path, description = "Flock id")),
    responses(
        (status = 200, description = "Flock", body = FlockDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such flock on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_flock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let flock = FlockService::new(&state.db)
        .get_by_id(user.farm_id, id)
        .await?;

    Ok(Json(flock.into_dto()))
}

/// Lifetime performance summary of one flock.
///
/// Aggregates egg production, feed usage, expenses, sales revenue, and
/// mortality. Periods without data contribute zero.
#[utoipa::path(
    get,
    path = "/api/flocks/{id}/summary",
    tag = FLOCK_TAG,
    params(("id" = i32, Path, description = "Flock id")),
    responses(
        (status = 200, description = "Aggregated totals", body = FlockSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such flock on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_flock_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let summary = FlockService::new(&state.db)
        .get_summary(user.farm_id, id)
        .await?;

    Ok(Json(summary.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/flocks/{id}",
    tag = FLOCK_TAG,
    params(("id" = i32, Path, description = "Flock id")),
    request_body = UpdateFlockDto,
    responses(
        (status = 200, description = "Flock updated", body = FlockDto),
        (status = 400, description = "Invalid flock data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such flock on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_flock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFlockDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let flock = FlockService::new(&state.db)
        .update(user.farm_id, user.id, id, UpdateFlockParam::from_dto(payload))
        .await?;

    Ok(Json(flock.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/flocks/{id}",
    tag = FLOCK_TAG,
    params(("id" = i32, Path, description = "Flock id")),
    responses(
        (status = 204, description = "Flock deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such flock on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_flock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    FlockService::new(&state.db)
        .delete(user.farm_id, user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
