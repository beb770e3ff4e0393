use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        egg_production::{EggProductionDto, PaginatedEggProductionDto, UpsertEggProductionDto},
    },
    server::{
        controller::FlockFilterParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::egg_production::UpsertEggProductionParam,
        service::egg_production::EggProductionService,
        state::AppState,
    },
};

/// Tag for grouping egg production endpoints in OpenAPI documentation
pub static EGG_PRODUCTION_TAG: &str = "egg_production";

#[utoipa::path(
    post,
    path = "/api/egg-production",
    tag = EGG_PRODUCTION_TAG,
    request_body = UpsertEggProductionDto,
    responses(
        (status = 201, description = "Entry created", body = EggProductionDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such flock on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertEggProductionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let entry = EggProductionService::new(&state.db)
        .create(
            user.farm_id,
            user.id,
            UpsertEggProductionParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Daily egg collection entries, optionally filtered to one flock.
#[utoipa::path(
    get,
    path = "/api/egg-production",
    tag = EGG_PRODUCTION_TAG,
    params(FlockFilterParams),
    responses(
        (status = 200, description = "Paginated entries", body = PaginatedEggProductionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_entries(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FlockFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let entries = EggProductionService::new(&state.db)
        .get_paginated(user.farm_id, params.flock_id, params.page, params.entries)
        .await?;

    Ok(Json(entries.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/egg-production/{id}",
    tag = EGG_PRODUCTION_TAG,
    params(("id" = i32, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry", body = EggProductionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such entry on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let entry = EggProductionService::new(&state.db)
        .get_by_id(user.farm_id, id)
        .await?;

    Ok(Json(entry.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/egg-production/{id}",
    tag = EGG_PRODUCTION_TAG,
    params(("id" = i32, Path, description = "Entry id")),
    request_body = UpsertEggProductionDto,
    responses(
        (status = 200, description = "Entry updated", body = EggProductionDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such entry on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertEggProductionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let entry = EggProductionService::new(&state.db)
        .update(
            user.farm_id,
            user.id,
            id,
            UpsertEggProductionParam::from_dto(payload),
        )
        .await?;

    Ok(Json(entry.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/egg-production/{id}",
    tag = EGG_PRODUCTION_TAG,
    params(("id" = i32, Path, description = "Entry id")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such entry on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    EggProductionService::new(&state.db)
        .delete(user.farm_id, user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
