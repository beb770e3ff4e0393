use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        production_record::{
            PaginatedProductionRecordsDto, ProductionRecordDto, UpsertProductionRecordDto,
        },
    },
    server::{
        controller::FlockFilterParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::production_record::UpsertProductionRecordParam,
        service::production_record::ProductionRecordService,
        state::AppState,
    },
};

/// Tag for grouping production record endpoints in OpenAPI documentation
pub static PRODUCTION_RECORD_TAG: &str = "production_record";

#[utoipa::path(
    post,
    path = "/api/production-records",
    tag = PRODUCTION_RECORD_TAG,
    request_body = UpsertProductionRecordDto,
    responses(
        (status = 201, description = "Record created", body = ProductionRecordDto),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such flock on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertProductionRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let record = ProductionRecordService::new(&state.db)
        .create(
            user.farm_id,
            user.id,
            UpsertProductionRecordParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/production-records",
    tag = PRODUCTION_RECORD_TAG,
    params(FlockFilterParams),
    responses(
        (status = 200, description = "Paginated records", body = PaginatedProductionRecordsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_records(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FlockFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let records = ProductionRecordService::new(&state.db)
        .get_paginated(user.farm_id, params.flock_id, params.page, params.entries)
        .await?;

    Ok(Json(records.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/production-records/{id}",
    tag = PRODUCTION_RECORD_TAG,
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record", body = ProductionRecordDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such record on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let record = ProductionRecordService::new(&state.db)
        .get_by_id(user.farm_id, id)
        .await?;

    Ok(Json(record.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/production-records/{id}",
    tag = PRODUCTION_RECORD_TAG,
    params(("id" = i32, Path, description = "Record id")),
    request_body = UpsertProductionRecordDto,
    responses(
        (status = 200, description = "Record updated", body = ProductionRecordDto),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such record on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertProductionRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let record = ProductionRecordService::new(&state.db)
        .update(
            user.farm_id,
            user.id,
            id,
            UpsertProductionRecordParam::from_dto(payload),
        )
        .await?;

    Ok(Json(record.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/production-records/{id}",
    tag = PRODUCTION_RECORD_TAG,
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such record on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    ProductionRecordService::new(&state.db)
        .delete(user.farm_id, user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
