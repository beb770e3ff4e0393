use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        house::{HouseDto, PaginatedHousesDto, UpsertHouseDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::house::UpsertHouseParam,
        service::house::HouseService,
        state::AppState,
    },
};

/// Tag for grouping house endpoints in OpenAPI documentation
pub static HOUSE_TAG: &str = "house";

#[utoipa::path(
    post,
    path = "/api/houses",
    tag = HOUSE_TAG,
    request_body = UpsertHouseDto,
    responses(
        (status = 201, description = "House created", body = HouseDto),
        (status = 400, description = "Invalid house data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_house(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertHouseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let house = HouseService::new(&state.db)
        .create(user.farm_id, user.id, UpsertHouseParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(house.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/houses",
    tag = HOUSE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated houses", body = PaginatedHousesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_houses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let houses = HouseService::new(&state.db)
        .get_paginated(user.farm_id, params.page, params.entries)
        .await?;

    Ok(Json(houses.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/houses/{id}",
    tag = HOUSE_TAG,
    params(("id" = i32, Path, description = "House id")),
    responses(
        (status = 200, description = "House", body = HouseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such house on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_house(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let house = HouseService::new(&state.db)
        .get_by_id(user.farm_id, id)
        .await?;

    Ok(Json(house.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/houses/{id}",
    tag = HOUSE_TAG,
    params(("id" = i32, Path, description = "House id")),
    request_body = UpsertHouseDto,
    responses(
        (status = 200, description = "House updated", body = HouseDto),
        (status = 400, description = "Invalid house data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such house on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_house(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertHouseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let house = HouseService::new(&state.db)
        .update(user.farm_id, user.id, id, UpsertHouseParam::from_dto(payload))
        .await?;

    Ok(Json(house.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/houses/{id}",
    tag = HOUSE_TAG,
    params(("id" = i32, Path, description = "House id")),
    responses(
        (status = 204, description = "House deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such house on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_house(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    HouseService::new(&state.db)
        .delete(user.farm_id, user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
