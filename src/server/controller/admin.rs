//! User management endpoints, restricted to farm admins.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateStaffDto, PaginatedUsersDto, UpdateRoleDto, UserDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List the users of the caller's farm.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(admin.farm_id, params.page, params.entries)
        .await?;

    Ok(Json(users.into_dto()))
}

/// Create a staff account on the caller's farm.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Staff account created", body = UserDto),
        (status = 400, description = "Email in use or invalid input", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create_staff(
            admin.farm_id,
            admin.id,
            payload.email,
            payload.password,
            payload.display_name,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Set a user's role.
///
/// An admin cannot change their own role, so a farm can never lose its last
/// admin this way.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserDto),
        (status = 400, description = "Attempted self-demotion", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No such user on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(admin.farm_id, admin.id, id, payload.is_staff)
        .await?;

    Ok(Json(user.into_dto()))
}

/// Delete a user of the caller's farm.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Attempted self-deletion", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No such user on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .delete(admin.farm_id, admin.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
