use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, audit::PaginatedAuditLogsDto},
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::audit::AuditService,
        state::AppState,
    },
};

/// Tag for grouping audit endpoints in OpenAPI documentation
pub static AUDIT_TAG: &str = "audit";

/// The farm's audit trail, newest first.
///
/// The trail is append-only; there is no write endpoint. Entries are
/// recorded by the services as a side effect of every mutation.
#[utoipa::path(
    get,
    path = "/api/audit",
    tag = AUDIT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated audit entries", body = PaginatedAuditLogsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_audit_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let entries = AuditService::new(&state.db)
        .get_paginated(admin.farm_id, params.page, params.entries)
        .await?;

    Ok(Json(entries.into_dto()))
}
