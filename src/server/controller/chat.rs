use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, Query, State, WebSocketUpgrade,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        chat::{
            AddParticipantDto, ChatClientFrame, ChatMessageDto, ChatThreadDto,
            CreateChatThreadDto, PaginatedChatMessagesDto, SendChatMessageDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::User,
        service::chat::ChatService,
        state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

#[utoipa::path(
    post,
    path = "/api/chat/threads",
    tag = CHAT_TAG,
    request_body = CreateChatThreadDto,
    responses(
        (status = 201, description = "Thread created", body = ChatThreadDto),
        (status = 400, description = "Empty subject", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "A listed participant is not on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_thread(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateChatThreadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let thread = ChatService::new(&state.db)
        .create_thread(
            user.farm_id,
            user.id,
            payload.subject,
            payload.participant_ids,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(thread.into_dto())))
}

/// Threads the caller participates in.
#[utoipa::path(
    get,
    path = "/api/chat/threads",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Threads", body = Vec<ChatThreadDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_threads(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let threads = ChatService::new(&state.db)
        .get_threads(user.farm_id, user.id)
        .await?;

    Ok(Json(
        threads.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Add a same-farm user to a thread. Participants only; adding someone who
/// is already in the thread is a no-op.
#[utoipa::path(
    post,
    path = "/api/chat/threads/{id}/participants",
    tag = CHAT_TAG,
    params(("id" = i32, Path, description = "Thread id")),
    request_body = AddParticipantDto,
    responses(
        (status = 204, description = "Participant added"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "No such thread or user on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<AddParticipantDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    ChatService::new(&state.db)
        .add_participant(user.farm_id, user.id, id, payload.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Paginated message history, newest first. Participants only.
#[utoipa::path(
    get,
    path = "/api/chat/threads/{id}/messages",
    tag = CHAT_TAG,
    params(("id" = i32, Path, description = "Thread id"), PaginationParams),
    responses(
        (status = 200, description = "Paginated messages", body = PaginatedChatMessagesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "No such thread on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let messages = ChatService::new(&state.db)
        .get_messages(user.farm_id, user.id, id, params.page, params.entries)
        .await?;

    Ok(Json(messages.into_dto()))
}

/// Post a message to a thread. Participants only. The message is persisted
/// and fanned out to connected websocket sessions.
#[utoipa::path(
    post,
    path = "/api/chat/threads/{id}/messages",
    tag = CHAT_TAG,
    params(("id" = i32, Path, description = "Thread id")),
    request_body = SendChatMessageDto,
    responses(
        (status = 201, description = "Message sent", body = ChatMessageDto),
        (status = 400, description = "Empty message body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "No such thread on this farm", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SendChatMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    let message = ChatService::new(&state.db)
        .send_message(user.farm_id, user.id, id, payload.body, &state.chat_hub)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

#[derive(Deserialize)]
pub struct WsAuthParams {
    token: String,
}

/// Websocket upgrade for live chat.
///
/// Browsers cannot set an Authorization header on a websocket handshake, so
/// the access token travels as a query parameter and is checked before the
/// upgrade completes.
pub async fn chat_ws(
    State(state): State<AppState>,
    Query(params): Query<WsAuthParams>,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require_token(&params.token, &[])
        .await?;

    Ok(ws.on_upgrade(move |socket| chat_session(state, user, socket)))
}

/// One websocket session.
///
/// Incoming events are filtered against the participant set loaded at
/// connect; a `sync` frame from the client reloads it, so threads joined
/// mid-session start streaming without a reconnect.
async fn chat_session(state: AppState, user: User, mut socket: WebSocket) {
    let service = ChatService::new(&state.db);

    let mut thread_ids = match service.thread_ids_for_user(user.farm_id, user.id).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("Error loading threads for chat session: {}", e);
            return;
        }
    };

    let mut events = state.chat_hub.subscribe();

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Ok(event) if thread_ids.contains(&event.thread_id) => {
                        let Ok(text) = serde_json::to_string(&event) else {
                            continue;
                        };

                        if socket.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    // Slow consumer skipped events; keep streaming from here.
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(
                            "Chat session of user {} lagged by {} events",
                            user.id,
                            n
                        );
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
            frame = socket.recv() => {
                let Some(Ok(frame)) = frame else {
                    break;
                };

                let Message::Text(text) = frame else {
                    continue;
                };

                match serde_json::from_str::<ChatClientFrame>(&text) {
                    Ok(ChatClientFrame::Send { thread_id, body }) => {
                        if let Err(e) = service
                            .send_message(user.farm_id, user.id, thread_id, body, &state.chat_hub)
                            .await
                        {
                            tracing::debug!(
                                "Rejected chat message from user {}: {}",
                                user.id,
                                e
                            );
                        }
                    }
                    Ok(ChatClientFrame::Sync) => {
                        match service.thread_ids_for_user(user.farm_id, user.id).await {
                            Ok(ids) => thread_ids = ids,
                            Err(e) => {
                                tracing::error!("Error syncing chat session: {}", e);
                                break;
                            }
                        }
                    }
                    Err(_) => {
                        tracing::debug!("Unparseable chat frame from user {}", user.id);
                    }
                }
            }
        }
    }
}
