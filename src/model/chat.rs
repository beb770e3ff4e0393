use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ChatThreadDto {
    pub id: i32,
    pub subject: String,
    pub created_by: i32,
    pub created_at: NaiveDateTime,
    pub participant_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateChatThreadDto {
    pub subject: String,
    /// Same-farm users to add; the creator is always a participant.
    pub participant_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddParticipantDto {
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ChatMessageDto {
    pub id: i32,
    pub thread_id: i32,
    pub sender_id: i32,
    pub body: String,
    pub sent_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SendChatMessageDto {
    pub body: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedChatMessagesDto {
    pub messages: Vec<ChatMessageDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Frames a websocket client may send.
///
/// `send` persists and broadcasts a message; `sync` reloads the caller's
/// participant set so newly joined threads start streaming without a
/// reconnect.
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatClientFrame {
    Send { thread_id: i32, body: String },
    Sync,
}
