//! Chat thread and message domain models.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::chat::{ChatMessageDto, ChatThreadDto, PaginatedChatMessagesDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ChatThread {
    pub id: i32,
    pub farm_id: i32,
    pub subject: String,
    pub created_by: i32,
    pub created_at: NaiveDateTime,
    pub participant_ids: Vec<i32>,
}

impl ChatThread {
    /// Threads load their participant list separately; the repository joins
    /// the two before building this model.
    pub fn from_entity(entity: entity::chat_thread::Model, participant_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            subject: entity.subject,
            created_by: entity.created_by,
            created_at: entity.created_at,
            participant_ids,
        }
    }

    pub fn into_dto(self) -> ChatThreadDto {
        ChatThreadDto {
            id: self.id,
            subject: self.subject,
            created_by: self.created_by,
            created_at: self.created_at,
            participant_ids: self.participant_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub thread_id: i32,
    pub sender_id: i32,
    pub body: String,
    pub sent_at: NaiveDateTime,
}

impl ChatMessage {
    pub fn from_entity(entity: entity::chat_message::Model) -> Self {
        Self {
            id: entity.id,
            thread_id: entity.thread_id,
            sender_id: entity.sender_id,
            body: entity.body,
            sent_at: entity.sent_at,
        }
    }

    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            thread_id: self.thread_id,
            sender_id: self.sender_id,
            body: self.body,
            sent_at: self.sent_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateChatThreadParam {
    pub farm_id: i32,
    pub subject: String,
    pub created_by: i32,
    pub participant_ids: Vec<i32>,
}

/// Event fanned out to websocket subscribers after a message is persisted.
///
/// Serialized directly onto the wire; receivers filter by `thread_id`
/// against their own participant set.
#[derive(Debug, Clone, Serialize)]
pub struct ChatEvent {
    pub thread_id: i32,
    pub message_id: i32,
    pub sender_id: i32,
    pub body: String,
    pub sent_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedChatMessages {
    pub messages: Vec<ChatMessage>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedChatMessages {
    pub fn into_dto(self) -> PaginatedChatMessagesDto {
        PaginatedChatMessagesDto {
            messages: self.messages.into_iter().map(ChatMessage::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
