//! Chat service and in-process fanout hub.
//!
//! Messages are persisted first and then broadcast to websocket
//! subscribers; the history endpoint is the source of truth and the
//! websocket is a live tail.

use sea_orm::DatabaseConnection;
use tokio::sync::broadcast;

use crate::server::{
    data::{chat::ChatRepository, user::UserRepository},
    error::AppError,
    model::chat::{
        ChatEvent, ChatMessage, ChatThread, CreateChatThreadParam, PaginatedChatMessages,
    },
};

/// Events buffered per subscriber before lagging receivers start missing
/// messages. Lagged clients resync through the history endpoint.
const HUB_CAPACITY: usize = 256;

/// Broadcast channel connecting message writers to websocket sessions.
#[derive(Clone)]
pub struct ChatHub {
    tx: broadcast::Sender<ChatEvent>,
}

impl ChatHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(HUB_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.tx.subscribe()
    }

    /// Fans an event out to all live subscribers. A send error only means
    /// nobody is connected, which is fine.
    pub fn publish(&self, event: ChatEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a thread. Every listed participant must belong to the
    /// caller's farm; the caller joins automatically.
    pub async fn create_thread(
        &self,
        farm_id: i32,
        user_id: i32,
        subject: String,
        participant_ids: Vec<i32>,
    ) -> Result<ChatThread, AppError> {
        if subject.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Thread subject cannot be empty".to_string(),
            ));
        }

        let mut deduped: Vec<i32> = Vec::new();
        for id in participant_ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        self.check_same_farm(farm_id, &deduped).await?;

        let thread = ChatRepository::new(self.db)
            .create_thread(CreateChatThreadParam {
                farm_id,
                subject,
                created_by: user_id,
                participant_ids: deduped,
            })
            .await?;

        Ok(thread)
    }

    pub async fn get_threads(&self, farm_id: i32, user_id: i32) -> Result<Vec<ChatThread>, AppError> {
        Ok(ChatRepository::new(self.db)
            .threads_for_user(farm_id, user_id)
            .await?)
    }

    /// Adds a same-farm user to a thread. Only existing participants may add;
    /// adding someone twice is a no-op.
    pub async fn add_participant(
        &self,
        farm_id: i32,
        caller_id: i32,
        thread_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        let repo = ChatRepository::new(self.db);

        self.require_participant(&repo, farm_id, thread_id, caller_id)
            .await?;
        self.check_same_farm(farm_id, &[user_id]).await?;

        repo.add_participant(thread_id, user_id).await?;

        Ok(())
    }

    /// Paginated message history, newest first. Participants only.
    pub async fn get_messages(
        &self,
        farm_id: i32,
        caller_id: i32,
        thread_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedChatMessages, AppError> {
        let repo = ChatRepository::new(self.db);

        self.require_participant(&repo, farm_id, thread_id, caller_id)
            .await?;

        let (messages, total) = repo.messages_paginated(thread_id, page, per_page).await?;

        Ok(PaginatedChatMessages {
            messages,
            total,
            page,
            per_page,
            total_pages: super::total_pages(total, per_page),
        })
    }

    /// Persists a message and fans it out to websocket subscribers.
    pub async fn send_message(
        &self,
        farm_id: i32,
        caller_id: i32,
        thread_id: i32,
        body: String,
        hub: &ChatHub,
    ) -> Result<ChatMessage, AppError> {
        if body.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Message body cannot be empty".to_string(),
            ));
        }

        let repo = ChatRepository::new(self.db);

        self.require_participant(&repo, farm_id, thread_id, caller_id)
            .await?;

        let message = repo.create_message(thread_id, caller_id, body).await?;

        hub.publish(ChatEvent {
            thread_id: message.thread_id,
            message_id: message.id,
            sender_id: message.sender_id,
            body: message.body.clone(),
            sent_at: message.sent_at,
        });

        Ok(message)
    }

    /// Thread ids the user may receive websocket events for.
    pub async fn thread_ids_for_user(
        &self,
        farm_id: i32,
        user_id: i32,
    ) -> Result<Vec<i32>, AppError> {
        let threads = ChatRepository::new(self.db)
            .threads_for_user(farm_id, user_id)
            .await?;

        Ok(threads.into_iter().map(|t| t.id).collect())
    }

    /// Missing thread is a 404; existing thread without membership is a 403.
    async fn require_participant(
        &self,
        repo: &ChatRepository<'_>,
        farm_id: i32,
        thread_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        if repo.find_thread(farm_id, thread_id).await?.is_none() {
            return Err(AppError::NotFound("Thread not found".to_string()));
        }
        if !repo.is_participant(thread_id, user_id).await? {
            return Err(AppError::Forbidden(
                "You are not a participant of this thread".to_string(),
            ));
        }

        Ok(())
    }

    async fn check_same_farm(&self, farm_id: i32, user_ids: &[i32]) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        for id in user_ids {
            let belongs = user_repo
                .find_by_id(*id)
                .await?
                .map(|user| user.farm_id == farm_id)
                .unwrap_or(false);
            if !belongs {
                return Err(AppError::NotFound(format!("User {} not found", id)));
            }
        }

        Ok(())
    }
}
