//! Chat repository.
//!
//! Threads and their participant lists are farm-scoped; messages hang off
//! threads, so message access is gated by participant checks in the service
//! layer rather than a farm column of their own.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::chat::{ChatMessage, ChatThread, CreateChatThreadParam};

pub struct ChatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a thread and its participant rows in one transaction. The
    /// creator is always a participant; `participant_ids` has already been
    /// deduplicated and farm-checked by the service.
    pub async fn create_thread(&self, param: CreateChatThreadParam) -> Result<ChatThread, DbErr> {
        let txn = self.db.begin().await?;

        let thread = entity::prelude::ChatThread::insert(entity::chat_thread::ActiveModel {
            farm_id: ActiveValue::Set(param.farm_id),
            subject: ActiveValue::Set(param.subject),
            created_by: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&txn)
        .await?;

        let mut participant_ids = param.participant_ids;
        if !participant_ids.contains(&param.created_by) {
            participant_ids.push(param.created_by);
        }

        let rows = participant_ids
            .iter()
            .map(|user_id| entity::chat_participant::ActiveModel {
                thread_id: ActiveValue::Set(thread.id),
                user_id: ActiveValue::Set(*user_id),
                ..Default::default()
            });
        entity::prelude::ChatParticipant::insert_many(rows)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(ChatThread::from_entity(thread, participant_ids))
    }

    /// Threads the given user participates in, newest first.
    pub async fn threads_for_user(
        &self,
        farm_id: i32,
        user_id: i32,
    ) -> Result<Vec<ChatThread>, DbErr> {
        let thread_ids: Vec<i32> = entity::prelude::ChatParticipant::find()
            .select_only()
            .column(entity::chat_participant::Column::ThreadId)
            .filter(entity::chat_participant::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        let threads = entity::prelude::ChatThread::find()
            .filter(entity::chat_thread::Column::Id.is_in(thread_ids))
            .filter(entity::chat_thread::Column::FarmId.eq(farm_id))
            .order_by_desc(entity::chat_thread::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(threads.len());
        for thread in threads {
            let participant_ids = self.participant_ids(thread.id).await?;
            result.push(ChatThread::from_entity(thread, participant_ids));
        }

        Ok(result)
    }

    pub async fn find_thread(&self, farm_id: i32, thread_id: i32) -> Result<Option<ChatThread>, DbErr> {
        let Some(thread) = entity::prelude::ChatThread::find_by_id(thread_id)
            .filter(entity::chat_thread::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let participant_ids = self.participant_ids(thread.id).await?;
        Ok(Some(ChatThread::from_entity(thread, participant_ids)))
    }

    pub async fn is_participant(&self, thread_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ChatParticipant::find()
            .filter(entity::chat_participant::Column::ThreadId.eq(thread_id))
            .filter(entity::chat_participant::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a participant, ignoring the insert when the user is already in
    /// the thread.
    pub async fn add_participant(&self, thread_id: i32, user_id: i32) -> Result<(), DbErr> {
        if self.is_participant(thread_id, user_id).await? {
            return Ok(());
        }

        entity::prelude::ChatParticipant::insert(entity::chat_participant::ActiveModel {
            thread_id: ActiveValue::Set(thread_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    pub async fn participant_ids(&self, thread_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ChatParticipant::find()
            .select_only()
            .column(entity::chat_participant::Column::UserId)
            .filter(entity::chat_participant::Column::ThreadId.eq(thread_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn create_message(
        &self,
        thread_id: i32,
        sender_id: i32,
        body: String,
    ) -> Result<ChatMessage, DbErr> {
        let entity = entity::prelude::ChatMessage::insert(entity::chat_message::ActiveModel {
            thread_id: ActiveValue::Set(thread_id),
            sender_id: ActiveValue::Set(sender_id),
            body: ActiveValue::Set(body),
            sent_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(ChatMessage::from_entity(entity))
    }

    /// Message history for a thread, newest first.
    pub async fn messages_paginated(
        &self,
        thread_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ChatMessage>, u64), DbErr> {
        let paginator = entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::ThreadId.eq(thread_id))
            .order_by_desc(entity::chat_message::Column::SentAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(ChatMessage::from_entity).collect(),
            total,
        ))
    }
}
