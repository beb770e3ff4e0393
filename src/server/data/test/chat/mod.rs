use crate::server::{data::chat::ChatRepository, model::chat::CreateChatThreadParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod messages;
mod threads;
