use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod credentials;
mod delete;
mod get_all_paginated;
mod set_role;
mod tokens;
