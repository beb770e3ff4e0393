use crate::server::{data::audit_log::AuditLogRepository, model::audit::RecordAuditParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod record;

fn audit_param(farm_id: i32, user_id: i32, action: &str) -> RecordAuditParam {
    RecordAuditParam {
        farm_id,
        user_id,
        action: action.to_string(),
        entity: "flock".to_string(),
        entity_id: Some(1),
        detail: None,
    }
}
