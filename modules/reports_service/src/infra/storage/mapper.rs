//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{NewReportItem, Report, ReportItem};
use crate::domain::ReportDraft;
use polymorph::OwnerRef;

impl From<entity::Model> for Report {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            owner: OwnerRef::new(entity.owner_type, entity.owner_id),
            user_id: entity.user_id,
            user_message: entity.user_message,
            admin_id: entity.admin_id,
            admin_message: entity.admin_message,
            resolved_at: entity.resolved_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&ReportDraft> for entity::ActiveModel {
    fn from(draft: &ReportDraft) -> Self {
        use sea_orm::ActiveValue::*;

        let now = chrono::Utc::now();
        Self {
            id: NotSet,
            owner_type: Set(draft.owner.kind.clone()),
            owner_id: Set(draft.owner.id),
            user_id: Set(draft.user_id),
            user_message: Set(draft.user_message.clone()),
            admin_id: Set(None),
            admin_message: Set(None),
            resolved_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

impl From<entity::report_item::Model> for ReportItem {
    fn from(entity: entity::report_item::Model) -> Self {
        Self {
            id: entity.id,
            r#type: entity.r#type,
            title: entity.title,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&NewReportItem> for entity::report_item::ActiveModel {
    fn from(item: &NewReportItem) -> Self {
        use sea_orm::ActiveValue::*;

        let now = chrono::Utc::now();
        Self {
            id: NotSet,
            r#type: Set(item.r#type.clone()),
            title: Set(item.title.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
