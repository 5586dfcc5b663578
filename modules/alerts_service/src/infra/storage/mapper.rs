//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::Alert;
use crate::domain::AlertDraft;
use polymorph::OwnerRef;

impl From<entity::Model> for Alert {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            r#type: entity.r#type,
            owner: OwnerRef::new(entity.owner_type, entity.owner_id),
            user_id: entity.user_id,
            seen_at: entity.seen_at,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&AlertDraft> for entity::ActiveModel {
    fn from(draft: &AlertDraft) -> Self {
        use sea_orm::ActiveValue::*;

        let now = chrono::Utc::now();
        Self {
            id: NotSet,
            r#type: Set(draft.r#type.clone()),
            owner_type: Set(draft.owner.kind.clone()),
            owner_id: Set(draft.owner.id),
            user_id: Set(draft.user_id),
            seen_at: Set(None),
            description: Set(draft.description.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
