//! Loading owners back from their polymorphic reference

use crate::error::MorphError;
use crate::owner::{KindRegistry, OwnerRef};
use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

/// sea-orm entity backing an owner kind
pub trait MorphEntity: EntityTrait {
    const KIND: &'static str;
}

/// Load the model an owner reference points at.
///
/// Fails if the kind is not registered or belongs to another entity;
/// returns `None` if the row is gone.
pub async fn find_owner<E, C>(
    conn: &C,
    registry: &KindRegistry,
    owner: &OwnerRef,
) -> Result<Option<E::Model>, MorphError>
where
    E: MorphEntity,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    registry.validate(owner)?;
    if owner.kind != E::KIND {
        return Err(MorphError::KindMismatch {
            expected: E::KIND.to_string(),
            found: owner.kind.clone(),
        });
    }
    Ok(E::find_by_id(owner.id).one(conn).await?)
}
