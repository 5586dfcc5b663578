//! Polymorphic owner references
//!
//! Shared plumbing for modules that attach rows (alerts, reports, ...) to
//! arbitrary domain entities through an `(owner_type, owner_id)` pair instead
//! of a foreign key per owning table.
//!
//! - `owner`: `OwnerRef`, the `Morph` trait and the `KindRegistry` of known owner kinds
//! - `actor`: explicit actor context (no ambient "current user")
//! - `cascade`: atomic owner deletion with named cascades
//! - `resolve`: loading the owning sea-orm model back from an `OwnerRef`
//! - `config`: database and layered (YAML + env) configuration

pub mod actor;
pub mod cascade;
pub mod config;
pub mod error;
pub mod owner;
pub mod resolve;

pub use actor::{Actor, ActorCtx, ActorResolver, ActorSpec};
pub use cascade::{CascadeOnDelete, OwnerDeleter, OwnerDeletion};
pub use config::{load_config, DatabaseConfig};
pub use error::MorphError;
pub use owner::{KindEntry, KindRegistry, Morph, OwnerRef};
pub use resolve::{find_owner, MorphEntity};
