//! Contract models for alerts service
//!
//! Pure domain types, no serde derives.

use chrono::{DateTime, Utc};
use polymorph::{Actor, ActorSpec, OwnerRef};

/// Type given to alerts created without one
pub const DEFAULT_ALERT_TYPE: &str = "alert";

/// Alert raised by a user on an owner entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: i64,
    /// Free-form alert type (defaults to "alert")
    pub r#type: String,
    /// Owning entity
    pub owner: OwnerRef,
    /// User who raised the alert
    pub user_id: i64,
    /// When the alert was marked seen
    pub seen_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alert {
    /// Not seen yet
    pub fn is_new(&self) -> bool {
        self.seen_at.is_none()
    }

    pub fn is_seen(&self) -> bool {
        !self.is_new()
    }

    /// User who raised the alert
    pub fn user(&self) -> Actor {
        Actor::new(self.user_id)
    }

    /// Entity the alert belongs to
    pub fn alertable(&self) -> &OwnerRef {
        &self.owner
    }
}

/// Parameters of a new alert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAlert {
    /// `None` uses the configured default type
    pub r#type: Option<String>,
    /// Who raises the alert
    pub actor: ActorSpec,
    pub description: Option<String>,
}

impl NewAlert {
    pub fn of_type(r#type: impl Into<String>) -> Self {
        Self {
            r#type: Some(r#type.into()),
            ..Self::default()
        }
    }

    pub fn by(mut self, actor: impl Into<ActorSpec>) -> Self {
        self.actor = actor.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Read-only alert state of an owner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertSummary {
    pub is_alerted: bool,
    pub alerts_count: u64,
}
