//! Contract models for reports service
//!
//! Pure domain types, no serde derives.

use chrono::{DateTime, Utc};
use polymorph::{Actor, OwnerRef};

/// Review state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    /// No admin, not resolved
    Open,
    /// Admin set, not resolved
    Assigned,
    Resolved,
}

/// Report raised by a user against an owner entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    /// Reported entity
    pub owner: OwnerRef,
    /// Reporting user
    pub user_id: i64,
    pub user_message: Option<String>,
    /// Assigned admin
    pub admin_id: Option<i64>,
    pub admin_message: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }

    pub fn status(&self) -> ReportStatus {
        match (self.resolved_at, self.admin_id) {
            (Some(_), _) => ReportStatus::Resolved,
            (None, Some(_)) => ReportStatus::Assigned,
            (None, None) => ReportStatus::Open,
        }
    }

    /// Reporting user
    pub fn user(&self) -> Actor {
        Actor::new(self.user_id)
    }

    /// Assigned admin, if any
    pub fn admin(&self) -> Option<Actor> {
        self.admin_id.map(Actor::new)
    }

    /// Entity the report is about
    pub fn reportable(&self) -> &OwnerRef {
        &self.owner
    }
}

/// Reason a report can point at ("spam", "offensive", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportItem {
    pub id: i64,
    pub r#type: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parameters of a new report item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReportItem {
    pub r#type: String,
    pub title: String,
}

impl NewReportItem {
    pub fn new(r#type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            r#type: r#type.into(),
            title: title.into(),
        }
    }
}

/// Read-only report state of an owner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub is_reported: bool,
    pub reports_count: u64,
}
