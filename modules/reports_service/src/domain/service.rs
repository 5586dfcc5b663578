//! Domain service - business logic orchestration

use super::reportable::Reportable;
use super::repository::{ReportDraft, ReportItemsRepository, ReportsRepository};
use super::validation::validate_report_item;
use crate::config::Config;
use crate::contract::{NewReportItem, Report, ReportItem, ReportSummary, ReportsError};
use polymorph::{ActorResolver, ActorSpec, KindRegistry, Morph, OwnerRef};
use std::collections::HashSet;
use std::sync::Arc;

/// Domain service for reports and report items
pub struct Service {
    reports: Arc<dyn ReportsRepository>,
    items: Arc<dyn ReportItemsRepository>,
    registry: Arc<KindRegistry>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        reports: Arc<dyn ReportsRepository>,
        items: Arc<dyn ReportItemsRepository>,
        registry: Arc<KindRegistry>,
        config: Config,
    ) -> Self {
        Self {
            reports,
            items,
            registry,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }

    /// Report capability of an owner
    pub fn reportable(&self, owner: &OwnerRef) -> Reportable<'_> {
        Reportable::new(self, owner.clone())
    }

    // ===== Owner Operations =====

    pub async fn reports(&self, owner: &OwnerRef) -> Result<Vec<Report>, ReportsError> {
        self.registry.validate(owner)?;
        Ok(self.reports.find_by_owner(owner).await?)
    }

    /// Report `owner` and link `item_ids` to the report.
    ///
    /// Repeated ids are linked once and an empty list is allowed. Unknown
    /// item ids fail on the database constraint and nothing is written.
    /// Returns `Ok(None)` when the actor cannot be resolved.
    pub async fn create_report(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        item_ids: &[i64],
        user_message: Option<String>,
        actor: &ActorSpec,
    ) -> Result<Option<Report>, ReportsError> {
        self.registry.validate(owner)?;

        let Some(actor) = ctx.resolve(actor) else {
            tracing::debug!(owner = %owner, "no actor resolved, report not created");
            return Ok(None);
        };

        let mut seen = HashSet::with_capacity(item_ids.len());
        let item_ids: Vec<i64> = item_ids.iter().copied().filter(|id| seen.insert(*id)).collect();

        let draft = ReportDraft {
            owner: owner.clone(),
            user_id: actor.id,
            user_message,
            item_ids,
        };
        let created = self.reports.insert(&draft).await?;

        tracing::debug!(
            report_id = created.id,
            owner = %owner,
            user_id = actor.id,
            items = draft.item_ids.len(),
            "report created"
        );
        Ok(Some(created))
    }

    /// Without an actor spec: whether the owner has any report. With one:
    /// whether that actor reported it (`false` if unresolved).
    pub async fn is_reported(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        actor: Option<&ActorSpec>,
    ) -> Result<bool, ReportsError> {
        self.registry.validate(owner)?;
        let user_id = match actor {
            None => None,
            Some(spec) => match ctx.resolve(spec) {
                Some(actor) => Some(actor.id),
                None => return Ok(false),
            },
        };
        Ok(self.reports.exists(owner, user_id).await?)
    }

    pub async fn reports_count(&self, owner: &OwnerRef) -> Result<u64, ReportsError> {
        self.registry.validate(owner)?;
        Ok(self.reports.count(owner).await?)
    }

    pub async fn summary(&self, owner: &OwnerRef) -> Result<ReportSummary, ReportsError> {
        let reports_count = self.reports_count(owner).await?;
        Ok(ReportSummary {
            is_reported: reports_count > 0,
            reports_count,
        })
    }

    /// Delete every report of an owner along with its item links
    pub async fn remove_reports(&self, owner: &OwnerRef) -> Result<u64, ReportsError> {
        self.registry.validate(owner)?;
        let removed = self.reports.delete_by_owner(owner).await?;
        tracing::debug!(owner = %owner, removed, "reports removed");
        Ok(removed)
    }

    /// Ids of owners of `kind` having at least one report by the actor
    pub async fn reported_owner_ids(
        &self,
        ctx: &dyn ActorResolver,
        kind: &str,
        actor: &ActorSpec,
    ) -> Result<Vec<i64>, ReportsError> {
        if !self.registry.contains(kind) {
            return Err(ReportsError::UnknownOwnerKind {
                kind: kind.to_string(),
            });
        }
        match ctx.resolve(actor) {
            Some(actor) => Ok(self.reports.owner_ids_by_user(kind, actor.id).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Keep only the owners the actor has reported
    pub async fn filter_reported_by<T: Morph>(
        &self,
        ctx: &dyn ActorResolver,
        owners: Vec<T>,
        actor: &ActorSpec,
    ) -> Result<Vec<T>, ReportsError> {
        let ids: HashSet<i64> = self
            .reported_owner_ids(ctx, T::KIND, actor)
            .await?
            .into_iter()
            .collect();
        Ok(owners
            .into_iter()
            .filter(|owner| ids.contains(&owner.key()))
            .collect())
    }

    // ===== Report Operations =====

    pub async fn get_report(&self, id: i64) -> Result<Report, ReportsError> {
        self.reports
            .find_by_id(id)
            .await?
            .ok_or_else(|| ReportsError::report_not_found(id))
    }

    /// Assign the report to `admin`, overwriting any previous assignment.
    ///
    /// Returns `false` and leaves the report untouched when the admin cannot
    /// be resolved.
    pub async fn assign(
        &self,
        ctx: &dyn ActorResolver,
        report: &mut Report,
        admin: &ActorSpec,
    ) -> Result<bool, ReportsError> {
        let Some(admin) = ctx.resolve(admin) else {
            tracing::debug!(report_id = report.id, "no admin resolved, report not assigned");
            return Ok(false);
        };

        let updated = self
            .reports
            .assign(report.id, admin.id, chrono::Utc::now())
            .await?
            .ok_or_else(|| ReportsError::report_not_found(report.id))?;
        *report = updated;

        tracing::debug!(report_id = report.id, admin_id = admin.id, "report assigned");
        Ok(true)
    }

    /// Resolve the report, assigning `admin` if nobody is assigned yet.
    ///
    /// Resolving again re-stamps `resolved_at`. Returns `false` and leaves the
    /// report untouched when the admin cannot be resolved.
    pub async fn resolve(
        &self,
        ctx: &dyn ActorResolver,
        report: &mut Report,
        admin: &ActorSpec,
        admin_message: Option<String>,
    ) -> Result<bool, ReportsError> {
        let Some(admin) = ctx.resolve(admin) else {
            tracing::debug!(report_id = report.id, "no admin resolved, report not resolved");
            return Ok(false);
        };

        let updated = self
            .reports
            .resolve(
                report.id,
                admin.id,
                admin_message.as_deref(),
                chrono::Utc::now(),
            )
            .await?
            .ok_or_else(|| ReportsError::report_not_found(report.id))?;
        *report = updated;

        tracing::debug!(
            report_id = report.id,
            admin_id = ?report.admin_id,
            "report resolved"
        );
        Ok(true)
    }

    /// Items linked to a report
    pub async fn report_items(&self, report_id: i64) -> Result<Vec<ReportItem>, ReportsError> {
        if self.reports.find_by_id(report_id).await?.is_none() {
            return Err(ReportsError::report_not_found(report_id));
        }
        Ok(self.items.find_by_report(report_id).await?)
    }

    /// Delete a report and its item links
    pub async fn delete_report(&self, id: i64) -> Result<(), ReportsError> {
        if !self.reports.delete_by_id(id).await? {
            return Err(ReportsError::report_not_found(id));
        }
        tracing::debug!(report_id = id, "report deleted");
        Ok(())
    }

    /// Owner of a report, checked against the registry
    pub fn owner_of(&self, report: &Report) -> Result<OwnerRef, ReportsError> {
        self.registry.validate(&report.owner)?;
        Ok(report.owner.clone())
    }

    // ===== Report Item Operations =====

    pub async fn create_report_item(&self, item: NewReportItem) -> Result<ReportItem, ReportsError> {
        validate_report_item(&item, self.config.max_item_length)?;
        let created = self.items.insert(&item).await?;
        tracing::debug!(item_id = created.id, item_type = %created.r#type, "report item created");
        Ok(created)
    }

    pub async fn get_report_item(&self, id: i64) -> Result<ReportItem, ReportsError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| ReportsError::report_item_not_found(id))
    }

    pub async fn list_report_items(&self) -> Result<Vec<ReportItem>, ReportsError> {
        Ok(self.items.list_all().await?)
    }

    /// Delete an item, detaching it from every report that links it
    pub async fn delete_report_item(&self, id: i64) -> Result<(), ReportsError> {
        if !self.items.delete_by_id(id).await? {
            return Err(ReportsError::report_item_not_found(id));
        }
        tracing::debug!(item_id = id, "report item deleted");
        Ok(())
    }
}
