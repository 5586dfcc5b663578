//! Domain service - business logic orchestration

use super::alertable::Alertable;
use super::repository::{AlertDraft, AlertsRepository};
use super::validation::validate_alert_type;
use crate::config::Config;
use crate::contract::{Alert, AlertSummary, AlertsError, NewAlert};
use polymorph::{ActorResolver, ActorSpec, KindRegistry, Morph, OwnerRef};
use std::collections::HashSet;
use std::sync::Arc;

/// Domain service for alerts
pub struct Service {
    repo: Arc<dyn AlertsRepository>,
    registry: Arc<KindRegistry>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn AlertsRepository>, registry: Arc<KindRegistry>, config: Config) -> Self {
        Self {
            repo,
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

    /// Alert capability of an owner
    pub fn alertable(&self, owner: &OwnerRef) -> Alertable<'_> {
        Alertable::new(self, owner.clone())
    }

    // ===== Owner Operations =====

    /// All alerts of an owner
    pub async fn alerts(&self, owner: &OwnerRef) -> Result<Vec<Alert>, AlertsError> {
        self.registry.validate(owner)?;
        Ok(self.repo.find_by_owner(owner).await?)
    }

    /// Raise an alert on `owner`.
    ///
    /// Returns `Ok(None)` without writing anything when the actor cannot be
    /// resolved.
    pub async fn create_alert(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        alert: NewAlert,
    ) -> Result<Option<Alert>, AlertsError> {
        self.registry.validate(owner)?;

        let Some(actor) = ctx.resolve(&alert.actor) else {
            tracing::debug!(owner = %owner, "no actor resolved, alert not created");
            return Ok(None);
        };

        let r#type = alert
            .r#type
            .unwrap_or_else(|| self.config.default_alert_type.clone());
        validate_alert_type(&r#type, self.config.max_type_length)?;

        let draft = AlertDraft {
            r#type,
            owner: owner.clone(),
            user_id: actor.id,
            description: alert.description,
        };
        let created = self.repo.insert(&draft).await?;

        tracing::debug!(
            alert_id = created.id,
            owner = %owner,
            user_id = actor.id,
            alert_type = %created.r#type,
            "alert created"
        );
        Ok(Some(created))
    }

    /// Whether the actor raised any alert on the owner (`false` if unresolved)
    pub async fn is_alerted_by(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        actor: &ActorSpec,
    ) -> Result<bool, AlertsError> {
        self.registry.validate(owner)?;
        match ctx.resolve(actor) {
            Some(actor) => Ok(self.repo.exists(owner, Some(actor.id)).await?),
            None => Ok(false),
        }
    }

    /// Whether the owner has any alert at all
    pub async fn is_alerted(&self, owner: &OwnerRef) -> Result<bool, AlertsError> {
        self.registry.validate(owner)?;
        Ok(self.repo.exists(owner, None).await?)
    }

    pub async fn alerts_count(&self, owner: &OwnerRef) -> Result<u64, AlertsError> {
        self.registry.validate(owner)?;
        Ok(self.repo.count(owner).await?)
    }

    pub async fn summary(&self, owner: &OwnerRef) -> Result<AlertSummary, AlertsError> {
        let alerts_count = self.alerts_count(owner).await?;
        Ok(AlertSummary {
            is_alerted: alerts_count > 0,
            alerts_count,
        })
    }

    /// Delete alerts of `type` (default type if `None`) on the owner.
    ///
    /// Without an actor spec every alert of the type goes; with one, only
    /// that actor's, and nothing at all if it cannot be resolved.
    pub async fn delete_alert(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        r#type: Option<&str>,
        actor: Option<&ActorSpec>,
    ) -> Result<u64, AlertsError> {
        self.registry.validate(owner)?;

        let user_id = match actor {
            None => None,
            Some(spec) => match ctx.resolve(spec) {
                Some(actor) => Some(actor.id),
                None => {
                    tracing::debug!(owner = %owner, "no actor resolved, nothing deleted");
                    return Ok(0);
                }
            },
        };

        let r#type = r#type.unwrap_or(&self.config.default_alert_type);
        let deleted = self
            .repo
            .delete_matching(owner, Some(r#type), user_id)
            .await?;

        tracing::debug!(owner = %owner, alert_type = r#type, ?user_id, deleted, "alerts deleted");
        Ok(deleted)
    }

    /// Delete every alert of an owner regardless of type or actor
    pub async fn remove_alerts(&self, owner: &OwnerRef) -> Result<u64, AlertsError> {
        self.registry.validate(owner)?;
        let removed = self.repo.delete_matching(owner, None, None).await?;
        tracing::debug!(owner = %owner, removed, "alerts removed");
        Ok(removed)
    }

    /// Ids of owners of `kind` having at least one alert by the actor
    pub async fn alerted_owner_ids(
        &self,
        ctx: &dyn ActorResolver,
        kind: &str,
        actor: &ActorSpec,
    ) -> Result<Vec<i64>, AlertsError> {
        if !self.registry.contains(kind) {
            return Err(AlertsError::UnknownOwnerKind {
                kind: kind.to_string(),
            });
        }
        match ctx.resolve(actor) {
            Some(actor) => Ok(self.repo.owner_ids_by_user(kind, actor.id).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Keep only the owners the actor has alerted
    pub async fn filter_alerted_by<T: Morph>(
        &self,
        ctx: &dyn ActorResolver,
        owners: Vec<T>,
        actor: &ActorSpec,
    ) -> Result<Vec<T>, AlertsError> {
        let ids: HashSet<i64> = self
            .alerted_owner_ids(ctx, T::KIND, actor)
            .await?
            .into_iter()
            .collect();
        Ok(owners
            .into_iter()
            .filter(|owner| ids.contains(&owner.key()))
            .collect())
    }

    // ===== Alert Operations =====

    /// Get an alert by id
    pub async fn get_alert(&self, id: i64) -> Result<Alert, AlertsError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AlertsError::alert_not_found(id))
    }

    /// Mark an alert seen. Calling it again re-stamps the time.
    pub async fn seen(&self, alert: &mut Alert) -> Result<(), AlertsError> {
        let now = chrono::Utc::now();
        let updated = self
            .repo
            .mark_seen(alert.id, now)
            .await?
            .ok_or_else(|| AlertsError::alert_not_found(alert.id))?;
        *alert = updated;
        Ok(())
    }

    /// Delete a single alert
    pub async fn delete_alert_by_id(&self, id: i64) -> Result<(), AlertsError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(AlertsError::alert_not_found(id));
        }
        Ok(())
    }

    /// Owner of an alert, checked against the registry
    pub fn owner_of(&self, alert: &Alert) -> Result<OwnerRef, AlertsError> {
        self.registry.validate(&alert.owner)?;
        Ok(alert.owner.clone())
    }
}
