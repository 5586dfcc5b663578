//! Module declaration and lifecycle

use crate::config::Config;
use crate::contract::AlertsApi;
use crate::domain::Service;
use crate::infra::storage::cascade::AlertsCascade;
use anyhow::Result;
use parking_lot::RwLock;
use polymorph::{CascadeOnDelete, KindRegistry};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Alerts service module
///
/// Lifecycle: `migrate` once per database, then `init`, then hand out the
/// service, the native client and the owner-deletion cascade.
pub struct AlertsServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for AlertsServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AlertsServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Create the alerts schema
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Alerts service migrations completed");
        Ok(())
    }

    /// Wire repository and domain service
    pub async fn init(
        &self,
        db: Arc<DatabaseConnection>,
        registry: Arc<KindRegistry>,
    ) -> Result<()> {
        let cfg = self.config();
        let repo = Arc::new(crate::infra::storage::repositories::SeaOrmAlertsRepository::new(db));
        let service = Arc::new(Service::new(repo, registry, cfg));
        *self.service.write() = Some(service);

        tracing::info!("Alerts service initialized");
        Ok(())
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// Native client for in-process calls
    pub fn client(&self) -> Result<Arc<dyn AlertsApi>> {
        let service = self.service()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    /// Cascade to register with `polymorph::OwnerDeleter`
    pub fn cascade(&self) -> Arc<dyn CascadeOnDelete> {
        Arc::new(AlertsCascade::new(self.config.read().remove_alerts_on_delete))
    }
}
