//! Module declaration and lifecycle

use crate::config::Config;
use crate::contract::ReportsApi;
use crate::domain::Service;
use crate::infra::storage::cascade::ReportsCascade;
use crate::infra::storage::repositories::{SeaOrmReportItemsRepository, SeaOrmReportsRepository};
use anyhow::Result;
use parking_lot::RwLock;
use polymorph::{CascadeOnDelete, KindRegistry};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Reports service module
pub struct ReportsServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for ReportsServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ReportsServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Create the reports, report items and join tables
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Reports service migrations completed");
        Ok(())
    }

    pub async fn init(
        &self,
        db: Arc<DatabaseConnection>,
        registry: Arc<KindRegistry>,
    ) -> Result<()> {
        let cfg = self.config();

        // Build repositories
        let reports = Arc::new(SeaOrmReportsRepository::new(db.clone()));
        let items = Arc::new(SeaOrmReportItemsRepository::new(db));

        let service = Arc::new(Service::new(reports, items, registry, cfg));
        *self.service.write() = Some(service);

        tracing::info!("Reports service initialized");
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
    pub fn client(&self) -> Result<Arc<dyn ReportsApi>> {
        let service = self.service()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    /// Cascade to register with `polymorph::OwnerDeleter`
    pub fn cascade(&self) -> Arc<dyn CascadeOnDelete> {
        Arc::new(ReportsCascade::new(self.config.read().remove_reports_on_delete))
    }
}
