//! Common test fixtures: owner kinds, actors and an in-memory store

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use polymorph::{KindRegistry, Morph, OwnerRef};
use reports_service::config::Config;
use reports_service::contract::{Actor, ActorCtx, NewReportItem, Report, ReportItem};
use reports_service::domain::{ReportDraft, ReportItemsRepository, ReportsRepository, Service};
use std::sync::Arc;

pub const REPORTER: i64 = 1;
pub const OTHER_REPORTER: i64 = 2;
pub const ADMIN: i64 = 10;
pub const OTHER_ADMIN: i64 = 11;

/// Owner kind with default cascade behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
}

impl Morph for Post {
    const KIND: &'static str = "post";
    const TABLE: &'static str = "posts";

    fn key(&self) -> i64 {
        self.id
    }
}

/// Owner kind that keeps its reports when deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
}

impl Morph for Comment {
    const KIND: &'static str = "comment";
    const TABLE: &'static str = "comments";
    const RETAIN_ON_DELETE: &'static [&'static str] = &[reports_service::CASCADE];

    fn key(&self) -> i64 {
        self.id
    }
}

pub fn registry() -> Arc<KindRegistry> {
    Arc::new(KindRegistry::new().with::<Post>().with::<Comment>())
}

pub fn as_reporter() -> ActorCtx {
    ActorCtx::authenticated(Actor::new(REPORTER))
}

pub fn as_admin() -> ActorCtx {
    ActorCtx::authenticated(Actor::new(ADMIN))
}

/// Route service logs to the test output (`RUST_LOG` to tune)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reports_service=debug,polymorph=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
    init_tracing();
}

#[derive(Default)]
struct State {
    reports: Vec<Report>,
    items: Vec<ReportItem>,
    links: Vec<(i64, i64)>,
    next_report: i64,
    next_item: i64,
}

/// In-memory reports and report items, sharing one link table
#[derive(Clone, Default)]
pub struct MockReportsStore {
    state: Arc<RwLock<State>>,
}

impl MockReportsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print verbose information about store state
    pub fn print_state(&self, context: &str) {
        let state = self.state.read();
        println!("\n========== ReportsStore State: {} ==========", context);
        println!("Reports: {}, items: {}, links: {}", state.reports.len(), state.items.len(), state.links.len());
        for report in &state.reports {
            println!(
                "  report #{} on {} by user {} admin={:?} resolved={:?}",
                report.id, report.owner, report.user_id, report.admin_id, report.resolved_at
            );
        }
        for (report_id, item_id) in &state.links {
            println!("  link report #{} -> item #{}", report_id, item_id);
        }
        println!("====================================================\n");
    }

    pub fn report_count(&self) -> usize {
        self.state.read().reports.len()
    }

    pub fn links(&self) -> Vec<(i64, i64)> {
        self.state.read().links.clone()
    }

    fn update(&self, id: i64, f: impl FnOnce(&mut Report)) -> Option<Report> {
        let mut state = self.state.write();
        state.reports.iter_mut().find(|r| r.id == id).map(|r| {
            f(r);
            r.clone()
        })
    }
}

#[async_trait]
impl ReportsRepository for MockReportsStore {
    async fn insert(&self, draft: &ReportDraft) -> anyhow::Result<Report> {
        let mut state = self.state.write();
        if let Some(missing) = draft
            .item_ids
            .iter()
            .find(|id| !state.items.iter().any(|i| i.id == **id))
        {
            anyhow::bail!("FOREIGN KEY constraint failed: report item {}", missing);
        }

        state.next_report += 1;
        let now = Utc::now();
        let report = Report {
            id: state.next_report,
            owner: draft.owner.clone(),
            user_id: draft.user_id,
            user_message: draft.user_message.clone(),
            admin_id: None,
            admin_message: None,
            resolved_at: None,
            created_at: now,
            updated_at: now,
        };
        state.reports.push(report.clone());
        for item_id in &draft.item_ids {
            state.links.push((report.id, *item_id));
        }
        Ok(report)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Report>> {
        Ok(self.state.read().reports.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_owner(&self, owner: &OwnerRef) -> anyhow::Result<Vec<Report>> {
        Ok(self
            .state
            .read()
            .reports
            .iter()
            .filter(|r| r.owner == *owner)
            .cloned()
            .collect())
    }

    async fn exists(&self, owner: &OwnerRef, user_id: Option<i64>) -> anyhow::Result<bool> {
        Ok(self
            .state
            .read()
            .reports
            .iter()
            .any(|r| r.owner == *owner && user_id.map_or(true, |uid| r.user_id == uid)))
    }

    async fn count(&self, owner: &OwnerRef) -> anyhow::Result<u64> {
        Ok(self
            .state
            .read()
            .reports
            .iter()
            .filter(|r| r.owner == *owner)
            .count() as u64)
    }

    async fn assign(&self, id: i64, admin_id: i64, at: DateTime<Utc>) -> anyhow::Result<Option<Report>> {
        Ok(self.update(id, |r| {
            r.admin_id = Some(admin_id);
            r.updated_at = at;
        }))
    }

    async fn resolve(
        &self,
        id: i64,
        admin_id: i64,
        admin_message: Option<&str>,
        at: DateTime<Utc>,
    ) -> anyhow::Result<Option<Report>> {
        Ok(self.update(id, |r| {
            r.admin_id = r.admin_id.or(Some(admin_id));
            if let Some(message) = admin_message {
                r.admin_message = Some(message.to_string());
            }
            r.resolved_at = Some(at);
            r.updated_at = at;
        }))
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<bool> {
        let mut state = self.state.write();
        let before = state.reports.len();
        state.reports.retain(|r| r.id != id);
        state.links.retain(|(report_id, _)| *report_id != id);
        Ok(state.reports.len() < before)
    }

    async fn delete_by_owner(&self, owner: &OwnerRef) -> anyhow::Result<u64> {
        let mut state = self.state.write();
        let ids: Vec<i64> = state
            .reports
            .iter()
            .filter(|r| r.owner == *owner)
            .map(|r| r.id)
            .collect();
        state.reports.retain(|r| !ids.contains(&r.id));
        state.links.retain(|(report_id, _)| !ids.contains(report_id));
        Ok(ids.len() as u64)
    }

    async fn owner_ids_by_user(&self, kind: &str, user_id: i64) -> anyhow::Result<Vec<i64>> {
        let mut ids: Vec<i64> = self
            .state
            .read()
            .reports
            .iter()
            .filter(|r| r.owner.kind == kind && r.user_id == user_id)
            .map(|r| r.owner.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}

#[async_trait]
impl ReportItemsRepository for MockReportsStore {
    async fn insert(&self, item: &NewReportItem) -> anyhow::Result<ReportItem> {
        let mut state = self.state.write();
        state.next_item += 1;
        let now = Utc::now();
        let created = ReportItem {
            id: state.next_item,
            r#type: item.r#type.clone(),
            title: item.title.clone(),
            created_at: now,
            updated_at: now,
        };
        state.items.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<ReportItem>> {
        Ok(self.state.read().items.iter().find(|i| i.id == id).cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<ReportItem>> {
        Ok(self.state.read().items.clone())
    }

    async fn find_by_report(&self, report_id: i64) -> anyhow::Result<Vec<ReportItem>> {
        let state = self.state.read();
        let mut items: Vec<ReportItem> = state
            .items
            .iter()
            .filter(|i| state.links.contains(&(report_id, i.id)))
            .cloned()
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<bool> {
        let mut state = self.state.write();
        let before = state.items.len();
        state.items.retain(|i| i.id != id);
        state.links.retain(|(_, item_id)| *item_id != id);
        Ok(state.items.len() < before)
    }
}

pub fn create_test_service() -> (Service, MockReportsStore) {
    create_test_service_with_config(Config::default())
}

pub fn create_test_service_with_config(config: Config) -> (Service, MockReportsStore) {
    let store = MockReportsStore::new();
    let service = Service::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        registry(),
        config,
    );
    (service, store)
}
