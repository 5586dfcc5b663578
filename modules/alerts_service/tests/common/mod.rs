//! Common test fixtures: owner kinds, actors and an in-memory repository

#![allow(dead_code)]

use alerts_service::config::Config;
use alerts_service::contract::{Actor, ActorCtx, Alert};
use alerts_service::domain::{AlertDraft, AlertsRepository, Service};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use polymorph::{KindRegistry, Morph, OwnerRef};
use std::sync::Arc;

pub const ALICE: i64 = 1;
pub const BOB: i64 = 2;

/// Owner kind with default cascade behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
}

impl Morph for Book {
    const KIND: &'static str = "book";
    const TABLE: &'static str = "books";

    fn key(&self) -> i64 {
        self.id
    }
}

/// Owner kind that keeps its alerts when deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: i64,
}

impl Morph for Ticket {
    const KIND: &'static str = "ticket";
    const TABLE: &'static str = "tickets";
    const RETAIN_ON_DELETE: &'static [&'static str] = &[alerts_service::CASCADE];

    fn key(&self) -> i64 {
        self.id
    }
}

pub fn registry() -> Arc<KindRegistry> {
    Arc::new(KindRegistry::new().with::<Book>().with::<Ticket>())
}

pub fn as_alice() -> ActorCtx {
    ActorCtx::authenticated(Actor::new(ALICE))
}

pub fn as_bob() -> ActorCtx {
    ActorCtx::authenticated(Actor::new(BOB))
}

/// Route service logs to the test output (`RUST_LOG` to tune)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("alerts_service=debug,polymorph=debug")),
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

/// In-memory alerts repository
#[derive(Clone, Default)]
pub struct MockAlertsRepo {
    data: Arc<RwLock<Vec<Alert>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockAlertsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print verbose information about repository state
    pub fn print_state(&self, context: &str) {
        let data = self.data.read();
        println!("\n========== AlertsRepository State: {} ==========", context);
        println!("Total alerts: {}", data.len());
        if data.is_empty() {
            println!("  (empty)");
        }
        for alert in data.iter() {
            println!(
                "  #{} {} on {} by user {} seen={:?}",
                alert.id, alert.r#type, alert.owner, alert.user_id, alert.seen_at
            );
        }
        println!("====================================================\n");
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    fn matches(alert: &Alert, owner: &OwnerRef) -> bool {
        alert.owner == *owner
    }
}

#[async_trait]
impl AlertsRepository for MockAlertsRepo {
    async fn insert(&self, draft: &AlertDraft) -> anyhow::Result<Alert> {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        let now = Utc::now();
        let alert = Alert {
            id,
            r#type: draft.r#type.clone(),
            owner: draft.owner.clone(),
            user_id: draft.user_id,
            seen_at: None,
            description: draft.description.clone(),
            created_at: now,
            updated_at: now,
        };
        self.data.write().push(alert.clone());
        Ok(alert)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Alert>> {
        Ok(self.data.read().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_owner(&self, owner: &OwnerRef) -> anyhow::Result<Vec<Alert>> {
        Ok(self
            .data
            .read()
            .iter()
            .filter(|a| Self::matches(a, owner))
            .cloned()
            .collect())
    }

    async fn exists(&self, owner: &OwnerRef, user_id: Option<i64>) -> anyhow::Result<bool> {
        Ok(self
            .data
            .read()
            .iter()
            .any(|a| Self::matches(a, owner) && user_id.map_or(true, |uid| a.user_id == uid)))
    }

    async fn count(&self, owner: &OwnerRef) -> anyhow::Result<u64> {
        Ok(self
            .data
            .read()
            .iter()
            .filter(|a| Self::matches(a, owner))
            .count() as u64)
    }

    async fn delete_matching(
        &self,
        owner: &OwnerRef,
        r#type: Option<&str>,
        user_id: Option<i64>,
    ) -> anyhow::Result<u64> {
        let mut data = self.data.write();
        let before = data.len();
        data.retain(|a| {
            !(Self::matches(a, owner)
                && r#type.map_or(true, |t| a.r#type == t)
                && user_id.map_or(true, |uid| a.user_id == uid))
        });
        Ok((before - data.len()) as u64)
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<bool> {
        let mut data = self.data.write();
        let before = data.len();
        data.retain(|a| a.id != id);
        Ok(data.len() < before)
    }

    async fn mark_seen(&self, id: i64, at: DateTime<Utc>) -> anyhow::Result<Option<Alert>> {
        let mut data = self.data.write();
        Ok(data.iter_mut().find(|a| a.id == id).map(|a| {
            a.seen_at = Some(at);
            a.updated_at = at;
            a.clone()
        }))
    }

    async fn owner_ids_by_user(&self, kind: &str, user_id: i64) -> anyhow::Result<Vec<i64>> {
        let mut ids: Vec<i64> = self
            .data
            .read()
            .iter()
            .filter(|a| a.owner.kind == kind && a.user_id == user_id)
            .map(|a| a.owner.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}

pub fn create_test_service() -> (Service, MockAlertsRepo) {
    create_test_service_with_config(Config::default())
}

pub fn create_test_service_with_config(config: Config) -> (Service, MockAlertsRepo) {
    let repo = MockAlertsRepo::new();
    let service = Service::new(Arc::new(repo.clone()), registry(), config);
    (service, repo)
}
