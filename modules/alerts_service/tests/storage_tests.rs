//! Alerts persisted in in-memory SQLite through the module lifecycle

use alerts_service::config::Config;
use alerts_service::contract::*;
use alerts_service::domain::{AlertableExt, Service};
use alerts_service::AlertsServiceModule;
use polymorph::{DatabaseConfig, Morph, OwnerDeleter};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use std::sync::Arc;

mod common;
use common::*;

async fn connect() -> Arc<DatabaseConnection> {
    init_tracing();
    let db = DatabaseConfig::default()
        .connect()
        .await
        .expect("connect to in-memory sqlite");
    db.execute_unprepared(
        "CREATE TABLE books (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL);
         CREATE TABLE tickets (id INTEGER PRIMARY KEY AUTOINCREMENT, subject TEXT NOT NULL);
         INSERT INTO books (id, title) VALUES (1, 'first'), (2, 'second');
         INSERT INTO tickets (id, subject) VALUES (1, 'help');",
    )
    .await
    .expect("create owner tables");
    Arc::new(db)
}

async fn start(db: Arc<DatabaseConnection>, config: Config) -> (AlertsServiceModule, Arc<Service>) {
    let module = AlertsServiceModule::new(config);
    module.migrate(&db).await.expect("migrate");
    module.init(db, registry()).await.expect("init");
    let service = module.service().expect("service");
    (module, service)
}

async fn count(db: &DatabaseConnection, sql: &str) -> i64 {
    let row = db
        .query_one(Statement::from_string(DbBackend::Sqlite, sql))
        .await
        .expect("count query")
        .expect("count row");
    row.try_get_by_index::<i64>(0).expect("count value")
}

#[tokio::test]
async fn test_alert_round_trip_through_sqlite() {
    let db = connect().await;
    let (_module, service) = start(db.clone(), Config::default()).await;
    let book = Book { id: 1 };

    print_test_header(
        "test_alert_round_trip_through_sqlite",
        &["Verify that alerts are stored with their owner columns and read back in order."],
    );

    let alertable = book.alertable_in(&service);
    let first = alertable
        .create_alert(&as_alice(), NewAlert::default().with_description("broken link"))
        .await
        .unwrap()
        .unwrap();
    alertable
        .create_alert(&as_bob(), NewAlert::of_type("spam"))
        .await
        .unwrap();

    let alerts = alertable.alerts().await.unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].id, first.id);
    assert_eq!(alerts[0].description.as_deref(), Some("broken link"));
    assert_eq!(alerts[1].r#type, "spam");
    assert_eq!(
        count(&db, "SELECT COUNT(*) FROM alerts WHERE owner_type = 'book' AND owner_id = 1").await,
        2
    );
    assert!(alertable.is_alerted_by(&as_bob(), &ActorSpec::Current).await.unwrap());
    assert_eq!(alertable.summary().await.unwrap().alerts_count, 2);
}

#[tokio::test]
async fn test_seen_and_delete_through_client() {
    let db = connect().await;
    let (module, _service) = start(db, Config::default()).await;
    let client = module.client().unwrap();
    let owner = Book { id: 2 }.owner_ref();

    let alert = client
        .create_alert(&as_alice(), &owner, NewAlert::default())
        .await
        .unwrap()
        .unwrap();
    assert!(alert.is_new());

    let seen = client.mark_seen(alert.id).await.unwrap();
    assert!(seen.is_seen());
    assert_eq!(client.get_alert(alert.id).await.unwrap().seen_at, seen.seen_at);

    client.delete_alert(alert.id).await.unwrap();
    assert!(matches!(
        client.get_alert(alert.id).await,
        Err(AlertsError::NotFound { .. })
    ));
    assert!(matches!(
        client.mark_seen(alert.id).await,
        Err(AlertsError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_delete_alerts_narrowed_by_type_and_actor() {
    let db = connect().await;
    let (module, _service) = start(db, Config::default()).await;
    let client = module.client().unwrap();
    let owner = Book { id: 1 }.owner_ref();

    for ctx in [as_alice(), as_bob()] {
        client.create_alert(&ctx, &owner, NewAlert::default()).await.unwrap();
        client
            .create_alert(&ctx, &owner, NewAlert::of_type("spam"))
            .await
            .unwrap();
    }

    let deleted = client
        .delete_alerts(&as_alice(), &owner, Some("spam"), Some(&ActorSpec::Current))
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let deleted = client
        .delete_alerts(&as_alice(), &owner, None, None)
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    let left = client.list_alerts(&owner).await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!((left[0].r#type.as_str(), left[0].user_id), ("spam", BOB));

    assert_eq!(client.remove_alerts(&owner).await.unwrap(), 1);
    assert!(!client.summary(&owner).await.unwrap().is_alerted);
}

#[tokio::test]
async fn test_alerted_owner_ids_are_distinct_per_kind() {
    let db = connect().await;
    let (module, service) = start(db, Config::default()).await;
    let client = module.client().unwrap();

    for id in [2, 1, 2] {
        Book { id }
            .alertable_in(&service)
            .create_alert(&as_alice(), NewAlert::default())
            .await
            .unwrap();
    }
    Ticket { id: 1 }
        .alertable_in(&service)
        .create_alert(&as_alice(), NewAlert::default())
        .await
        .unwrap();

    let ids = client
        .alerted_owner_ids(&as_alice(), Book::KIND, &ActorSpec::Current)
        .await
        .unwrap();
    assert_eq!(ids, vec![1, 2]);

    let none = client
        .alerted_owner_ids(&as_bob(), Book::KIND, &ActorSpec::Current)
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_owner_deletion_removes_alerts() {
    let db = connect().await;
    let (module, service) = start(db.clone(), Config::default()).await;

    print_test_header(
        "test_owner_deletion_removes_alerts",
        &[
            "Verify that deleting an owner through OwnerDeleter removes its alerts",
            "while kinds retaining the cascade keep theirs.",
        ],
    );

    for owner in [Book { id: 1 }.owner_ref(), Book { id: 2 }.owner_ref(), Ticket { id: 1 }.owner_ref()] {
        service
            .create_alert(&as_alice(), &owner, NewAlert::default())
            .await
            .unwrap();
    }

    let deleter = OwnerDeleter::new(db.clone(), registry()).with_cascade(module.cascade());

    let deletion = deleter.delete(&Book { id: 1 }.owner_ref()).await.unwrap();
    assert!(deletion.owner_deleted);
    assert_eq!(deletion.removed_by(alerts_service::CASCADE), 1);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM alerts WHERE owner_type = 'book'").await, 1);

    let deletion = deleter.delete(&Ticket { id: 1 }.owner_ref()).await.unwrap();
    assert!(deletion.owner_deleted);
    assert!(!deletion.ran(alerts_service::CASCADE));
    assert_eq!(count(&db, "SELECT COUNT(*) FROM alerts WHERE owner_type = 'ticket'").await, 1);
}

#[tokio::test]
async fn test_disabled_cascade_keeps_alerts() {
    let db = connect().await;
    let (module, service) = start(
        db.clone(),
        Config {
            remove_alerts_on_delete: false,
            ..Config::default()
        },
    )
    .await;

    service
        .create_alert(&as_alice(), &Book { id: 1 }.owner_ref(), NewAlert::default())
        .await
        .unwrap();

    let deleter = OwnerDeleter::new(db.clone(), registry()).with_cascade(module.cascade());
    let deletion = deleter.delete(&Book { id: 1 }.owner_ref()).await.unwrap();

    assert!(deletion.owner_deleted);
    assert!(!deletion.ran(alerts_service::CASCADE));
    assert_eq!(deletion.removed_by(alerts_service::CASCADE), 0);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM alerts").await, 1);
}

#[tokio::test]
async fn test_user_deletion_cascades_when_users_table_exists() {
    let db = connect().await;
    db.execute_unprepared(
        "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL);
         INSERT INTO users (id, name) VALUES (1, 'alice'), (2, 'bob');",
    )
    .await
    .unwrap();
    let (_module, service) = start(db.clone(), Config::default()).await;
    let owner = Book { id: 1 }.owner_ref();

    service.create_alert(&as_alice(), &owner, NewAlert::default()).await.unwrap();
    service.create_alert(&as_bob(), &owner, NewAlert::default()).await.unwrap();

    db.execute_unprepared("DELETE FROM users WHERE id = 1").await.unwrap();

    let left = service.alerts(&owner).await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].user_id, BOB);
}

#[tokio::test]
async fn test_migrations_are_repeatable() {
    let db = connect().await;
    let module = AlertsServiceModule::default();
    module.migrate(&db).await.unwrap();
    module.migrate(&db).await.unwrap();
    assert!(module.service().is_err());
}

#[tokio::test]
async fn test_migrate_creates_schema_with_and_without_users_table() {
    let bare = connect().await;
    AlertsServiceModule::default().migrate(&bare).await.unwrap();
    assert_eq!(
        count(&bare, "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'alerts'").await,
        1
    );
    assert_eq!(count(&bare, "SELECT COUNT(*) FROM pragma_foreign_key_list('alerts')").await, 0);

    let hosted = connect().await;
    hosted
        .execute_unprepared("CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)")
        .await
        .unwrap();
    AlertsServiceModule::default().migrate(&hosted).await.unwrap();
    assert_eq!(
        count(&hosted, "SELECT COUNT(*) FROM pragma_foreign_key_list('alerts') WHERE \"table\" = 'users'").await,
        1
    );
}
