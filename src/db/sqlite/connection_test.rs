//! Tests for SqliteDatabase connection, migration and reset.

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::auth::hash_password;
use crate::db::{
    ADMIN_ID, Booking, BookingRepository, Database, Person, PersonRepository, Property,
    PropertyRepository, ServiceRepository, SqliteDatabase,
};
use crate::notifier::ChangeNotifier;

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");

    assert_eq!(db.persons().count().await.unwrap(), 1);
    assert_eq!(db.services().count().await.unwrap(), 5);
    assert_eq!(db.persons().get(ADMIN_ID).await.unwrap().username, "admin");
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_notifies_once() {
    let notifier = ChangeNotifier::new();
    let mut rx = notifier.subscribe();
    let db = SqliteDatabase::in_memory_with_notifier(notifier)
        .await
        .unwrap();

    db.migrate().await.unwrap();
    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());

    db.migrate().await.unwrap();
    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn reset_clears_user_data_and_restores_seeds() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();

    let person = db
        .persons()
        .create(&Person::new(
            "temp",
            "Tem",
            "Porary",
            "temp@example.com",
            "555-0199",
            hash_password("pw"),
        ))
        .await
        .unwrap();
    let property = db
        .properties()
        .create(&Property::new("1 Reset Rd", "Springfield", "IL", "62701"))
        .await
        .unwrap();
    db.bookings()
        .create(&Booking::new(
            person.id,
            property.id,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ))
        .await
        .unwrap();
    db.services().delete("leaf").await.unwrap();

    let mut rx = db.notifier().subscribe();
    db.reset().await.expect("Reset should succeed");
    assert!(rx.try_recv().is_ok());

    assert_eq!(db.persons().count().await.unwrap(), 1);
    assert_eq!(db.properties().count().await.unwrap(), 0);
    assert_eq!(db.bookings().count().await.unwrap(), 0);
    assert_eq!(db.services().count().await.unwrap(), 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn on_disk_database_persists_between_opens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("lawn_database.db");

    {
        let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
        db.migrate().await.unwrap();
        db.properties()
            .create(&Property::new("5 Disk Dr", "Springfield", "IL", "62701"))
            .await
            .unwrap();
        db.close().await;
    }

    assert!(path.exists());
    let db = SqliteDatabase::open(&path).await.unwrap();
    db.migrate().await.unwrap();
    assert_eq!(db.properties().count().await.unwrap(), 1);
    assert_eq!(db.persons().count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn shared_notifier_sees_changes_from_every_repository() {
    let notifier = ChangeNotifier::new();
    let db = SqliteDatabase::in_memory_with_notifier(notifier.clone())
        .await
        .unwrap();
    db.migrate().await.unwrap();
    let mut rx = notifier.subscribe();

    db.properties()
        .create(&Property::new("2 Signal St", "Springfield", "IL", "62701"))
        .await
        .unwrap();
    db.services().delete("weed").await.unwrap();

    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
}
