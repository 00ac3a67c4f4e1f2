//! Tests for SqlitePropertyRepository.

use crate::db::{Database, DbError, Page, Property, PropertyRepository, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn property(street: &str) -> Property {
    Property::new(street, "Springfield", "IL", "62701")
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_property() {
    let db = setup_db().await;
    let repo = db.properties();

    let prop = property("12 Elm Street");
    let created = repo.create(&prop).await.expect("Create should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, Property { id: created.id, ..prop });
}

#[tokio::test(flavor = "multi_thread")]
async fn save_updates_in_place() {
    let db = setup_db().await;
    let repo = db.properties();
    let created = repo.create(&property("1 Oak Ave")).await.unwrap();

    let moved = Property {
        post_code: "62702".to_string(),
        ..created.clone()
    };
    repo.save(&moved).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.get(created.id).await.unwrap().post_code, "62702");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_street_is_a_validation_error() {
    let db = setup_db().await;

    let result = db.properties().create(&property("  ")).await;
    assert!(matches!(result, Err(DbError::Validation { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn find_by_address_returns_first_match() {
    let db = setup_db().await;
    let repo = db.properties();
    let first = repo.create(&property("9 Birch Rd")).await.unwrap();
    repo.create(&property("9 Birch Rd")).await.unwrap();

    let found = repo.find_by_address("9 Birch Rd").await.unwrap();
    assert_eq!(found.map(|p| p.id), Some(first.id));
    assert!(repo.find_by_address("10 Birch Rd").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn search_matches_city_and_post_code() {
    let db = setup_db().await;
    let repo = db.properties();
    let there = repo
        .create(&Property::new("4 Lake Dr", "Shelbyville", "IL", "62565"))
        .await
        .unwrap();
    repo.create(&property("5 Hill St")).await.unwrap();

    let by_city = repo.search("shelby", Page::default()).await.unwrap();
    assert_eq!(by_city.iter().map(|p| p.id).collect::<Vec<_>>(), vec![there.id]);

    let by_code = repo.search("6256", Page::default()).await.unwrap();
    assert_eq!(by_code.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_property() {
    let db = setup_db().await;
    let repo = db.properties();
    let created = repo.create(&property("7 Pine Ct")).await.unwrap();

    assert_eq!(repo.delete(created.id).await.unwrap(), 1);
    assert_eq!(repo.delete(created.id).await.unwrap(), 0);
    assert_eq!(repo.count().await.unwrap(), 0);
}
