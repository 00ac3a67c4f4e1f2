//! Tests for SqliteBookingServiceRepository.

use chrono::NaiveDate;

use crate::auth::hash_password;
use crate::db::{
    Booking, BookingRepository, BookingService, BookingServiceRepository, Database, DbError, Id,
    Page, Person, PersonRepository, Property, PropertyRepository, SqliteDatabase,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

async fn booking(db: &SqliteDatabase) -> Id {
    let person = db
        .persons()
        .create(&Person::new(
            "bsuser",
            "Bo",
            "Lawn",
            "bo@example.com",
            "555-0144",
            hash_password("pw"),
        ))
        .await
        .unwrap();
    let property = db
        .properties()
        .create(&Property::new("3 Cedar Way", "Springfield", "IL", "62701"))
        .await
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    db.bookings()
        .create(&Booking::new(person.id, property.id, date))
        .await
        .unwrap()
        .id
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_booking_service() {
    let db = setup_db().await;
    let booking_id = booking(&db).await;
    let repo = db.booking_services();

    let entry = BookingService::new(booking_id, "mow", BookingService::DEFAULT_DURATION);
    let created = repo.create(&entry).await.unwrap();

    let retrieved = repo.get(created.id).await.unwrap();
    assert_eq!(retrieved, BookingService { id: created.id, ..entry });
    assert!(!retrieved.completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_service_is_a_constraint_violation() {
    let db = setup_db().await;
    let booking_id = booking(&db).await;

    let result = db
        .booking_services()
        .create(&BookingService::new(booking_id, "paint", 30))
        .await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_duration_is_rejected() {
    let db = setup_db().await;
    let booking_id = booking(&db).await;

    let result = db
        .booking_services()
        .create(&BookingService::new(booking_id, "mow", 0))
        .await;
    assert!(matches!(result, Err(DbError::Validation { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn find_and_list_within_a_booking() {
    let db = setup_db().await;
    let booking_id = booking(&db).await;
    let repo = db.booking_services();
    let mow = repo
        .create(&BookingService::new(booking_id, "mow", 60))
        .await
        .unwrap();
    repo.create(&BookingService::new(booking_id, "hedge", 45))
        .await
        .unwrap();

    assert_eq!(repo.find(booking_id, "mow").await.unwrap(), Some(mow));
    assert!(repo.find(booking_id, "leaf").await.unwrap().is_none());

    assert_eq!(repo.list_by_booking(booking_id).await.unwrap().len(), 2);
    assert_eq!(repo.count_by_booking(booking_id).await.unwrap(), 2);
    assert_eq!(repo.list_by_service("hedge").await.unwrap().len(), 1);

    let second_page = repo
        .page_by_booking(booking_id, Page::new(1, 1))
        .await
        .unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].service_id, "hedge");
}

#[tokio::test(flavor = "multi_thread")]
async fn search_by_booking_matches_service_description() {
    let db = setup_db().await;
    let booking_id = booking(&db).await;
    let repo = db.booking_services();
    repo.create(&BookingService::new(booking_id, "mow", 60))
        .await
        .unwrap();
    repo.create(&BookingService::new(booking_id, "hedge", 45))
        .await
        .unwrap();

    let hits = repo
        .search_by_booking(booking_id, "trimming", Page::default())
        .await
        .unwrap();
    assert_eq!(
        hits.into_iter().map(|bs| bs.service_id).collect::<Vec<_>>(),
        vec!["hedge"]
    );

    let all = repo
        .search_by_booking(booking_id, "", Page::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn toggle_completed_flips_the_flag() {
    let db = setup_db().await;
    let booking_id = booking(&db).await;
    let repo = db.booking_services();
    let entry = repo
        .create(&BookingService::new(booking_id, "weed", 20))
        .await
        .unwrap();

    assert!(repo.toggle_completed(entry.id).await.unwrap().completed);
    assert!(!repo.toggle_completed(entry.id).await.unwrap().completed);

    let missing = repo.toggle_completed(999).await;
    assert!(matches!(missing, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn save_changes_duration() {
    let db = setup_db().await;
    let booking_id = booking(&db).await;
    let repo = db.booking_services();
    let entry = repo
        .create(&BookingService::new(booking_id, "mow", 60))
        .await
        .unwrap();

    let longer = BookingService {
        duration: 90,
        ..entry.clone()
    };
    assert_eq!(repo.save(&longer).await.unwrap().duration, 90);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn remove_deletes_matching_entries_only() {
    let db = setup_db().await;
    let booking_id = booking(&db).await;
    let repo = db.booking_services();
    for service in ["mow", "mow", "edge"] {
        repo.create(&BookingService::new(booking_id, service, 30))
            .await
            .unwrap();
    }

    assert_eq!(repo.remove(booking_id, "mow").await.unwrap(), 2);
    assert_eq!(repo.remove(booking_id, "mow").await.unwrap(), 0);
    assert_eq!(repo.remove_all_for_booking(booking_id).await.unwrap(), 1);
    assert_eq!(repo.count_by_booking(booking_id).await.unwrap(), 0);
}
