//! Tests for SqliteBookingRepository.

use chrono::NaiveDate;

use crate::auth::hash_password;
use crate::db::utils::page_count;
use crate::db::{
    ADMIN_ID, Booking, BookingRepository, BookingService, BookingServiceRepository, Completion,
    Database, DbError, Id, Page, Person, PersonRepository, Property, PropertyRepository,
    SqliteDatabase,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A customer and a property to book against.
async fn customer_and_property(db: &SqliteDatabase) -> (Id, Id) {
    let person = db
        .persons()
        .create(&Person::new(
            "jsmith",
            "Jo",
            "Smith",
            "jo@example.com",
            "555-0123",
            hash_password("pw"),
        ))
        .await
        .unwrap();
    let property = db
        .properties()
        .create(&Property::new("42 Maple Lane", "Springfield", "IL", "62701"))
        .await
        .unwrap();
    (person.id, property.id)
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_booking() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;

    let booking = Booking::new(person_id, property_id, date(2024, 5, 1));
    let created = db.bookings().create(&booking).await.unwrap();

    let retrieved = db.bookings().get(created.id).await.unwrap();
    assert_eq!(retrieved, Booking { id: created.id, ..booking });
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_customer_is_a_constraint_violation() {
    let db = setup_db().await;
    let (_, property_id) = customer_and_property(&db).await;

    let result = db
        .bookings()
        .create(&Booking::new(999, property_id, date(2024, 5, 1)))
        .await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn transient_reference_is_rejected_before_writing() {
    let db = setup_db().await;
    let (person_id, _) = customer_and_property(&db).await;

    let result = db
        .bookings()
        .create(&Booking::new(person_id, -1, date(2024, 5, 1)))
        .await;
    assert!(matches!(result, Err(DbError::Validation { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn referenced_person_cannot_be_deleted() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    db.bookings()
        .create(&Booking::new(person_id, property_id, date(2024, 5, 1)))
        .await
        .unwrap();

    let result = db.persons().delete(person_id).await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
    assert!(db.persons().get(person_id).await.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn save_moves_booking_date() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    let created = db
        .bookings()
        .create(&Booking::new(person_id, property_id, date(2024, 5, 1)))
        .await
        .unwrap();

    let moved = Booking {
        booking_date: date(2024, 6, 15),
        ..created.clone()
    };
    let saved = db.bookings().save(&moved).await.unwrap();

    assert_eq!(saved.booking_date, date(2024, 6, 15));
    assert_eq!(db.bookings().count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn lists_and_counts_by_person_and_property() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    let repo = db.bookings();
    for day in 1..=3 {
        repo.create(&Booking::new(person_id, property_id, date(2024, 7, day)))
            .await
            .unwrap();
    }

    assert_eq!(repo.list_by_person(person_id).await.unwrap().len(), 3);
    assert_eq!(repo.list_by_property(property_id).await.unwrap().len(), 3);
    assert_eq!(repo.count_by_person(person_id).await.unwrap(), 3);
    assert_eq!(repo.count_by_property(property_id).await.unwrap(), 3);
    assert_eq!(repo.count_by_person(999).await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_between_is_inclusive_and_ordered_by_date() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    let repo = db.bookings();
    for d in [date(2024, 3, 20), date(2024, 3, 1), date(2024, 3, 10), date(2024, 4, 1)] {
        repo.create(&Booking::new(person_id, property_id, d))
            .await
            .unwrap();
    }

    let march: Vec<NaiveDate> = repo
        .list_between(date(2024, 3, 1), date(2024, 3, 20))
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.booking_date)
        .collect();
    assert_eq!(march, vec![date(2024, 3, 1), date(2024, 3, 10), date(2024, 3, 20)]);

    let backwards = repo.list_between(date(2024, 4, 1), date(2024, 3, 1)).await;
    assert!(matches!(backwards, Err(DbError::Validation { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn cost_sums_service_prices() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    let booking = db
        .bookings()
        .create(&Booking::new(person_id, property_id, date(2024, 5, 1)))
        .await
        .unwrap();

    assert_eq!(db.bookings().cost(booking.id).await.unwrap(), 0.0);

    let services = db.booking_services();
    services
        .create(&BookingService::new(booking.id, "mow", 60))
        .await
        .unwrap();
    services
        .create(&BookingService::new(booking.id, "edge", 30))
        .await
        .unwrap();

    let cost = db.bookings().cost(booking.id).await.unwrap();
    assert!((cost - 80.0).abs() < 1e-9, "cost was {}", cost);
}

#[tokio::test(flavor = "multi_thread")]
async fn completion_tracks_booked_services() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    let booking = db
        .bookings()
        .create(&Booking::new(person_id, property_id, date(2024, 5, 1)))
        .await
        .unwrap();
    let repo = db.bookings();

    assert_eq!(
        repo.completion(booking.id).await.unwrap(),
        Completion { completed: 0, total: 0 }
    );
    assert!(repo.is_completed(booking.id).await.unwrap());

    let mow = db
        .booking_services()
        .create(&BookingService::new(booking.id, "mow", 60))
        .await
        .unwrap();
    db.booking_services()
        .create(&BookingService::new(booking.id, "weed", 20))
        .await
        .unwrap();

    assert!(!repo.is_completed(booking.id).await.unwrap());
    assert_eq!(repo.list_uncompleted().await.unwrap().len(), 1);
    assert_eq!(repo.count_uncompleted().await.unwrap(), 1);

    db.booking_services()
        .set_completed(mow.id, true)
        .await
        .unwrap();
    assert_eq!(
        repo.completion(booking.id).await.unwrap(),
        Completion { completed: 1, total: 2 }
    );

    for bs in db.booking_services().list_by_booking(booking.id).await.unwrap() {
        db.booking_services()
            .set_completed(bs.id, true)
            .await
            .unwrap();
    }
    assert!(repo.is_completed(booking.id).await.unwrap());
    assert_eq!(repo.count_uncompleted().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_matches_customer_and_address() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    let booking = db
        .bookings()
        .create(&Booking::new(person_id, property_id, date(2024, 5, 1)))
        .await
        .unwrap();
    let repo = db.bookings();

    for query in ["smith", "maple", "2024-05"] {
        let hits = repo.search(query, Page::default()).await.unwrap();
        assert_eq!(
            hits.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![booking.id],
            "query {}",
            query
        );
    }
    assert!(repo.search("nowhere", Page::default()).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_page_over_bookings() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    for day in 1..=5 {
        db.bookings()
            .create(&Booking::new(person_id, property_id, date(2024, 8, day)))
            .await
            .unwrap();
    }

    let result = db.bookings().list_page(Page::number(3, 2)).await.unwrap();
    assert_eq!(result.total, 5);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.page_count(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn aggregates_of_unknown_booking_are_not_found() {
    let db = setup_db().await;
    let repo = db.bookings();

    assert!(matches!(repo.cost(999).await, Err(DbError::NotFound { .. })));
    assert!(matches!(
        repo.completion(999).await,
        Err(DbError::NotFound { .. })
    ));
    assert!(matches!(
        repo.is_completed(999).await,
        Err(DbError::NotFound { .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn uncompleted_bookings_of_one_customer() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    let repo = db.bookings();

    let open = repo
        .create(&Booking::new(person_id, property_id, date(2024, 7, 1)))
        .await
        .unwrap();
    let done = repo
        .create(&Booking::new(person_id, property_id, date(2024, 7, 8)))
        .await
        .unwrap();
    let other = repo
        .create(&Booking::new(ADMIN_ID, property_id, date(2024, 7, 9)))
        .await
        .unwrap();

    for booking in [&open, &other] {
        db.booking_services()
            .create(&BookingService::new(booking.id, "mow", 60))
            .await
            .unwrap();
    }
    let finished = db
        .booking_services()
        .create(&BookingService::new(done.id, "mow", 60))
        .await
        .unwrap();
    db.booking_services()
        .set_completed(finished.id, true)
        .await
        .unwrap();

    let pending = repo.list_uncompleted_by_person(person_id).await.unwrap();
    assert_eq!(pending, vec![open]);
    assert_eq!(repo.list_uncompleted().await.unwrap().len(), 2);
    assert!(repo.list_uncompleted_by_person(999).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn booking_pages_cover_the_whole_table() {
    let db = setup_db().await;
    let (person_id, property_id) = customer_and_property(&db).await;
    let repo = db.bookings();
    for day in 1..=12 {
        repo.create(&Booking::new(person_id, property_id, date(2024, 8, day)))
            .await
            .unwrap();
    }

    let total = repo.count().await.unwrap();
    assert_eq!(total, 12);
    let everything = repo.page(Page::new(0, total)).await.unwrap();

    for size in [1, 10, total] {
        let mut collected = Vec::new();
        for n in 1..=page_count(total, size) {
            collected.extend(repo.page(Page::number(n, size)).await.unwrap());
        }
        assert_eq!(collected, everything, "page size {}", size);
    }
}
