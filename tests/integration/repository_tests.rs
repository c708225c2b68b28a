//! Repository tests against a live PostgreSQL database
//!
//! Run with: DATABASE_URL=postgres://... cargo test --test repository_tests -- --ignored

use chrono::{Duration, Utc};
use sqlx::postgres::PgPoolOptions;

use bibliotheca_server::{
    models::{
        author::{Author, NewAuthor},
        book::NewBook,
        borrowing::{BorrowingChanges, NewBorrowing},
        person::{NewPerson, Person},
        publisher::{NewPublisher, Publisher},
        Gender,
    },
    repository::{EntityRepository, Repository},
    AppError,
};

async fn repository() -> Repository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    Repository::new(pool)
}

async fn seed_publisher(repo: &Repository) -> Publisher {
    repo.publishers
        .create(&NewPublisher {
            name: "Test Publisher".to_string(),
            city: "Test City".to_string(),
        })
        .await
        .expect("Failed to create publisher")
}

async fn seed_author(repo: &Repository) -> Author {
    repo.authors
        .create(&NewAuthor {
            full_name: "Test Author".to_string(),
            gender: Gender::M,
            birth_date: Utc::now() - Duration::days(40 * 365),
        })
        .await
        .expect("Failed to create author")
}

fn assert_within_second(a: chrono::DateTime<Utc>, b: chrono::DateTime<Utc>) {
    assert!((a - b).num_milliseconds().abs() <= 1000, "{} vs {}", a, b);
}

#[tokio::test]
#[ignore]
async fn test_author_create_then_get() {
    let repo = repository().await;
    let birth_date = Utc::now() - Duration::days(30 * 365);

    let created = repo
        .authors
        .create(&NewAuthor {
            full_name: "Jane Doe".to_string(),
            gender: Gender::F,
            birth_date,
        })
        .await
        .unwrap();

    let fetched = repo.authors.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.full_name, "Jane Doe");
    assert_eq!(fetched.gender, Gender::F);
    assert_within_second(fetched.birth_date, birth_date);
    assert!(fetched.deleted_at.is_none());
}

#[tokio::test]
#[ignore]
async fn test_author_update_overwrites_fields_and_refreshes_timestamp() {
    let repo = repository().await;
    let author = seed_author(&repo).await;
    let birth_date = Utc::now() - Duration::days(28 * 365);

    repo.authors
        .update(
            author.id,
            &NewAuthor {
                full_name: "Renamed Author".to_string(),
                gender: Gender::F,
                birth_date,
            },
        )
        .await
        .unwrap();

    let updated = repo.authors.get_by_id(author.id).await.unwrap();
    assert_eq!(updated.full_name, "Renamed Author");
    assert_eq!(updated.gender, Gender::F);
    assert_within_second(updated.birth_date, birth_date);
    assert_eq!(updated.created_at, author.created_at);
    assert!(updated.updated_at >= author.updated_at);
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_id_is_not_found() {
    let repo = repository().await;
    let name = format!("Nobody {}", Utc::now().timestamp_nanos_opt().unwrap_or_default());

    let err = repo
        .authors
        .update(
            i64::MAX,
            &NewAuthor {
                full_name: name.clone(),
                gender: Gender::M,
                birth_date: Utc::now(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // No row appears under that id or with the submitted fields
    assert!(matches!(
        repo.authors.get_by_id_unscoped(i64::MAX).await,
        Err(AppError::NotFound(_))
    ));
    assert!(!repo
        .authors
        .get_list()
        .await
        .unwrap()
        .iter()
        .any(|a| a.full_name == name));
}

#[tokio::test]
#[ignore]
async fn test_book_list_joins_publisher_and_author() {
    let repo = repository().await;
    let publisher = seed_publisher(&repo).await;
    let author = seed_author(&repo).await;

    let book = repo
        .books
        .create(&NewBook {
            title: "Joined Book".to_string(),
            subtitle: Some("A subtitle".to_string()),
            publisher_id: publisher.id,
            author_id: author.id,
        })
        .await
        .unwrap();

    let listed = repo
        .books
        .get_list()
        .await
        .unwrap()
        .into_iter()
        .find(|b| b.id == book.id)
        .expect("book missing from list");

    let joined_publisher = listed.publisher.expect("publisher snapshot");
    assert_eq!(joined_publisher.name, publisher.name);
    assert_eq!(joined_publisher.city, publisher.city);
    assert_eq!(listed.author.expect("author snapshot").full_name, author.full_name);
}

#[tokio::test]
#[ignore]
async fn test_book_soft_delete() {
    let repo = repository().await;
    let publisher = seed_publisher(&repo).await;
    let author = seed_author(&repo).await;
    let book = repo
        .books
        .create(&NewBook {
            title: "Doomed Book".to_string(),
            subtitle: None,
            publisher_id: publisher.id,
            author_id: author.id,
        })
        .await
        .unwrap();

    repo.books.delete(book.id).await.unwrap();

    assert!(matches!(
        repo.books.get_by_id(book.id).await,
        Err(AppError::NotFound(_))
    ));
    let unscoped = repo.books.get_by_id_unscoped(book.id).await.unwrap();
    assert!(unscoped.deleted_at.is_some());

    // Deleting again is reported, not silently ignored
    assert!(matches!(
        repo.books.delete(book.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_borrowing_return_date_update() {
    let repo = repository().await;
    let publisher = seed_publisher(&repo).await;
    let author = seed_author(&repo).await;
    let person = repo
        .persons
        .create(&NewPerson {
            full_name: "Sam Reader".to_string(),
            gender: None,
            birth_date: None,
        })
        .await
        .unwrap();
    let book = repo
        .books
        .create(&NewBook {
            title: "Borrowed Book".to_string(),
            subtitle: None,
            publisher_id: publisher.id,
            author_id: author.id,
        })
        .await
        .unwrap();

    let borrowing = repo
        .borrowings
        .create(&NewBorrowing {
            book_id: book.id,
            person_id: person.id,
            borrow_date: Utc::now(),
            return_date: None,
        })
        .await
        .unwrap();
    assert!(borrowing.return_date.is_none());

    let return_date = Utc::now() + Duration::days(14);
    repo.borrowings
        .update(borrowing.id, &BorrowingChanges { return_date: Some(return_date) })
        .await
        .unwrap();

    let fetched = repo.borrowings.get_by_id(borrowing.id).await.unwrap();
    assert_within_second(fetched.return_date.expect("return date"), return_date);

    let listed = repo
        .borrowings
        .get_list()
        .await
        .unwrap()
        .into_iter()
        .find(|b| b.id == borrowing.id)
        .expect("borrowing missing from list");
    assert_eq!(listed.book.expect("book snapshot").title, "Borrowed Book");
    assert_eq!(listed.person.expect("person snapshot").full_name, "Sam Reader");

    repo.borrowings.delete(borrowing.id).await.unwrap();
    assert!(matches!(
        repo.borrowings
            .update(borrowing.id, &BorrowingChanges { return_date: None })
            .await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_deleted_publisher_drops_out_of_book_join() {
    let repo = repository().await;
    let publisher = seed_publisher(&repo).await;
    let author = seed_author(&repo).await;
    let book = repo
        .books
        .create(&NewBook {
            title: "Orphaned Book".to_string(),
            subtitle: None,
            publisher_id: publisher.id,
            author_id: author.id,
        })
        .await
        .unwrap();

    repo.publishers.delete(publisher.id).await.unwrap();

    let fetched = repo.books.get_by_id(book.id).await.unwrap();
    assert_eq!(fetched.publisher_id, publisher.id);
    assert!(fetched.publisher.is_none());
    assert!(fetched.author.is_some());
}

async fn seed_person(repo: &Repository) -> Person {
    repo.persons
        .create(&NewPerson {
            full_name: "Test Person".to_string(),
            gender: Some(Gender::F),
            birth_date: None,
        })
        .await
        .expect("Failed to create person")
}

#[tokio::test]
#[ignore]
async fn test_author_soft_delete() {
    let repo = repository().await;
    let author = seed_author(&repo).await;

    repo.authors.delete(author.id).await.unwrap();

    assert!(matches!(
        repo.authors.get_by_id(author.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(repo
        .authors
        .get_by_id_unscoped(author.id)
        .await
        .unwrap()
        .deleted_at
        .is_some());
    assert!(!repo.authors.get_list().await.unwrap().iter().any(|a| a.id == author.id));
    assert!(matches!(
        repo.authors.delete(author.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_person_soft_delete() {
    let repo = repository().await;
    let person = seed_person(&repo).await;

    repo.persons.delete(person.id).await.unwrap();

    assert!(matches!(
        repo.persons.get_by_id(person.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(repo
        .persons
        .get_by_id_unscoped(person.id)
        .await
        .unwrap()
        .deleted_at
        .is_some());
    assert!(matches!(
        repo.persons
            .update(
                person.id,
                &NewPerson {
                    full_name: "Too Late".to_string(),
                    gender: None,
                    birth_date: None,
                },
            )
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        repo.persons.delete(person.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_publisher_soft_delete() {
    let repo = repository().await;
    let publisher = seed_publisher(&repo).await;

    repo.publishers.delete(publisher.id).await.unwrap();

    assert!(matches!(
        repo.publishers.get_by_id(publisher.id).await,
        Err(AppError::NotFound(_))
    ));
    let unscoped = repo.publishers.get_by_id_unscoped(publisher.id).await.unwrap();
    assert_eq!(unscoped.name, publisher.name);
    assert!(unscoped.deleted_at.is_some());
    assert!(matches!(
        repo.publishers.delete(publisher.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_borrowing_soft_delete() {
    let repo = repository().await;
    let publisher = seed_publisher(&repo).await;
    let author = seed_author(&repo).await;
    let person = seed_person(&repo).await;
    let book = repo
        .books
        .create(&NewBook {
            title: "Lent Book".to_string(),
            subtitle: None,
            publisher_id: publisher.id,
            author_id: author.id,
        })
        .await
        .unwrap();
    let borrowing = repo
        .borrowings
        .create(&NewBorrowing {
            book_id: book.id,
            person_id: person.id,
            borrow_date: Utc::now(),
            return_date: None,
        })
        .await
        .unwrap();

    repo.borrowings.delete(borrowing.id).await.unwrap();

    assert!(matches!(
        repo.borrowings.get_by_id(borrowing.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(repo
        .borrowings
        .get_by_id_unscoped(borrowing.id)
        .await
        .unwrap()
        .deleted_at
        .is_some());
    assert!(!repo
        .borrowings
        .get_list()
        .await
        .unwrap()
        .iter()
        .any(|b| b.id == borrowing.id));
    assert!(matches!(
        repo.borrowings.delete(borrowing.id).await,
        Err(AppError::NotFound(_))
    ));
}
