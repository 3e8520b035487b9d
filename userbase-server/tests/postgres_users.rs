//! PostgreSQL repository tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p userbase-server -- --ignored --test-threads=1
//! These tests share the `users` table and reseed it.

use sqlx::PgPool;
use userbase_server::models::seed_users;
use userbase_server::{PgUserRepo, StoreError, User, UserStore};

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    PgPool::connect(&url).await.expect("pool creation failed")
}

async fn repo() -> PgUserRepo {
    let repo = PgUserRepo::new(pool().await);
    repo.init().await.expect("init failed");
    repo
}

#[tokio::test]
#[ignore = "requires database"]
async fn init_seeds_exactly_three_rows() {
    let repo = repo().await;
    repo.init().await.unwrap();

    let mut users = repo.find_all().await.unwrap();
    users.sort_by_key(|u| u.id);
    assert_eq!(users, seed_users().to_vec());
}

#[tokio::test]
#[ignore = "requires database"]
async fn save_without_id_gets_generated_id() {
    let repo = repo().await;
    repo.save(User::unsaved("Ada", "Lovelace")).await.unwrap();

    let users = repo.find_all().await.unwrap();
    let ada = users
        .iter()
        .find(|u| u.firstname == "Ada" && u.lastname == "Lovelace")
        .unwrap();
    assert!(ada.id.unwrap() > 3);
}

#[tokio::test]
#[ignore = "requires database"]
async fn find_one_missing_is_none() {
    let repo = repo().await;
    assert_eq!(repo.find_one(-1).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_id_is_database_error() {
    let repo = repo().await;
    let err = repo
        .save(User::new(Some(1), "dup", "dup"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Database(_)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_all_empties_table() {
    let repo = repo().await;
    repo.delete_all().await.unwrap();
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn null_names_are_rejected_by_schema() {
    let _repo = repo().await;
    let result = sqlx::query("INSERT INTO users (firstname, lastname) VALUES (NULL, 'x')")
        .execute(&pool().await)
        .await;
    assert!(result.is_err());
}
