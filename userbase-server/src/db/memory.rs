//! In-memory `UserStore`
//!
//! Mirrors the PostgreSQL table semantics closely enough to run the
//! service and its tests without a database:
//! - rows are returned in insertion order
//! - an explicit duplicate id fails like a primary-key violation
//! - an omitted id is assigned past the highest id ever stored
//! - `delete_all` does not reset id assignment

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreError, UserStore};
use crate::models::User;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<User>,
    last_id: i32,
}

/// Users table held in process memory
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    table: RwLock<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn find_one(&self, id: i32) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.table.write().await.rows.clear();
        Ok(())
    }

    async fn save(&self, mut user: User) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let id = match user.id {
            Some(id) => {
                if table.rows.iter().any(|u| u.id == Some(id)) {
                    return Err(StoreError::DuplicateId(id));
                }
                id
            }
            None => table.last_id + 1,
        };
        table.last_id = table.last_id.max(id);
        user.id = Some(id);
        table.rows.push(user);
        Ok(())
    }

    async fn create_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_users;
    use std::sync::Arc;

    #[tokio::test]
    async fn save_then_find_all_contains_names() {
        let store = MemoryUserStore::new();
        store.save(User::unsaved("Ada", "Lovelace")).await.unwrap();

        let users = store.find_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].firstname, "Ada");
        assert_eq!(users[0].lastname, "Lovelace");
        assert!(users[0].id.is_some());
    }

    #[tokio::test]
    async fn delete_all_empties_table() {
        let store = MemoryUserStore::new();
        store.init().await.unwrap();
        store.delete_all().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_one_missing_is_none() {
        let store = MemoryUserStore::new();
        assert_eq!(store.find_one(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_one_returns_matching_row() {
        let store = MemoryUserStore::new();
        store.init().await.unwrap();
        let user = store.find_one(2).await.unwrap().unwrap();
        assert_eq!(user, User::new(Some(2), "fdfdfdfdf", "ytyrtyrt"));
    }

    #[tokio::test]
    async fn duplicate_explicit_id_fails() {
        let store = MemoryUserStore::new();
        store.save(User::new(Some(5), "a", "b")).await.unwrap();
        let err = store.save(User::new(Some(5), "c", "d")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(5)));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn assigned_id_follows_explicit_ids() {
        let store = MemoryUserStore::new();
        store.init().await.unwrap();
        store.save(User::unsaved("Ada", "Lovelace")).await.unwrap();

        let ada = store.find_one(4).await.unwrap().unwrap();
        assert_eq!(ada.firstname, "Ada");
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete_all() {
        let store = MemoryUserStore::new();
        store.save(User::unsaved("a", "a")).await.unwrap();
        store.delete_all().await.unwrap();
        store.save(User::unsaved("b", "b")).await.unwrap();

        let users = store.find_all().await.unwrap();
        assert_eq!(users[0].id, Some(2));
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let store = MemoryUserStore::new();
        for _ in 0..3 {
            store.init().await.unwrap();
        }
        store.save(User::unsaved("extra", "row")).await.unwrap();
        store.init().await.unwrap();

        assert_eq!(store.find_all().await.unwrap(), seed_users().to_vec());
    }

    #[tokio::test]
    async fn concurrent_saves_with_distinct_ids_both_land() {
        let store = Arc::new(MemoryUserStore::new());
        let handles: Vec<_> = (10..20)
            .map(|id| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .save(User::new(Some(id), format!("first{id}"), format!("last{id}")))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|u| u.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (10..20).collect::<Vec<_>>());
    }
}
