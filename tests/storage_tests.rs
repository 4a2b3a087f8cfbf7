//! Storage backend tests
//!
//! Tests for SeaOrmStorage using temporary SQLite databases.

use std::sync::Arc;

use dynqr::analytics::VisitSink;
use dynqr::config::DatabaseConfig;
use dynqr::errors::DynqrError;
use dynqr::storage::backend::{SeaOrmStorage, connect_sqlite, run_migrations};
use dynqr::storage::{LookupResult, NewSlugRecord, SlugStore};
use futures_util::future::join_all;
use tempfile::TempDir;

fn new_record(slug: &str, url: &str, owner: &str) -> NewSlugRecord {
    NewSlugRecord {
        slug: slug.to_string(),
        title: format!("{} title", slug),
        redirect_url: url.to_string(),
        owner_id: owner.to_string(),
    }
}

/// 创建临时 SQLite 数据库的存储实例
async fn create_temp_storage() -> (Arc<SeaOrmStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::default())
        .await
        .expect("Failed to create storage");

    (Arc::new(storage), temp_dir)
}

// =============================================================================
// 连接测试
// =============================================================================

#[cfg(test)]
mod connection_tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_sqlite_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("new_db.db");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let conn = connect_sqlite(&db_url).await;
        assert!(conn.is_ok(), "Should connect to SQLite: {:?}", conn);
    }

    #[tokio::test]
    async fn test_run_migrations_twice() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("migration_test.db");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let conn = connect_sqlite(&db_url).await.unwrap();
        assert!(run_migrations(&conn).await.is_ok());
        assert!(run_migrations(&conn).await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_new_empty_url_fails() {
        let result = SeaOrmStorage::new("", "sqlite", &DatabaseConfig::default()).await;
        assert!(matches!(result, Err(DynqrError::DatabaseConfig(_))));
    }

    #[tokio::test]
    async fn test_ping_and_backend_name() {
        let (storage, _temp) = create_temp_storage().await;
        assert!(storage.ping().await.is_ok());
        assert_eq!(storage.backend_name(), "sqlite");
    }
}

// =============================================================================
// 基本读写测试
// =============================================================================

#[cfg(test)]
mod crud_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let (storage, _temp) = create_temp_storage().await;

        let created = storage
            .insert(new_record("abc123", "https://example.com/menu", "cafe"))
            .await
            .expect("insert should succeed");
        assert_eq!(created.visit_count, 0);

        match storage.lookup("abc123").await {
            LookupResult::Found(record) => {
                assert_eq!(record.slug, "abc123");
                assert_eq!(record.redirect_url, "https://example.com/menu");
                assert_eq!(record.owner_id, "cafe");
                assert_eq!(record.title, "abc123 title");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_missing_is_not_found() {
        let (storage, _temp) = create_temp_storage().await;
        assert!(matches!(
            storage.lookup("missing").await,
            LookupResult::NotFound
        ));
        assert!(storage.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_conflict() {
        let (storage, _temp) = create_temp_storage().await;

        storage
            .insert(new_record("dup", "https://a.example", "o1"))
            .await
            .unwrap();
        let result = storage
            .insert(new_record("dup", "https://b.example", "o2"))
            .await;

        assert!(matches!(result, Err(DynqrError::Conflict(_))));
        let kept = storage.get("dup").await.unwrap().unwrap();
        assert_eq!(kept.redirect_url, "https://a.example");
    }

    #[tokio::test]
    async fn test_update_redirect_url() {
        let (storage, _temp) = create_temp_storage().await;

        storage
            .insert(new_record("menu", "https://example.com/spring", "cafe"))
            .await
            .unwrap();
        storage
            .update_redirect_url("menu", "https://example.com/summer")
            .await
            .unwrap();

        let record = storage.get("menu").await.unwrap().unwrap();
        assert_eq!(record.redirect_url, "https://example.com/summer");
    }

    #[tokio::test]
    async fn test_update_unknown_slug_is_not_found() {
        let (storage, _temp) = create_temp_storage().await;
        let result = storage
            .update_redirect_url("ghost", "https://example.com")
            .await;
        assert!(matches!(result, Err(DynqrError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_newest_first_with_owner_filter() {
        let (storage, _temp) = create_temp_storage().await;

        for (slug, owner) in [("first", "cafe"), ("second", "bar"), ("third", "cafe")] {
            storage
                .insert(new_record(slug, "https://example.com", owner))
                .await
                .unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let all: Vec<String> = storage
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.slug)
            .collect();
        assert_eq!(all, vec!["third", "second", "first"]);

        let cafe: Vec<String> = storage
            .list(Some("cafe"))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.slug)
            .collect();
        assert_eq!(cafe, vec!["third", "first"]);

        assert_eq!(storage.count().await.unwrap(), 3);
    }
}

// =============================================================================
// 访问计数测试
// =============================================================================

#[cfg(test)]
mod visit_count_tests {
    use super::*;

    #[tokio::test]
    async fn test_increment_visits() {
        let (storage, _temp) = create_temp_storage().await;
        storage
            .insert(new_record("abc123", "https://example.com/menu", "cafe"))
            .await
            .unwrap();

        storage.increment_visits("abc123").await.unwrap();
        storage.increment_visits("abc123").await.unwrap();

        let record = storage.get("abc123").await.unwrap().unwrap();
        assert_eq!(record.visit_count, 2);
    }

    #[tokio::test]
    async fn test_increment_unknown_slug_fails() {
        let (storage, _temp) = create_temp_storage().await;
        assert!(storage.increment_visits("ghost").await.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let (storage, _temp) = create_temp_storage().await;
        storage
            .insert(new_record("hot", "https://example.com", "cafe"))
            .await
            .unwrap();

        let tasks = (0..40).map(|_| {
            let storage = storage.clone();
            tokio::spawn(async move { storage.increment_visits("hot").await })
        });
        for result in join_all(tasks).await {
            result.unwrap().unwrap();
        }

        let record = storage.get("hot").await.unwrap().unwrap();
        assert_eq!(record.visit_count, 40);
    }

    #[tokio::test]
    async fn test_update_keeps_visit_count() {
        let (storage, _temp) = create_temp_storage().await;
        storage
            .insert(new_record("menu", "https://example.com/a", "cafe"))
            .await
            .unwrap();
        storage.increment_visits("menu").await.unwrap();

        storage
            .update_redirect_url("menu", "https://example.com/b")
            .await
            .unwrap();

        let record = storage.get("menu").await.unwrap().unwrap();
        assert_eq!(record.visit_count, 1);
        assert_eq!(record.redirect_url, "https://example.com/b");
    }
}
