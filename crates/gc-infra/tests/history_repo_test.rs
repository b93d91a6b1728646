//! Integration tests for the SQLite history repository.

use gc_core::ports::HistoryRepositoryPort;
use gc_core::ClipKey;
use gc_infra::db::executor::DieselSqliteExecutor;
use gc_infra::db::mappers::HistoryRowMapper;
use gc_infra::db::pool::init_db_pool;
use gc_infra::db::repositories::DieselHistoryRepository;
use tempfile::TempDir;

type Repo = DieselHistoryRepository<DieselSqliteExecutor, HistoryRowMapper>;

fn open_repo(dir: &TempDir) -> Repo {
    let db_path = dir.path().join("history.db");
    let pool = init_db_pool(db_path.to_str().unwrap()).unwrap();
    DieselHistoryRepository::new(DieselSqliteExecutor::new(pool), HistoryRowMapper)
}

#[tokio::test]
async fn append_assigns_increasing_keys() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    let first = repo.append("one", 10).await.unwrap();
    let second = repo.append("two", 20).await.unwrap();

    assert!(second.key > first.key);
    assert_eq!(first.content, "one");
    assert_eq!(second.captured_at_ms, 20);
}

#[tokio::test]
async fn list_is_newest_first() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    for text in ["a", "b", "c"] {
        repo.append(text, 0).await.unwrap();
    }

    let contents: Vec<String> = repo
        .list_newest_first()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.content)
        .collect();
    assert_eq!(contents, vec!["c", "b", "a"]);
    assert_eq!(repo.latest().await.unwrap().unwrap().content, "c");
}

#[tokio::test]
async fn empty_history_has_no_latest() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    assert!(repo.list_newest_first().await.unwrap().is_empty());
    assert_eq!(repo.latest().await.unwrap(), None);
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn get_and_remove_by_key() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    let item = repo.append("keep me", 1).await.unwrap();
    assert_eq!(repo.get(item.key).await.unwrap(), Some(item.clone()));

    assert!(repo.remove(item.key).await.unwrap());
    assert!(!repo.remove(item.key).await.unwrap());
    assert_eq!(repo.get(item.key).await.unwrap(), None);
    assert_eq!(repo.get(ClipKey(u64::MAX)).await.unwrap(), None);
}

#[tokio::test]
async fn promote_moves_item_to_a_fresh_newest_key() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    let old = repo.append("again", 1).await.unwrap();
    let other = repo.append("other", 2).await.unwrap();

    let promoted = repo.promote(old.key, 3).await.unwrap().unwrap();
    assert!(promoted.key > other.key);
    assert_eq!(promoted.content, "again");
    assert_eq!(promoted.captured_at_ms, 3);

    assert_eq!(repo.get(old.key).await.unwrap(), None);
    assert_eq!(repo.latest().await.unwrap(), Some(promoted));
    assert_eq!(repo.count().await.unwrap(), 2);

    assert_eq!(repo.promote(old.key, 4).await.unwrap(), None);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn trim_evicts_oldest_first() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    let mut keys = Vec::new();
    for i in 0..7 {
        keys.push(repo.append(&format!("item {i}"), i).await.unwrap().key);
    }

    let evicted = repo.trim_to(5).await.unwrap();
    assert_eq!(evicted, keys[..2].to_vec());
    assert_eq!(repo.count().await.unwrap(), 5);

    let remaining: Vec<ClipKey> = repo
        .list_newest_first()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.key)
        .collect();
    let mut expected = keys[2..].to_vec();
    expected.reverse();
    assert_eq!(remaining, expected);

    assert!(repo.trim_to(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn keys_are_not_reused_after_clear() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    repo.append("a", 0).await.unwrap();
    let last = repo.append("b", 0).await.unwrap();

    assert_eq!(repo.clear().await.unwrap(), 2);
    assert_eq!(repo.count().await.unwrap(), 0);

    let next = repo.append("c", 0).await.unwrap();
    assert!(next.key > last.key);
}

#[tokio::test]
async fn history_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let repo = open_repo(&dir);
        repo.append("persisted", 5).await.unwrap();
    }

    let repo = open_repo(&dir);
    let items = repo.list_newest_first().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].content, "persisted");
}
