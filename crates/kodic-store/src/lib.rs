use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{FromRow, Pool, Sqlite};

/// One cached lookup, keyed uniquely by word. Rows are written once and
/// never refreshed; `reviewed` is bookkeeping for reading the word list
/// back later, this tool only ever writes `false`.
#[derive(Debug, FromRow)]
pub struct CachedWord {
    pub word: String,
    pub means: String,
    pub created_at: NaiveDateTime,
    pub reviewed: bool,
}

/// Word cache. Read errors fail open as a miss so the network path stays
/// available; write errors lose the entry and nothing else.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Cached definition for `word`, if any.
    async fn get(&self, word: &str) -> Option<String>;

    /// Remember a definition. Entries are never updated in place.
    async fn put(&self, word: &str, means: &str);
}

pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open the store at `db_url` (e.g. `sqlite://kodic.db`), creating the
    /// database and schema on first run.
    pub async fn open(db_url: &str) -> sqlx::Result<Self> {
        if !db_url.contains(":memory:") && !Sqlite::database_exists(db_url).await.unwrap_or(false)
        {
            Sqlite::create_database(db_url).await?;
        }

        // One connection: the watch loop is the only user, and in-memory
        // databases are per-connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(db_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS words (
                word TEXT PRIMARY KEY,
                means TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                reviewed BOOLEAN NOT NULL DEFAULT FALSE
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub async fn fetch(&self, word: &str) -> sqlx::Result<Option<CachedWord>> {
        sqlx::query_as("SELECT word, means, created_at, reviewed FROM words WHERE word = ?")
            .bind(word)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn insert(&self, word: &str, means: &str) -> sqlx::Result<()> {
        sqlx::query("INSERT INTO words(word, means) VALUES(?, ?)")
            .bind(word)
            .bind(means)
            .execute(&self.pool)
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl WordStore for SqliteStore {
    async fn get(&self, word: &str) -> Option<String> {
        match self.fetch(word).await {
            Ok(entry) => entry.map(|entry| entry.means),
            Err(e) => {
                tracing::error!("failed to read cache for {word:?}: {e}");
                None
            }
        }
    }

    async fn put(&self, word: &str, means: &str) {
        match self.insert(word, means).await {
            Ok(()) => tracing::info!("cached: {word}"),
            Err(e) => tracing::error!("failed to cache {word:?}: {e}"),
        }
    }
}

/// Cache that remembers nothing; every lookup goes to the network.
pub struct NoopStore;

#[async_trait]
impl WordStore for NoopStore {
    async fn get(&self, _word: &str) -> Option<String> {
        None
    }

    async fn put(&self, _word: &str, _means: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteStore {
        SqliteStore::open("sqlite::memory:")
            .await
            .expect("in-memory store")
    }

    #[tokio::test]
    async fn miss_then_hit() {
        let store = memory_store().await;
        assert_eq!(store.get("hello").await, None);

        store.put("hello", "1. greeting ").await;
        assert_eq!(store.get("hello").await, Some("1. greeting ".to_string()));
    }

    #[tokio::test]
    async fn entries_are_not_updated_in_place() {
        let store = memory_store().await;
        store.put("hello", "first").await;
        // Second insert violates the unique key; the error is swallowed and
        // the original definition stays.
        store.put("hello", "second").await;
        assert_eq!(store.get("hello").await, Some("first".to_string()));
    }

    #[tokio::test]
    async fn new_entries_start_unreviewed() {
        let store = memory_store().await;
        store.put("hello", "1. greeting ").await;

        let entry = store.fetch("hello").await.unwrap().unwrap();
        assert_eq!(entry.word, "hello");
        assert!(!entry.reviewed);
    }

    #[tokio::test]
    async fn noop_store_never_hits() {
        let store = NoopStore;
        store.put("hello", "1. greeting ").await;
        assert_eq!(store.get("hello").await, None);
    }
}
