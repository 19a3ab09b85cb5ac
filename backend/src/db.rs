use anyhow::{Context, Result};
use chrono::NaiveDate;
use shared::Entry;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use sqlx::sqlite::SqliteRow;
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:casino-tracker.db";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database, honoring a `DATABASE_URL` override
    pub async fn init() -> Result<Self> {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DATABASE_URL.to_string());
        Self::new(&url).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                timestamp INTEGER NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_entries_user_timestamp ON entries (user_id, timestamp)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Store a new entry record
    pub async fn store_entry(&self, entry: &Entry) -> Result<()> {
        sqlx::query(
            "INSERT INTO entries (id, user_id, date, amount, timestamp, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&entry.id)
        .bind(&entry.user_id)
        .bind(entry.date.format("%Y-%m-%d").to_string())
        .bind(entry.amount)
        .bind(entry.timestamp)
        .bind(&entry.created_at)
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    /// Delete one of a user's entries by id.
    /// Returns true if the entry was found and deleted, false otherwise.
    pub async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM entries WHERE user_id = ? AND id = ?")
            .bind(user_id)
            .bind(entry_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The full entry snapshot for one user, ordered by timestamp ascending.
    /// Ties share a calendar date and are delivered in creation order.
    pub async fn list_entries(&self, user_id: &str) -> Result<Vec<Entry>> {
        let rows = sqlx::query(
            "SELECT id, user_id, date, amount, timestamp, created_at FROM entries WHERE user_id = ? ORDER BY timestamp ASC, created_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(row_to_entry).collect()
    }
}

fn row_to_entry(row: &SqliteRow) -> Result<Entry> {
    let date: String = row.get("date");
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .with_context(|| format!("stored entry has malformed date: {}", date))?;
    Ok(Entry {
        id: row.get("id"),
        user_id: row.get("user_id"),
        date,
        amount: row.get("amount"),
        timestamp: row.get("timestamp"),
        created_at: row.get("created_at"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Setup a new test database for each test
    async fn setup_test() -> DbConnection {
        DbConnection::init_test().await.expect("Failed to create test database")
    }

    fn test_entry(id: &str, user_id: &str, date: &str, amount: f64, timestamp: i64) -> Entry {
        Entry {
            id: id.to_string(),
            user_id: user_id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            timestamp,
            created_at: "2024-01-05T12:00:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_and_list_round_trip() {
        let db = setup_test().await;

        let entry = test_entry("e1", "user-1", "2024-01-05", 50.0, 1_704_412_800_000);
        db.store_entry(&entry).await.expect("Failed to store entry");

        let entries = db.list_entries("user-1").await.expect("Failed to list entries");

        // The record must come back exactly as written
        assert_eq!(entries, vec![entry]);
    }

    #[tokio::test]
    async fn test_list_orders_by_timestamp_regardless_of_insert_order() {
        let db = setup_test().await;

        let later = test_entry("e-later", "user-1", "2024-02-01", 10.0, 1_706_745_600_000);
        let earlier = test_entry("e-earlier", "user-1", "2024-01-01", -5.0, 1_704_067_200_000);

        db.store_entry(&later).await.unwrap();
        db.store_entry(&earlier).await.unwrap();

        let entries = db.list_entries("user-1").await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "e-earlier");
        assert_eq!(entries[1].id, "e-later");
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_one_user() {
        let db = setup_test().await;

        db.store_entry(&test_entry("a", "alice", "2024-01-01", 100.0, 1)).await.unwrap();
        db.store_entry(&test_entry("b", "bob", "2024-01-01", -40.0, 1)).await.unwrap();

        let alice = db.list_entries("alice").await.unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].id, "a");

        let bob = db.list_entries("bob").await.unwrap();
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].id, "b");
    }

    #[tokio::test]
    async fn test_delete_entry() {
        let db = setup_test().await;

        let entry = test_entry("e1", "user-1", "2024-01-05", 50.0, 1_704_412_800_000);
        db.store_entry(&entry).await.unwrap();

        let deleted = db.delete_entry("user-1", "e1").await.expect("Failed to delete entry");
        assert!(deleted, "Entry should have been deleted");

        let entries = db.list_entries("user-1").await.unwrap();
        assert!(entries.is_empty());

        // Deleting again reports not found
        let deleted_again = db.delete_entry("user-1", "e1").await.unwrap();
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn test_delete_rejects_other_users_entries() {
        let db = setup_test().await;

        let entry = test_entry("e1", "alice", "2024-01-05", 50.0, 1_704_412_800_000);
        db.store_entry(&entry).await.unwrap();

        // Bob cannot remove Alice's record
        let deleted = db.delete_entry("bob", "e1").await.unwrap();
        assert!(!deleted);

        let entries = db.list_entries("alice").await.unwrap();
        assert_eq!(entries.len(), 1);
    }
}
