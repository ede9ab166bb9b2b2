//! SQLite-backed mapping store

use async_trait::async_trait;
use chrono::Utc;

use yo_storage::Database;

use crate::entry::{Entry, Mappings};
use crate::store::MappingStore;
use crate::Result;

/// Durable store over the `mappings` table. SQLite calls are blocking, so
/// each operation runs on tokio's blocking pool.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn load_all(db: &Database) -> yo_storage::Result<Mappings> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare("SELECT keyword, url, count FROM mappings ORDER BY keyword")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                Entry {
                    url: row.get(1)?,
                    count: row.get(2)?,
                },
            ))
        })?;

        let mappings = rows.collect::<rusqlite::Result<Mappings>>()?;
        Ok(mappings)
    })
}

fn upsert_all(db: &Database, partial: &Mappings) -> yo_storage::Result<()> {
    let updated_at = Utc::now().to_rfc3339();

    db.transaction(|conn| {
        let mut stmt = conn.prepare(
            "INSERT INTO mappings (keyword, url, count, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(keyword) DO UPDATE SET
                 url = excluded.url,
                 count = excluded.count,
                 updated_at = excluded.updated_at",
        )?;

        for (keyword, entry) in partial {
            stmt.execute(rusqlite::params![keyword, entry.url, entry.count, updated_at])?;
        }

        Ok(())
    })
}

fn delete_all(db: &Database) -> yo_storage::Result<usize> {
    db.with_connection(|conn| Ok(conn.execute("DELETE FROM mappings", [])?))
}

#[async_trait]
impl MappingStore for SqliteStore {
    async fn read_all(&self) -> Result<Mappings> {
        let db = self.db.clone();
        let mappings = tokio::task::spawn_blocking(move || load_all(&db)).await??;
        Ok(mappings)
    }

    async fn write_all(&self, partial: Mappings) -> Result<()> {
        if partial.is_empty() {
            return Ok(());
        }

        let db = self.db.clone();
        let written = partial.len();
        tokio::task::spawn_blocking(move || upsert_all(&db, &partial)).await??;

        tracing::debug!(entries = written, "Wrote mappings");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let db = self.db.clone();
        let removed = tokio::task::spawn_blocking(move || delete_all(&db)).await??;

        tracing::debug!(removed, "Cleared mappings");
        Ok(())
    }
}
