//! The SQLite catalog of works and collections.
//!
//! Works and collections are linked many-to-many through `work_collection`:
//! a collection contains works, and a work may be published in several
//! collections. The list views only ever see the ordered `{id, title}` rows
//! this module produces.

use crate::catalog::{CollectionItem, WorkItem};
use crate::error::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::info;

/// A work about to be stored.
#[derive(Debug, Clone, Default)]
pub struct NewWork {
    pub title: String,
    pub author: String,
    pub kind: String,
}

/// A collection about to be stored.
#[derive(Debug, Clone, Default)]
pub struct NewCollection {
    pub title: String,
    pub format: String,
}

pub struct Library {
    conn: Connection,
}

impl Library {
    /// Opens (creating if needed) the library file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let library = Self { conn };
        library.init_schema()?;
        Ok(library)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let library = Self { conn };
        library.init_schema()?;
        Ok(library)
    }

    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS work (
                work_id INTEGER PRIMARY KEY,
                title TEXT,
                author TEXT,
                type TEXT
            );

            CREATE TABLE IF NOT EXISTS collection (
                collection_id INTEGER PRIMARY KEY,
                title TEXT,
                format TEXT
            );

            CREATE TABLE IF NOT EXISTS work_collection (
                work_id INTEGER NOT NULL REFERENCES work(work_id),
                collection_id INTEGER NOT NULL REFERENCES collection(collection_id),
                PRIMARY KEY (work_id, collection_id)
            );

            CREATE INDEX IF NOT EXISTS idx_work_title ON work(title);
            CREATE INDEX IF NOT EXISTS idx_collection_title ON collection(title);
            "#,
        )?;

        Ok(())
    }

    /// Stores a work and returns its id.
    pub fn add_work(&self, work: &NewWork) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO work (title, author, type) VALUES (?1, ?2, ?3)",
            params![&work.title, &work.author, &work.kind],
        )?;
        let id = self.conn.last_insert_rowid();
        info!(id, title = %work.title, "work added");
        Ok(id)
    }

    /// Stores a collection and returns its id.
    pub fn add_collection(&self, collection: &NewCollection) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO collection (title, format) VALUES (?1, ?2)",
            params![&collection.title, &collection.format],
        )?;
        let id = self.conn.last_insert_rowid();
        info!(id, title = %collection.title, "collection added");
        Ok(id)
    }

    /// Records that `work_id` appears in `collection_id`.
    ///
    /// Publishing the same pair twice is harmless. Unknown ids are reported
    /// as [`Error::NotFound`].
    pub fn publish(&self, work_id: i64, collection_id: i64) -> Result<()> {
        if !self.exists("SELECT 1 FROM work WHERE work_id = ?1", work_id)? {
            return Err(Error::NotFound {
                kind: "work",
                id: work_id,
            });
        }
        if !self.exists(
            "SELECT 1 FROM collection WHERE collection_id = ?1",
            collection_id,
        )? {
            return Err(Error::NotFound {
                kind: "collection",
                id: collection_id,
            });
        }

        self.conn.execute(
            r#"
            INSERT INTO work_collection (work_id, collection_id)
            VALUES (?1, ?2)
            ON CONFLICT(work_id, collection_id) DO NOTHING
            "#,
            params![work_id, collection_id],
        )?;
        info!(work_id, collection_id, "work published");
        Ok(())
    }

    /// All works, ordered by title.
    pub fn works(&self) -> Result<Vec<WorkItem>> {
        self.query_works(
            r#"
            SELECT work_id, COALESCE(title, '')
            FROM work
            ORDER BY title, work_id
            "#,
            [],
        )
    }

    /// All collections, ordered by title.
    pub fn collections(&self) -> Result<Vec<CollectionItem>> {
        self.query_collections(
            r#"
            SELECT collection_id, COALESCE(title, '')
            FROM collection
            ORDER BY title, collection_id
            "#,
            [],
        )
    }

    /// The works published in `collection_id`, ordered by title.
    pub fn contents(&self, collection_id: i64) -> Result<Vec<WorkItem>> {
        self.query_works(
            r#"
            SELECT w.work_id, COALESCE(w.title, '')
            FROM work w
            JOIN work_collection wc ON wc.work_id = w.work_id
            WHERE wc.collection_id = ?1
            ORDER BY w.title, w.work_id
            "#,
            [collection_id],
        )
    }

    /// The collections that published `work_id`, ordered by title.
    pub fn publications(&self, work_id: i64) -> Result<Vec<CollectionItem>> {
        self.query_collections(
            r#"
            SELECT c.collection_id, COALESCE(c.title, '')
            FROM collection c
            JOIN work_collection wc ON wc.collection_id = c.collection_id
            WHERE wc.work_id = ?1
            ORDER BY c.title, c.collection_id
            "#,
            [work_id],
        )
    }

    fn exists(&self, sql: &str, id: i64) -> Result<bool> {
        let found = self
            .conn
            .query_row(sql, [id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    fn query_works<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<WorkItem>> {
        let mut stmt = self.conn.prepare(sql)?;
        let works = stmt
            .query_map(params, |row| {
                Ok(WorkItem {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(works)
    }

    fn query_collections<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<CollectionItem>> {
        let mut stmt = self.conn.prepare(sql)?;
        let collections = stmt
            .query_map(params, |row| {
                Ok(CollectionItem {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(collections)
    }
}
