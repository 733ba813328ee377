//! SQLite storage backend implementing StringStore and QueryStore

use rusqlite::{types::ToSql, Connection, OptionalExtension, Row};
use strata_core::{
    analysis::StringProperties,
    storage::{QueryStore, StorageStats, StoreError, StoreResult, StringStore},
    StringFilter, StringRecord,
};
use tracing::{debug, info};

use crate::error::{Result, SqliteError};
use crate::json::{
    count_to_sql, deserialize_frequency_map, serialize_frequency_map, sql_to_count,
    sql_to_timestamp, timestamp_to_sql,
};

const RECORD_COLUMNS: &str = "id, value, length, is_palindrome, unique_characters, word_count, \
     sha256_hash, character_frequency_map, created_at";

/// SQLite-backed string store
pub struct SqliteStore {
    conn: Connection,
}

/// A `strings` row before its columns are decoded
struct StoredRow {
    id: String,
    value: String,
    length: i64,
    is_palindrome: bool,
    unique_characters: i64,
    word_count: i64,
    sha256_hash: String,
    character_frequency_map: String,
    created_at: String,
}

impl StoredRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            value: row.get(1)?,
            length: row.get(2)?,
            is_palindrome: row.get(3)?,
            unique_characters: row.get(4)?,
            word_count: row.get(5)?,
            sha256_hash: row.get(6)?,
            character_frequency_map: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    fn into_record(self) -> Result<StringRecord> {
        Ok(StringRecord {
            id: self.id,
            value: self.value,
            properties: StringProperties {
                length: sql_to_count("length", self.length)?,
                is_palindrome: self.is_palindrome,
                unique_characters: sql_to_count("unique_characters", self.unique_characters)?,
                word_count: sql_to_count("word_count", self.word_count)?,
                sha256_hash: self.sha256_hash,
                character_frequency_map: deserialize_frequency_map(&self.character_frequency_map)?,
            },
            created_at: sql_to_timestamp(&self.created_at)?,
        })
    }
}

impl SqliteStore {
    /// Create a new SQLite store from a connection
    ///
    /// The connection should already have migrations applied.
    /// Use [`crate::migrate::migrate`] to initialize a fresh database.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a new in-memory SQLite store (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Create a new file-backed SQLite store
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        crate::migrate::migrate(&conn)?;
        info!(path = %path.display(), "opened string database");
        Ok(Self::new(conn))
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn insert(&self, record: &StringRecord) -> Result<()> {
        if self.exists_row(&record.id)? {
            return Err(SqliteError::AlreadyExists(record.id.clone()));
        }

        let props = &record.properties;
        let frequency_json = serialize_frequency_map(&props.character_frequency_map)?;

        self.conn.execute(
            &format!("INSERT INTO strings ({RECORD_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"),
            rusqlite::params![
                record.id,
                record.value,
                count_to_sql(props.length),
                props.is_palindrome,
                count_to_sql(props.unique_characters),
                count_to_sql(props.word_count),
                props.sha256_hash,
                frequency_json,
                timestamp_to_sql(&record.created_at),
            ],
        )?;

        debug!(id = %record.id, "inserted string record");
        Ok(())
    }

    fn exists_row(&self, id: &str) -> Result<bool> {
        Ok(self
            .conn
            .prepare("SELECT 1 FROM strings WHERE id = ?")?
            .exists([id])?)
    }

    fn select_one(&self, id: &str) -> Result<Option<StringRecord>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {RECORD_COLUMNS} FROM strings WHERE id = ?"),
                [id],
                StoredRow::from_row,
            )
            .optional()?;

        row.map(StoredRow::into_record).transpose()
    }

    fn select_matching(&self, filter: &StringFilter) -> Result<Vec<StringRecord>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(is_palindrome) = filter.is_palindrome {
            clauses.push("is_palindrome = ?");
            params.push(Box::new(is_palindrome));
        }
        if let Some(min) = filter.min_length {
            clauses.push("length >= ?");
            params.push(Box::new(count_to_sql(min)));
        }
        if let Some(max) = filter.max_length {
            clauses.push("length <= ?");
            params.push(Box::new(count_to_sql(max)));
        }
        if let Some(count) = filter.word_count {
            clauses.push("word_count = ?");
            params.push(Box::new(count_to_sql(count)));
        }
        if let Some(c) = filter.contains_character {
            // lower() only folds ASCII, which is all a stored value may hold
            clauses.push("instr(lower(value), ?) > 0");
            params.push(Box::new(c.to_ascii_lowercase().to_string()));
        }

        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM strings{where_clause} ORDER BY created_at ASC, id ASC"
        );

        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(param_refs.as_slice(), StoredRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(StoredRow::into_record).collect()
    }
}

impl StringStore for SqliteStore {
    fn put(&mut self, record: StringRecord) -> StoreResult<()> {
        Ok(self.insert(&record)?)
    }

    fn get(&self, id: &str) -> StoreResult<Option<StringRecord>> {
        Ok(self.select_one(id)?)
    }

    fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.exists_row(id)?)
    }

    fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM strings WHERE id = ?", [id])
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(rows_affected > 0)
    }

    fn ids(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM strings ORDER BY created_at ASC, id ASC")
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .collect::<std::result::Result<Vec<String>, rusqlite::Error>>()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(ids)
    }

    fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM strings", [], |row| row.get(0))
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(count as usize)
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM strings", [])
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }
}

impl QueryStore for SqliteStore {
    fn query(&self, filter: &StringFilter) -> StoreResult<Vec<StringRecord>> {
        Ok(self.select_matching(filter)?)
    }

    fn stats(&self) -> StoreResult<StorageStats> {
        let (total, palindromes): (i64, i64) = self
            .conn
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(is_palindrome), 0) FROM strings",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(StorageStats {
            total_records: total as usize,
            palindromes: palindromes as usize,
        })
    }
}
