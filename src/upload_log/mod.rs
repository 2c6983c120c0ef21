//! Durable, append-only log of uploaded files backed by SQLite.
mod error;
mod record;

pub use error::StorageError;
pub use record::{FileTypeCount, UploadRecord};

use rusqlite::types::Type;
use rusqlite::{Connection, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS filestable (
    filename TEXT NOT NULL,
    filetype TEXT NOT NULL,
    filesize INTEGER NOT NULL,
    uploadDate TIMESTAMP NOT NULL
)";

/// The upload log.
///
/// Owns a single SQLite connection behind a mutex, so one `UploadLog` (usually in an `Arc`) can
/// be shared by every request handler in the process. Every operation holds the lock for its
/// whole duration: appends never interleave with each other or with schema creation, and a
/// reader never sees half an append.
pub struct UploadLog {
    conn: Mutex<Connection>,
}

impl UploadLog {
    /// Opens (or creates) the database at `path` and makes sure the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening upload log");
        Self::from_connection(Connection::open(path)?)
    }

    /// A log that lives only as long as the returned value.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        let log = Self {
            conn: Mutex::new(conn),
        };
        log.init_schema()?;
        Ok(log)
    }

    /// Creates the backing table if it is missing. Safe to call any number of times.
    pub fn init_schema(&self) -> Result<(), StorageError> {
        self.lock()?.execute_batch(CREATE_TABLE)?;
        Ok(())
    }

    /// Persists one record. The row is committed when this returns.
    pub fn append(&self, record: &UploadRecord) -> Result<(), StorageError> {
        let file_size = i64::try_from(record.file_size)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        self.lock()?.execute(
            "INSERT INTO filestable (filename, filetype, filesize, uploadDate) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                record.file_name,
                record.file_type,
                file_size,
                record.upload_date
            ],
        )?;

        info!(
            file_name = %record.file_name,
            file_type = %record.file_type,
            file_size = record.file_size,
            "recorded upload"
        );
        Ok(())
    }

    /// Every record, oldest first.
    pub fn list_all(&self) -> Result<Vec<UploadRecord>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT filename, filetype, filesize, uploadDate FROM filestable ORDER BY rowid",
        )?;
        let records = stmt
            .query_map([], |row| {
                Ok(UploadRecord {
                    file_name: row.get(0)?,
                    file_type: row.get(1)?,
                    file_size: get_u64(row, 2)?,
                    upload_date: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Number of uploads per file type, most common first.
    pub fn file_type_counts(&self) -> Result<Vec<FileTypeCount>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT filetype, COUNT(*) AS uploads FROM filestable
             GROUP BY filetype
             ORDER BY uploads DESC, filetype ASC",
        )?;
        let counts = stmt
            .query_map([], |row| {
                Ok(FileTypeCount {
                    file_type: row.get(0)?,
                    count: get_u64(row, 1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(counts)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }
}

fn get_u64(row: &Row<'_>, index: usize) -> rusqlite::Result<u64> {
    let value: i64 = row.get(index)?;
    u64::try_from(value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e)))
}
