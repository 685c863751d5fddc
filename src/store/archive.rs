//! Reading and writing the SQLite archive that holds the meal list. Each row
//! keeps the `name`, `photo` and `rating` columns plus a `position` column that
//! preserves list order.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, OpenFlags};

use crate::models::Record;

/// Read every record in list order. Any failure, including a single row that
/// no longer passes record validation, fails the whole read.
pub(crate) fn read_records(path: &Path) -> Result<Vec<Record>> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .context("failed to open meal archive")?;

    let mut stmt = conn
        .prepare("SELECT name, photo, rating FROM meals ORDER BY position")
        .context("failed to prepare meal query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<Vec<u8>>>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .context("failed to load meals")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect meals")?;

    rows.into_iter()
        .enumerate()
        .map(|(position, (name, photo, rating))| {
            Record::new(name, photo, rating)
                .ok_or_else(|| anyhow!("invalid meal stored at position {position}"))
        })
        .collect()
}

/// Replace the archive with `records`. The list is written to a sibling file
/// first and renamed over the archive, so readers see either the old list or
/// the new one.
pub(crate) fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }

    let staging = staging_path(path);
    match fs::remove_file(&staging) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => {
            return Err(err).context("failed to clear stale staging archive");
        }
        _ => {}
    }

    write_database(&staging, records)?;
    fs::rename(&staging, path).context("failed to move staging archive into place")?;
    Ok(())
}

fn write_database(path: &Path, records: &[Record]) -> Result<()> {
    let mut conn = Connection::open(path).context("failed to create staging archive")?;

    conn.execute(
        "CREATE TABLE meals (
            position INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            photo BLOB,
            rating INTEGER NOT NULL
        )",
        [],
    )
    .context("failed to create meals table")?;

    let tx = conn.transaction().context("failed to begin transaction")?;
    {
        let mut insert = tx
            .prepare("INSERT INTO meals (position, name, photo, rating) VALUES (?1, ?2, ?3, ?4)")
            .context("failed to prepare meal insert")?;

        for (position, record) in records.iter().enumerate() {
            insert
                .execute(params![
                    position as i64,
                    record.name(),
                    record.photo(),
                    record.rating()
                ])
                .with_context(|| format!("failed to insert meal {position}"))?;
        }
    }
    tx.commit().context("failed to commit meals")?;

    conn.close()
        .map_err(|(_, err)| err)
        .context("failed to close staging archive")
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staging = OsString::from(path.as_os_str());
    staging.push(".tmp");
    PathBuf::from(staging)
}
