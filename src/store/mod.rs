//! The meal list and its archive. A [`RecordStore`] owns the ordered records in
//! memory; persistence is an explicit [`RecordStore::save`] (or a
//! [`RecordStore::commit`], which applies an [`Edit`] and then saves).

mod archive;
mod edit;
mod paths;

use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::models::Record;

pub use edit::Edit;
pub use paths::{archive_path, ARCHIVE_FILE_NAME, DATA_DIR_NAME};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("position {position} is out of range for {len} meals")]
    OutOfRange { position: usize, len: usize },
    #[error("failed to save meals: {0:#}")]
    Save(anyhow::Error),
}

/// Read the archive at `path`. Returns `None` when the file is missing or
/// anything in it fails to decode; one bad record discards the whole list.
pub fn load(path: &Path) -> Option<Vec<Record>> {
    if !path.exists() {
        debug!("no meal archive at {}", path.display());
        return None;
    }

    match archive::read_records(path) {
        Ok(records) => {
            debug!("loaded {} meals from {}", records.len(), path.display());
            Some(records)
        }
        Err(err) => {
            warn!("Failed to load meals from {}: {:#}", path.display(), err);
            None
        }
    }
}

/// The built-in sample meals shown on first launch.
pub fn seed() -> Vec<Record> {
    [
        ("Caprese Salad", 4),
        ("Chicken and Potatoes", 5),
        ("Spaghetti and Meatballs", 3),
    ]
    .into_iter()
    .filter_map(|(name, rating)| Record::new(name, None, rating))
    .collect()
}

#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    archive_path: PathBuf,
}

impl RecordStore {
    /// Load the archive at `path`, falling back to [`seed`] when nothing could
    /// be read.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let archive_path = path.into();
        let records = load(&archive_path).unwrap_or_else(|| {
            info!("using sample meals");
            seed()
        });

        Self {
            records,
            archive_path,
        }
    }

    /// [`RecordStore::open`] at the per-user archive location.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::open(archive_path()?))
    }

    /// Wrap an existing list without touching the archive.
    pub fn with_records(path: impl Into<PathBuf>, records: Vec<Record>) -> Self {
        Self {
            records,
            archive_path: path.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Add a record to the end of the list. Does not persist.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Overwrite the record at `position`, returning the one it replaced.
    pub fn replace_at(&mut self, position: usize, record: Record) -> Result<Record, StoreError> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(position)
            .ok_or(StoreError::OutOfRange { position, len })?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove and return the record at `position`. The list is untouched when
    /// the position is out of range.
    pub fn remove_at(&mut self, position: usize) -> Result<Record, StoreError> {
        let len = self.records.len();
        if position >= len {
            return Err(StoreError::OutOfRange { position, len });
        }
        Ok(self.records.remove(position))
    }

    /// Write the whole list to the archive. A failure is logged and returned;
    /// the in-memory list stays as it is either way.
    pub fn save(&self) -> Result<(), StoreError> {
        archive::write_records(&self.archive_path, &self.records).map_err(|err| {
            error!(
                "Failed to save meals to {}: {:#}",
                self.archive_path.display(),
                err
            );
            StoreError::Save(err)
        })?;

        debug!(
            "saved {} meals to {}",
            self.records.len(),
            self.archive_path.display()
        );
        Ok(())
    }

    /// Apply an edit and persist the list. Nothing is written when the edit's
    /// position is out of range.
    pub fn commit(&mut self, edit: Edit) -> Result<(), StoreError> {
        match edit {
            Edit::Add(record) => self.append(record),
            Edit::Replace { position, record } => {
                self.replace_at(position, record)?;
            }
            Edit::Remove { position } => {
                self.remove_at(position)?;
            }
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str, rating: i64) -> Record {
        Record::new(name, None, rating).unwrap()
    }

    fn three_meals() -> RecordStore {
        RecordStore::with_records(
            "unused.sqlite",
            vec![meal("A", 1), meal("B", 2), meal("C", 3)],
        )
    }

    #[test]
    fn seed_is_fixed() {
        let seeded = seed();
        let summary: Vec<_> = seeded.iter().map(|r| (r.name(), r.rating())).collect();
        assert_eq!(
            summary,
            vec![
                ("Caprese Salad", 4),
                ("Chicken and Potatoes", 5),
                ("Spaghetti and Meatballs", 3),
            ]
        );
        assert_eq!(seed(), seeded);
    }

    #[test]
    fn append_goes_to_end() {
        let mut store = three_meals();
        store.append(meal("D", 4));
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(3).map(Record::name), Some("D"));
    }

    #[test]
    fn replace_at_swaps_in_place() {
        let mut store = three_meals();
        let old = store.replace_at(1, meal("B2", 5)).unwrap();
        assert_eq!(old.name(), "B");
        let names: Vec<_> = store.records().iter().map(Record::name).collect();
        assert_eq!(names, vec!["A", "B2", "C"]);
    }

    #[test]
    fn replace_at_out_of_range_fails() {
        let mut store = three_meals();
        let err = store.replace_at(3, meal("X", 1)).unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange { position: 3, len: 3 }));
        assert_eq!(store.records(), three_meals().records());
    }

    #[test]
    fn remove_at_keeps_relative_order() {
        let mut store = three_meals();
        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.name(), "B");
        let names: Vec<_> = store.records().iter().map(Record::name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn remove_at_out_of_range_leaves_list_alone() {
        let mut store = three_meals();
        for position in [3, 5, usize::MAX] {
            let err = store.remove_at(position).unwrap_err();
            assert!(matches!(err, StoreError::OutOfRange { len: 3, .. }));
        }
        assert_eq!(store.records(), three_meals().records());
    }
}
