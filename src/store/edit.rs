use crate::models::Record;

/// A finished change handed back by an editing screen. The store applies it
/// and persists the result in [`RecordStore::commit`](super::RecordStore::commit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Append a new record to the end of the list.
    Add(Record),
    /// Overwrite the record at `position`.
    Replace { position: usize, record: Record },
    /// Delete the record at `position`.
    Remove { position: usize },
}

impl Edit {
    /// Build the edit for a record saved from the detail screen: replaces the
    /// selected row when one was being edited, otherwise appends.
    pub fn saved(selected: Option<usize>, record: Record) -> Self {
        match selected {
            Some(position) => Edit::Replace { position, record },
            None => Edit::Add(record),
        }
    }
}
