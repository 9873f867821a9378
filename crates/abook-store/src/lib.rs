pub mod error;
pub mod paths;
pub mod persist;

use abook_core::Record;
use error::{Result, StoreError};

/// Insertion-ordered mapping from contact name to [`Record`].
///
/// Backed by a vector so `iter` walks records in the order they were
/// first added; overwriting an existing name keeps its original slot.
/// Lookups are exact and case-sensitive; callers normalize names
/// before handing them in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactBook {
    records: Vec<Record>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any existing record with the same
    /// name. Never fails.
    pub fn add(&mut self, record: Record) {
        match self.position(record.name.as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Full replacement keyed by name; identical to [`ContactBook::add`].
    pub fn update(&mut self, record: Record) {
        self.add(record);
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name.as_str() == name)
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
