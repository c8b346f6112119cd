use crate::model::Record;
use std::collections::HashMap;

/// The in-memory contact collection, keyed by lowercased name.
///
/// The directory owns every record exclusively. Lookups return `Option`;
/// whether absence is an error is decided by each command handler, not
/// here. Nothing is ever persisted.
#[derive(Debug, Default)]
pub struct Directory {
    records: HashMap<String, Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its lowercased name. Last write wins.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().key(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&name.to_lowercase())
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&name.to_lowercase())
    }

    /// Remove the entry if present. Absence is a no-op.
    pub fn delete(&mut self, name: &str) {
        self.records.remove(&name.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn find_is_case_insensitive() {
        let mut directory = Directory::new();
        directory.add_record(record("Alice", "5551234567"));

        assert!(directory.find("alice").is_some());
        assert!(directory.find("ALICE").is_some());
        assert!(directory.find("bob").is_none());
    }

    #[test]
    fn add_record_last_write_wins() {
        let mut directory = Directory::new();
        directory.add_record(record("alice", "5551234567"));
        directory.add_record(record("Alice", "5559876543"));

        assert_eq!(directory.len(), 1);
        let phones = directory.find("alice").unwrap().phones();
        assert_eq!(phones[0].as_str(), "5559876543");
    }

    #[test]
    fn delete_on_absent_name_is_a_noop() {
        let mut directory = Directory::new();
        directory.delete("nobody");
        assert!(directory.is_empty());

        directory.add_record(record("alice", "5551234567"));
        directory.delete("ALICE");
        assert!(directory.is_empty());
    }
}
