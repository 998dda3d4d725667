use crate::domain::Record;
use crate::dto::UpcomingBirthday;
use crate::rules::birthdays::{upcoming_birthdays, BirthdayWindow, LeapDayPolicy};
use chrono::NaiveDate;
use std::collections::HashMap;

/// All contacts, keyed by exact name. Iteration follows the order names were
/// first added.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str();
        if let Some(&slot) = self.index.get(key) {
            self.records[slot] = record;
            return;
        }
        self.index.insert(key.to_string(), self.records.len());
        self.records.push(record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&slot) => self.records.get_mut(slot),
            None => None,
        }
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let slot = self.index.remove(name)?;
        let removed = self.records.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(
            today,
            BirthdayWindow {
                days: window_days,
                leap_day: LeapDayPolicy::Feb28,
            },
        )
    }

    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window: BirthdayWindow,
    ) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(&self.records, today, window)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Directory;
    use crate::domain::{Name, Record};

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(Name::new(name).unwrap());
        record.add_phone(phone).unwrap();
        record
    }

    fn names(directory: &Directory) -> Vec<&str> {
        directory.iter().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn add_record_overwrites_same_name_in_place() {
        let mut directory = Directory::new();
        directory.add_record(record("Ada", "1111111111"));
        directory.add_record(record("Bob", "2222222222"));
        directory.add_record(record("Ada", "3333333333"));

        assert_eq!(directory.len(), 2);
        assert_eq!(names(&directory), vec!["Ada", "Bob"]);
        let ada = directory.find("Ada").unwrap();
        assert_eq!(ada.phones()[0].as_str(), "3333333333");
        assert_eq!(ada.phones().len(), 1);
    }

    #[test]
    fn find_is_exact_match() {
        let mut directory = Directory::new();
        directory.add_record(record("Ada", "1111111111"));
        assert!(directory.find("Ada").is_some());
        assert!(directory.find("ada").is_none());
        assert!(directory.find("Ada ").is_none());
    }

    #[test]
    fn find_mut_edits_stored_record() {
        let mut directory = Directory::new();
        directory.add_record(record("Ada", "1111111111"));
        directory
            .find_mut("Ada")
            .unwrap()
            .add_phone("2222222222")
            .unwrap();
        assert_eq!(directory.find("Ada").unwrap().phones().len(), 2);
        assert!(directory.find_mut("Bob").is_none());
    }

    #[test]
    fn delete_keeps_remaining_lookups_valid() {
        let mut directory = Directory::new();
        directory.add_record(record("Ada", "1111111111"));
        directory.add_record(record("Bob", "2222222222"));
        directory.add_record(record("Cy", "3333333333"));

        let removed = directory.delete("Ada").unwrap();
        assert_eq!(removed.name().as_str(), "Ada");
        assert_eq!(names(&directory), vec!["Bob", "Cy"]);
        assert_eq!(
            directory.find("Cy").unwrap().phones()[0].as_str(),
            "3333333333"
        );

        assert!(directory.delete("Ada").is_none());
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn delete_then_readd_appends_at_end() {
        let mut directory = Directory::new();
        directory.add_record(record("Ada", "1111111111"));
        directory.add_record(record("Bob", "2222222222"));
        directory.delete("Ada");
        directory.add_record(record("Ada", "1111111111"));
        assert_eq!(names(&directory), vec!["Bob", "Ada"]);
    }

    #[test]
    fn empty_directory() {
        let directory = Directory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.iter().count(), 0);
    }
}
