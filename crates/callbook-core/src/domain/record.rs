use crate::domain::birthday::Birthday;
use crate::domain::name::Name;
use crate::domain::phone::Phone;
use crate::error::CoreError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::parse(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Drops every phone equal to `raw`. Missing numbers are not an error.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone.as_str() != raw);
    }

    /// Remove-then-add, not atomic: when `new` is invalid the record is left
    /// without `old` and without `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        self.remove_phone(old);
        self.add_phone(new)
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(raw.parse()?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
