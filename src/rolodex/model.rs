use crate::error::{DirectoryError, Result};
use chrono::NaiveDate;
use std::fmt;

/// Phones are exactly this many ASCII digits, always kept as text so
/// leading zeros survive.
pub const PHONE_LEN: usize = 10;

/// A contact's name. Any non-empty-by-convention string is accepted; the
/// directory lowercases it only when it is used as a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The directory key for this name.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated phone number: ten decimal digits, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.len() == PHONE_LEN && value.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(DirectoryError::InvalidPhone(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact's birthday. Built from an already-parsed calendar date; this
/// type never parses date strings itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Fallible constructor for callers holding raw components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DirectoryError::InvalidBirthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// One contact: a name, an ordered list of phones (duplicates allowed),
/// and an optional birthday. No command populates the birthday yet.
#[derive(Debug, Clone)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
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

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Validate and append a phone. No duplicate check.
    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with a validated `new`.
    ///
    /// An absent `old` and a malformed `new` are distinct failures;
    /// validation happens before anything is touched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| DirectoryError::PhoneNotFound(old.to_string()))?;
        self.phones[idx] = Phone::new(new)?;
        Ok(())
    }

    /// Look up a phone by value. The argument is validated first; absence
    /// is a plain `None`, never an error.
    pub fn find_phone(&self, phone: &str) -> Result<Option<&Phone>> {
        let wanted = Phone::new(phone)?;
        Ok(self.phones.iter().find(|p| **p == wanted))
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| DirectoryError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(idx);
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
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
