use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{BookError, BookResult};

/// A birth date read from the `DD<sep>MM<sep>YYYY` text stored on a contact.
/// The separator is whatever character sits at position three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Birthday {
    pub fn parse(value: &str) -> BookResult<Self> {
        let invalid = || BookError::InvalidBirthday {
            value: value.to_string(),
        };

        let separator = value.chars().nth(2).ok_or_else(invalid)?;
        if separator.is_ascii_digit() {
            return Err(invalid());
        }

        let parts: Vec<&str> = value.split(separator).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let day: u32 = parts[0].trim().parse().map_err(|_| invalid())?;
        let month: u32 = parts[1].trim().parse().map_err(|_| invalid())?;
        let year: i32 = parts[2].trim().parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
        Ok(Self { day, month, year })
    }

    /// The actual date of birth.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// The anniversary in `year`. Feb 29 falls on Feb 28 in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        match NaiveDate::from_ymd_opt(year, self.month, self.day) {
            Some(date) => Some(date),
            None if self.month == 2 && self.day == 29 => NaiveDate::from_ymd_opt(year, 2, 28),
            None => None,
        }
    }

    /// Age reached on the anniversary in the year of `on`.
    pub fn age_in(&self, on: NaiveDate) -> i32 {
        on.year() - self.year
    }

    pub fn is_after(&self, today: NaiveDate) -> bool {
        self.date().map(|d| d > today).unwrap_or(false)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}
