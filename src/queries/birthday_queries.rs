use chrono::{Datelike, NaiveDate};

use crate::model::{Birthday, Contact, ContactBook};

/// A contact with a birthday inside the requested window.
#[derive(Debug, Clone)]
pub struct UpcomingBirthday<'a> {
    pub contact: &'a Contact,
    pub date: NaiveDate,
    pub days_until: i64,
    pub turning_age: i32,
}

/// Birthdays in the window, soonest first. Ties keep book order.
pub fn upcoming(book: &ContactBook, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday<'_>> {
    let mut results: Vec<UpcomingBirthday<'_>> = book
        .find_nearest_birthdays_from(today, window_days)
        .into_iter()
        .filter_map(|contact| {
            let birthday = Birthday::parse(contact.birthday.as_deref()?).ok()?;
            let date = birthday.in_year(today.year())?;
            Some(UpcomingBirthday {
                contact,
                date,
                days_until: (date - today).num_days(),
                turning_age: birthday.age_in(date),
            })
        })
        .collect();

    results.sort_by_key(|u| u.days_until);
    results
}
