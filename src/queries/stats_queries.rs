use chrono::NaiveDate;

use crate::model::{Birthday, ContactBook};

pub const BIRTHDAY_HORIZON_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookStats {
    pub total_contacts: usize,
    pub with_birthday: usize,
    /// Birthdays stored in a form the birthday search cannot read.
    pub unreadable_birthdays: usize,
    pub with_notes: usize,
    pub with_tags: usize,
    pub distinct_tags: usize,
    /// Birthdays within the next [`BIRTHDAY_HORIZON_DAYS`] days.
    pub upcoming_birthdays: usize,
    /// The id the next new contact will receive.
    pub next_id: u64,
}

pub fn stats(book: &ContactBook, today: NaiveDate) -> BookStats {
    let with_birthday = book.iter().filter(|c| c.birthday.is_some()).count();
    let unreadable_birthdays = book
        .iter()
        .filter_map(|c| c.birthday.as_deref())
        .filter(|b| Birthday::parse(b).is_err())
        .count();

    BookStats {
        total_contacts: book.len(),
        with_birthday,
        unreadable_birthdays,
        with_notes: book.iter().filter(|c| c.notes.value().is_some()).count(),
        with_tags: book.iter().filter(|c| c.notes.has_tags()).count(),
        distinct_tags: book.all_tags().len(),
        upcoming_birthdays: book
            .find_nearest_birthdays_from(today, BIRTHDAY_HORIZON_DAYS)
            .len(),
        next_id: book.ids().peek(),
    }
}
