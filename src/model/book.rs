use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::birthday::Birthday;
use super::contact::Contact;
use super::ids::{ContactId, IdSequence};
use super::note::Note;
use crate::error::{BookError, BookResult};
use crate::validation::trim_optional;

/// Ordered collection of contacts plus the id sequence that names them.
/// Insertion order is preserved; nothing here reorders contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    ids: IdSequence,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a book from stored parts. The sequence is advanced past every
    /// stored id.
    pub fn from_parts(contacts: Vec<Contact>, ids: IdSequence) -> BookResult<Self> {
        let mut book = Self { contacts, ids };
        book.reconcile_ids()?;
        Ok(book)
    }

    pub fn reconcile_ids(&mut self) -> BookResult<()> {
        for contact in &self.contacts {
            self.ids.observe(contact.id)?;
        }
        Ok(())
    }

    pub fn ids(&self) -> &IdSequence {
        &self.ids
    }

    /// Build a contact with the next id from this book's sequence. The
    /// contact is not added; pass it to [`ContactBook::add_contact`].
    pub fn new_contact(
        &mut self,
        name: &str,
        address: Option<&str>,
        phone_number: Option<&str>,
        email: Option<&str>,
        birthday: Option<&str>,
        notes: Note,
    ) -> BookResult<Contact> {
        // Validate before drawing an id so failures don't burn one.
        crate::validation::non_blank(name, "name")?;
        let mut contact = Contact::create(self.ids.next_id()?, name, notes)?;
        contact.address = trim_optional(address);
        contact.phone_number = trim_optional(phone_number);
        contact.email = trim_optional(email);
        contact.birthday = trim_optional(birthday);
        Ok(contact)
    }

    /// Append a contact. Only an id of `u64::MAX` is refused.
    pub fn add_contact(&mut self, contact: Contact) -> BookResult<()> {
        self.ids.observe(contact.id)?;
        log::debug!("Adding contact {} ({})", contact.id, contact.name);
        self.contacts.push(contact);
        Ok(())
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn existing_names(&self) -> Vec<&str> {
        self.contacts.iter().map(|c| c.name.as_str()).collect()
    }

    /// Case-sensitive substring match on names.
    pub fn find_by_name_substring(&self, needle: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.name.contains(needle))
            .collect()
    }

    pub fn find_by_exact_name(&self, name: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.name == name).collect()
    }

    pub fn find_by_id(&self, id: ContactId) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.id == id).collect()
    }

    pub fn get(&self, id: ContactId) -> BookResult<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| BookError::contact_not_found(id))
    }

    pub fn get_mut(&mut self, id: ContactId) -> BookResult<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| BookError::contact_not_found(id))
    }

    /// Case-insensitive substring match on note values. Contacts without a
    /// note value never match; an empty needle matches every other contact.
    pub fn find_by_note_substring(&self, needle: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.notes.value_contains(needle))
            .collect()
    }

    /// Remove the first contact with `id` and return it.
    pub fn delete_by_id(&mut self, id: ContactId) -> BookResult<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| BookError::contact_not_found(id))?;
        let removed = self.contacts.remove(index);
        log::debug!("Removed contact {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    /// Contacts whose birthday this year falls between today and
    /// `window_days` from now, inclusive.
    pub fn find_nearest_birthdays(&self, window_days: u32) -> Vec<&Contact> {
        self.find_nearest_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// Same as [`ContactBook::find_nearest_birthdays`] with an explicit today.
    /// Only the anniversary in `today`'s year is considered. Missing or
    /// unreadable birthdays are skipped.
    pub fn find_nearest_birthdays_from(&self, today: NaiveDate, window_days: u32) -> Vec<&Contact> {
        let until = today
            .checked_add_days(Days::new(window_days as u64))
            .unwrap_or(NaiveDate::MAX);

        self.contacts
            .iter()
            .filter(|c| {
                let Some(text) = c.birthday.as_deref() else {
                    return false;
                };
                match Birthday::parse(text) {
                    Ok(birthday) => birthday
                        .in_year(today.year())
                        .map(|date| today <= date && date <= until)
                        .unwrap_or(false),
                    Err(e) => {
                        log::debug!("Skipping contact {}: {}", c.id, e);
                        false
                    }
                }
            })
            .collect()
    }

    pub fn has_tags(&self) -> bool {
        self.contacts.iter().any(|c| c.notes.has_tags())
    }

    /// Every tag used in the book, sorted and deduplicated.
    pub fn all_tags(&self) -> Vec<&str> {
        self.contacts
            .iter()
            .flat_map(|c| c.notes.tags())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.notes.has_tag(tag))
            .collect()
    }
}
