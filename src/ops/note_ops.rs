use crate::error::BookResult;
use crate::model::{Contact, ContactBook, ContactId, NoteDeletion};
use crate::validation;

/// Replace a contact's note. Blank input keeps the existing note.
pub fn set_note(book: &mut ContactBook, id: ContactId, value: &str) -> BookResult<Contact> {
    let contact = book.get_mut(id)?;
    contact.notes.set_value(Some(value.trim()));
    Ok(contact.clone())
}

pub fn delete_note(book: &mut ContactBook, id: ContactId) -> BookResult<NoteDeletion> {
    let contact = book.get_mut(id)?;
    let outcome = contact.notes.delete();
    if outcome == NoteDeletion::Deleted {
        log::info!("Deleted notes of contact {}", id);
    }
    Ok(outcome)
}

/// Add comma-separated tags to a contact's note.
pub fn add_tags(book: &mut ContactBook, id: ContactId, raw: &str) -> BookResult<Contact> {
    let tags = validation::parse_tags(raw);
    let contact = book.get_mut(id)?;
    contact.notes.add_tags(&tags);
    log::debug!("Tagged contact {} with {:?}", id, tags);
    Ok(contact.clone())
}
