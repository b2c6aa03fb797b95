use chrono::NaiveDate;

use crate::error::BookResult;
use crate::model::{Contact, ContactBook, ContactField, ContactId, Note};
use crate::validation::{self, trim_optional};

/// Validate the optional inputs, build the contact and append it to the book.
pub fn add_contact(
    book: &mut ContactBook,
    today: NaiveDate,
    name: &str,
    phone_number: Option<&str>,
    email: Option<&str>,
    address: Option<&str>,
    birthday: Option<&str>,
    notes: Option<&str>,
    tags: &[String],
) -> BookResult<Contact> {
    let valid_name = validation::non_blank(name, "name")?;
    let phone_number = trim_optional(phone_number)
        .map(|p| validation::phone_number(&p))
        .transpose()?;
    let email = trim_optional(email)
        .map(|e| validation::email(&e))
        .transpose()?;
    let birthday = trim_optional(birthday)
        .map(|b| validation::birthday(&b, today))
        .transpose()?;

    let mut note = Note::new(trim_optional(notes).as_deref());
    note.add_tags(tags);

    let contact = book.new_contact(
        &valid_name,
        address,
        phone_number.as_deref(),
        email.as_deref(),
        birthday.as_deref(),
        note,
    )?;
    book.add_contact(contact.clone())?;

    log::info!("Created contact {} ({})", contact.id, contact.name);
    Ok(contact)
}

/// Validate `new_value` for `field` and apply it. Blank values clear optional
/// fields without validation.
pub fn edit_contact(
    book: &mut ContactBook,
    today: NaiveDate,
    id: ContactId,
    field: ContactField,
    new_value: &str,
) -> BookResult<Contact> {
    let value = match (field, trim_optional(Some(new_value))) {
        (ContactField::PhoneNumber, Some(v)) => validation::phone_number(&v)?,
        (ContactField::Email, Some(v)) => validation::email(&v)?,
        (ContactField::Birthday, Some(v)) => validation::birthday(&v, today)?,
        (_, Some(v)) => v,
        (_, None) => String::new(),
    };

    let contact = book.get_mut(id)?;
    contact.edit(field, &value)?;
    log::info!("Edited {} of contact {}", field.label(), id);
    Ok(contact.clone())
}

pub fn delete_contact(book: &mut ContactBook, id: ContactId) -> BookResult<Contact> {
    let removed = book.delete_by_id(id)?;
    log::info!("Deleted contact {} ({})", removed.id, removed.name);
    Ok(removed)
}
