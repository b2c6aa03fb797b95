use serde::{Deserialize, Serialize};

use super::ids::ContactId;
use super::note::Note;
use crate::error::BookResult;
use crate::validation::{self, trim_optional};

/// A field of a contact that can be edited after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    PhoneNumber,
    Email,
    Address,
    Birthday,
    Notes,
}

impl ContactField {
    pub const ALL: &'static [ContactField] = &[
        ContactField::Name,
        ContactField::PhoneNumber,
        ContactField::Birthday,
        ContactField::Email,
        ContactField::Address,
        ContactField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::PhoneNumber => "phone number",
            ContactField::Email => "email",
            ContactField::Address => "address",
            ContactField::Birthday => "birthday date",
            ContactField::Notes => "notes",
        }
    }

    /// Resolve an attribute name. `name`, `phone number`, `email` and
    /// `birthday date` must match exactly; anything containing `address`
    /// or `notes` selects those fields, checked in that order.
    pub fn from_attribute(attribute: &str) -> Option<Self> {
        match attribute {
            "name" => Some(ContactField::Name),
            "phone number" => Some(ContactField::PhoneNumber),
            "email" => Some(ContactField::Email),
            a if a.contains("address") => Some(ContactField::Address),
            "birthday date" => Some(ContactField::Birthday),
            a if a.contains("notes") => Some(ContactField::Notes),
            _ => None,
        }
    }
}

/// (name, phone, email, address, birthday, note value)
pub type ValueSummary<'a> = (
    &'a str,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    &'a str,
);

/// (id, name, phone, birthday, email, address, note value)
pub type IdentitySummary<'a> = (
    ContactId,
    &'a str,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    &'a str,
);

/// One entry in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
    pub notes: Note,
}

impl Contact {
    /// Fails with `BlankField` when the name is blank.
    pub fn create(id: ContactId, name: &str, notes: Note) -> BookResult<Self> {
        Ok(Self {
            id,
            name: validation::non_blank(name, "name")?,
            phone_number: None,
            email: None,
            address: None,
            birthday: None,
            notes,
        })
    }

    pub fn value_summary(&self) -> ValueSummary<'_> {
        (
            &self.name,
            self.phone_number.as_deref(),
            self.email.as_deref(),
            self.address.as_deref(),
            self.birthday.as_deref(),
            self.notes.value().unwrap_or(""),
        )
    }

    pub fn identity_summary(&self) -> IdentitySummary<'_> {
        (
            self.id,
            &self.name,
            self.phone_number.as_deref(),
            self.birthday.as_deref(),
            self.email.as_deref(),
            self.address.as_deref(),
            self.notes.value().unwrap_or(""),
        )
    }

    /// Set one field. Optional fields are cleared by a blank value, a blank
    /// name is rejected, and a blank note leaves the note untouched.
    pub fn edit(&mut self, field: ContactField, new_value: &str) -> BookResult<()> {
        match field {
            ContactField::Name => self.name = validation::non_blank(new_value, "name")?,
            ContactField::PhoneNumber => self.phone_number = trim_optional(Some(new_value)),
            ContactField::Email => self.email = trim_optional(Some(new_value)),
            ContactField::Address => self.address = trim_optional(Some(new_value)),
            ContactField::Birthday => self.birthday = trim_optional(Some(new_value)),
            ContactField::Notes => self.notes.set_value(Some(new_value)),
        }
        Ok(())
    }

    /// Edit by attribute name. Returns `false` for an unrecognized attribute,
    /// in which case nothing changes.
    pub fn edit_attribute(&mut self, attribute: &str, new_value: &str) -> BookResult<bool> {
        match ContactField::from_attribute(attribute) {
            Some(field) => {
                self.edit(field, new_value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
