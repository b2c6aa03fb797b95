use abook::error::BookError;
use abook::model::*;
use abook::ops::*;
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()
}

fn add_named(book: &mut ContactBook, name: &str) -> Contact {
    contact_ops::add_contact(book, today(), name, None, None, None, None, None, &[]).unwrap()
}

// ==========================================================================
// CONTACT OPS TESTS
// ==========================================================================

#[test]
fn add_contact_with_all_fields() {
    let mut book = ContactBook::new();
    let tags = vec!["friends".to_string(), "work".to_string()];
    let contact = contact_ops::add_contact(
        &mut book,
        today(),
        "  Alice  ",
        Some("+380 67 123 45 67"),
        Some("alice@example.com"),
        Some("Kyiv"),
        Some("01.03.2000"),
        Some("Met at the conference"),
        &tags,
    )
    .unwrap();

    assert_eq!(contact.name, "Alice");
    assert_eq!(contact.phone_number.as_deref(), Some("+380 67 123 45 67"));
    assert_eq!(contact.email.as_deref(), Some("alice@example.com"));
    assert_eq!(contact.address.as_deref(), Some("Kyiv"));
    assert_eq!(contact.birthday.as_deref(), Some("01.03.2000"));
    assert_eq!(contact.notes.value(), Some("Met at the conference"));
    assert_eq!(contact.notes.tags_display(), "friends, work");
    assert_eq!(book.len(), 1);
    assert_eq!(book.get(contact.id).unwrap(), &contact);
}

#[test]
fn add_contact_rejects_blank_name() {
    let mut book = ContactBook::new();
    let result = contact_ops::add_contact(&mut book, today(), "  ", None, None, None, None, None, &[]);
    assert!(matches!(result, Err(BookError::BlankField { .. })));
    assert!(book.is_empty());
}

#[test]
fn add_contact_rejects_invalid_inputs() {
    let mut book = ContactBook::new();
    let bad_phone = contact_ops::add_contact(&mut book, today(), "A", Some("call me"), None, None, None, None, &[]);
    let bad_email = contact_ops::add_contact(&mut book, today(), "A", None, Some("nope"), None, None, None, &[]);
    let bad_birthday = contact_ops::add_contact(&mut book, today(), "A", None, None, None, Some("31.02.2000"), None, &[]);
    let future_birthday = contact_ops::add_contact(&mut book, today(), "A", None, None, None, Some("01.01.2030"), None, &[]);

    for result in [bad_phone, bad_email, bad_birthday, future_birthday] {
        assert!(result.unwrap_err().is_validation());
    }
    assert!(book.is_empty());
}

#[test]
fn add_contact_skips_blank_optional_fields() {
    let mut book = ContactBook::new();
    let contact = contact_ops::add_contact(&mut book, today(), "A", Some(" "), Some(""), None, None, Some(""), &[]).unwrap();
    assert_eq!(contact.phone_number, None);
    assert_eq!(contact.email, None);
    assert_eq!(contact.notes.value(), None);
}

#[test]
fn edit_contact_validates_new_value() {
    let mut book = ContactBook::new();
    let alice = add_named(&mut book, "Alice");

    let result = contact_ops::edit_contact(&mut book, today(), alice.id, ContactField::Email, "not-an-email");
    assert!(result.is_err());
    assert_eq!(book.get(alice.id).unwrap().email, None);

    let updated = contact_ops::edit_contact(&mut book, today(), alice.id, ContactField::Email, "a@example.com").unwrap();
    assert_eq!(updated.email.as_deref(), Some("a@example.com"));
    assert_eq!(book.get(alice.id).unwrap().email.as_deref(), Some("a@example.com"));
}

#[test]
fn edit_contact_blank_clears_optional_field() {
    let mut book = ContactBook::new();
    let alice = add_named(&mut book, "Alice");
    contact_ops::edit_contact(&mut book, today(), alice.id, ContactField::PhoneNumber, "5551234").unwrap();
    let updated = contact_ops::edit_contact(&mut book, today(), alice.id, ContactField::PhoneNumber, "  ").unwrap();
    assert_eq!(updated.phone_number, None);
}

#[test]
fn edit_contact_blank_name_fails() {
    let mut book = ContactBook::new();
    let alice = add_named(&mut book, "Alice");
    assert!(contact_ops::edit_contact(&mut book, today(), alice.id, ContactField::Name, "").is_err());
    assert_eq!(book.get(alice.id).unwrap().name, "Alice");
}

#[test]
fn edit_contact_unknown_id_is_not_found() {
    let mut book = ContactBook::new();
    let result = contact_ops::edit_contact(&mut book, today(), ContactId(3), ContactField::Name, "X");
    assert!(matches!(result, Err(BookError::NotFound { .. })));
}

#[test]
fn delete_contact_works() {
    let mut book = ContactBook::new();
    let alice = add_named(&mut book, "Alice");
    let bob = add_named(&mut book, "Bob");
    let removed = contact_ops::delete_contact(&mut book, bob.id).unwrap();
    assert_eq!(removed, bob);
    assert_eq!(book.existing_names(), vec!["Alice"]);
    assert!(contact_ops::delete_contact(&mut book, bob.id).is_err());
    assert!(book.get(alice.id).is_ok());
}

// ==========================================================================
// NOTE OPS TESTS
// ==========================================================================

#[test]
fn set_note_ignores_blank() {
    let mut book = ContactBook::new();
    let alice = add_named(&mut book, "Alice");
    note_ops::set_note(&mut book, alice.id, "likes jazz").unwrap();
    let unchanged = note_ops::set_note(&mut book, alice.id, "   ").unwrap();
    assert_eq!(unchanged.notes.value(), Some("likes jazz"));
}

#[test]
fn delete_note_twice() {
    let mut book = ContactBook::new();
    let alice = add_named(&mut book, "Alice");
    note_ops::set_note(&mut book, alice.id, "likes jazz").unwrap();
    assert_eq!(note_ops::delete_note(&mut book, alice.id).unwrap(), NoteDeletion::Deleted);
    assert_eq!(note_ops::delete_note(&mut book, alice.id).unwrap(), NoteDeletion::NothingToDelete);
}

#[test]
fn add_tags_parses_comma_list() {
    let mut book = ContactBook::new();
    let alice = add_named(&mut book, "Alice");
    let tagged = note_ops::add_tags(&mut book, alice.id, "Work, gym ,,work").unwrap();
    assert_eq!(tagged.notes.tags().collect::<Vec<_>>(), vec!["gym", "work"]);
}

#[test]
fn typed_tag_query_finds_normalized_tag() {
    let mut book = ContactBook::new();
    let alice = add_named(&mut book, "Alice");
    note_ops::add_tags(&mut book, alice.id, "Work").unwrap();

    assert!(book.find_by_tag("Work").is_empty());
    let found = book.find_by_tag(&abook::validation::normalize_tag(" Work "));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, alice.id);
}

#[test]
fn note_ops_unknown_contact() {
    let mut book = ContactBook::new();
    assert!(note_ops::delete_note(&mut book, ContactId(0)).is_err());
    assert!(note_ops::add_tags(&mut book, ContactId(0), "x").is_err());
}
