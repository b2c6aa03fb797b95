use abook::error::BookError;
use abook::model::*;

// ==========================================================================
// NOTE TESTS
// ==========================================================================

#[test]
fn note_new_treats_empty_as_absent() {
    assert_eq!(Note::new(Some("")).value(), None);
    assert_eq!(Note::new(None).value(), None);
    assert_eq!(Note::new(Some("likes tea")).value(), Some("likes tea"));
}

#[test]
fn note_set_value_ignores_empty_input() {
    let mut note = Note::new(Some("likes tea"));
    note.set_value(Some(""));
    assert_eq!(note.value(), Some("likes tea"));
    note.set_value(None);
    assert_eq!(note.value(), Some("likes tea"));
}

#[test]
fn note_set_value_replaces() {
    let mut note = Note::new(None);
    note.set_value(Some("met at work"));
    assert_eq!(note.value(), Some("met at work"));
    note.set_value(Some("moved to Lviv"));
    assert_eq!(note.value(), Some("moved to Lviv"));
}

#[test]
fn note_delete_reports_outcome() {
    let mut note = Note::new(Some("likes tea"));
    assert_eq!(note.delete(), NoteDeletion::Deleted);
    assert_eq!(note.value(), None);
    assert_eq!(note.delete(), NoteDeletion::NothingToDelete);
    assert_eq!(note.delete(), NoteDeletion::NothingToDelete);
}

#[test]
fn note_delete_messages() {
    assert_eq!(NoteDeletion::Deleted.message(), "Notes have been deleted.");
    assert_eq!(NoteDeletion::NothingToDelete.message(), "There are no notes.");
}

#[test]
fn add_tags_trims_and_dedups() {
    let mut note = Note::default();
    note.add_tags(["a", " b ", "a"]);
    assert_eq!(note.tags().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn add_tags_keeps_whole_words() {
    let mut note = Note::default();
    note.add_tags(["work"]);
    assert_eq!(note.tags().collect::<Vec<_>>(), vec!["work"]);
}

#[test]
fn add_tags_is_a_union() {
    let mut note = Note::default();
    note.add_tags(["family"]);
    note.add_tags(["work", "  "]);
    assert!(note.has_tag("family"));
    assert!(note.has_tag("work"));
    assert_eq!(note.tags().count(), 2);
}

#[test]
fn tags_are_case_sensitive() {
    let mut note = Note::default();
    note.add_tags(["Work", "work"]);
    assert_eq!(note.tags().count(), 2);
}

#[test]
fn tags_display_uses_sentinel_when_empty() {
    let mut note = Note::default();
    assert_eq!(note.tags_display(), NO_TAGS);
    note.add_tags(["school", "family"]);
    assert_eq!(note.tags_display(), "family, school");
}

#[test]
fn deleting_value_keeps_tags() {
    let mut note = Note::new(Some("x"));
    note.add_tags(["gym"]);
    note.delete();
    assert!(note.has_tags());
}

// ==========================================================================
// CONTACT TESTS
// ==========================================================================

#[test]
fn contact_create_requires_name() {
    let result = Contact::create(ContactId(0), "   ", Note::default());
    assert!(matches!(result, Err(BookError::BlankField { .. })));
}

#[test]
fn contact_create_trims_name() {
    let contact = Contact::create(ContactId(0), "  Alice  ", Note::default()).unwrap();
    assert_eq!(contact.name, "Alice");
    assert_eq!(contact.phone_number, None);
}

#[test]
fn ids_are_distinct_and_increasing() {
    let mut book = ContactBook::new();
    let ids: Vec<ContactId> = (0..5)
        .map(|i| {
            book.new_contact(&format!("P{}", i), None, None, None, None, Note::default())
                .unwrap()
                .id
        })
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids[0], ContactId(0));
}

#[test]
fn value_summary_uses_empty_string_for_absent_note() {
    let mut book = ContactBook::new();
    let contact = book
        .new_contact("Alice", Some("Kyiv"), Some("5551234"), None, Some("01.03.2000"), Note::default())
        .unwrap();
    assert_eq!(
        contact.value_summary(),
        ("Alice", Some("5551234"), None, Some("Kyiv"), Some("01.03.2000"), "")
    );
}

#[test]
fn identity_summary_order() {
    let mut book = ContactBook::new();
    let contact = book
        .new_contact(
            "Bob",
            Some("Main St"),
            Some("5551234"),
            Some("bob@example.com"),
            Some("15.06.1990"),
            Note::new(Some("neighbour")),
        )
        .unwrap();
    assert_eq!(
        contact.identity_summary(),
        (
            ContactId(0),
            "Bob",
            Some("5551234"),
            Some("15.06.1990"),
            Some("bob@example.com"),
            Some("Main St"),
            "neighbour"
        )
    );
}

// ==========================================================================
// EDIT TESTS
// ==========================================================================

fn bob() -> Contact {
    let mut c = Contact::create(ContactId(1), "Bob", Note::new(Some("neighbour"))).unwrap();
    c.phone_number = Some("5551234".into());
    c.email = Some("bob@example.com".into());
    c
}

#[test]
fn field_from_attribute_exact_names() {
    assert_eq!(ContactField::from_attribute("name"), Some(ContactField::Name));
    assert_eq!(ContactField::from_attribute("phone number"), Some(ContactField::PhoneNumber));
    assert_eq!(ContactField::from_attribute("email"), Some(ContactField::Email));
    assert_eq!(ContactField::from_attribute("birthday date"), Some(ContactField::Birthday));
    assert_eq!(ContactField::from_attribute("Name"), None);
    assert_eq!(ContactField::from_attribute("phone"), None);
}

#[test]
fn field_from_attribute_loose_names() {
    assert_eq!(ContactField::from_attribute("home address"), Some(ContactField::Address));
    assert_eq!(ContactField::from_attribute("email address"), Some(ContactField::Address));
    assert_eq!(ContactField::from_attribute("my notes"), Some(ContactField::Notes));
}

#[test]
fn field_labels_resolve_to_themselves() {
    for field in ContactField::ALL {
        assert_eq!(ContactField::from_attribute(field.label()), Some(*field));
    }
}

#[test]
fn edit_attribute_unknown_is_noop() {
    let mut c = bob();
    let before = c.clone();
    assert!(!c.edit_attribute("nickname", "Bobby").unwrap());
    assert_eq!(c, before);
}

#[test]
fn edit_attribute_sets_fields() {
    let mut c = bob();
    assert!(c.edit_attribute("work address", "1 Infinite Loop").unwrap());
    assert!(c.edit_attribute("birthday date", "15.06.1990").unwrap());
    assert_eq!(c.address.as_deref(), Some("1 Infinite Loop"));
    assert_eq!(c.birthday.as_deref(), Some("15.06.1990"));
}

#[test]
fn edit_blank_name_is_rejected() {
    let mut c = bob();
    assert!(c.edit(ContactField::Name, "  ").is_err());
    assert_eq!(c.name, "Bob");
}

#[test]
fn edit_blank_optional_field_clears_it() {
    let mut c = bob();
    c.edit(ContactField::PhoneNumber, "").unwrap();
    assert_eq!(c.phone_number, None);
}

#[test]
fn edit_blank_notes_keeps_note() {
    let mut c = bob();
    c.edit(ContactField::Notes, "").unwrap();
    assert_eq!(c.notes.value(), Some("neighbour"));
    c.edit(ContactField::Notes, "moved away").unwrap();
    assert_eq!(c.notes.value(), Some("moved away"));
}
