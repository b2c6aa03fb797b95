use std::collections::BTreeMap;

use crate::model::{Contact, ContactBook};

/// Each tag with the number of contacts carrying it, sorted by tag.
pub fn tag_counts(book: &ContactBook) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for contact in book.iter() {
        for tag in contact.notes.tags() {
            *counts.entry(tag.to_string()).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}

/// Contacts grouped under each of their tags. A contact with several tags
/// appears in several groups; untagged contacts appear in none.
pub fn contacts_by_tag(book: &ContactBook) -> BTreeMap<&str, Vec<&Contact>> {
    let mut groups: BTreeMap<&str, Vec<&Contact>> = BTreeMap::new();
    for contact in book.iter() {
        for tag in contact.notes.tags() {
            groups.entry(tag).or_default().push(contact);
        }
    }
    groups
}

pub fn untagged(book: &ContactBook) -> Vec<&Contact> {
    book.iter().filter(|c| !c.notes.has_tags()).collect()
}
