use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shown by [`Note::tags_display`] when a note carries no tags.
pub const NO_TAGS: &str = "There are no tags.";

/// Outcome of [`Note::delete`]. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteDeletion {
    Deleted,
    NothingToDelete,
}

impl NoteDeletion {
    pub fn message(&self) -> &'static str {
        match self {
            NoteDeletion::Deleted => "Notes have been deleted.",
            NoteDeletion::NothingToDelete => "There are no notes.",
        }
    }
}

/// Free-text annotation with a set of tags, owned by a single contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    value: Option<String>,
    tags: BTreeSet<String>,
}

impl Note {
    /// An empty string is treated as "no notes".
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.filter(|v| !v.is_empty()).map(str::to_string),
            tags: BTreeSet::new(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replaces the value. Empty or absent input leaves the current value in
    /// place; clearing goes through [`Note::delete`].
    pub fn set_value(&mut self, new_value: Option<&str>) {
        if let Some(v) = new_value.filter(|v| !v.is_empty()) {
            self.value = Some(v.to_string());
        }
    }

    pub fn delete(&mut self) -> NoteDeletion {
        match self.value.take() {
            Some(_) => NoteDeletion::Deleted,
            None => NoteDeletion::NothingToDelete,
        }
    }

    /// Union the trimmed tags into the tag set. Tags that trim to nothing are skipped.
    pub fn add_tags<I, S>(&mut self, new_tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in new_tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() {
                self.tags.insert(tag.to_string());
            }
        }
    }

    /// Tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag.trim())
    }

    pub fn tags_display(&self) -> String {
        if self.tags.is_empty() {
            return NO_TAGS.to_string();
        }
        self.tags().collect::<Vec<_>>().join(", ")
    }

    /// Case-insensitive substring match on the value. An absent value never matches.
    pub fn value_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.value
            .as_ref()
            .map(|v| v.to_lowercase().contains(&needle))
            .unwrap_or(false)
    }
}
