use chrono::NaiveDate;

use crate::error::{BookError, BookResult};
use crate::model::{Birthday, ContactId};

fn invalid(field: &str, reason: &str) -> BookError {
    BookError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Accepts an optional leading `+` and 7 to 15 digits. Spaces, dashes and
/// parentheses are allowed as separators and kept as typed.
pub fn phone_number(value: &str) -> BookResult<String> {
    let trimmed = non_blank(value, "phone number")?;
    let body = trimmed.strip_prefix('+').unwrap_or(&trimmed);

    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(invalid("phone number", "only digits and + - ( ) are allowed")),
        }
    }

    if !(7..=15).contains(&digits) {
        return Err(invalid("phone number", "expected 7 to 15 digits"));
    }
    Ok(trimmed)
}

pub fn email(value: &str) -> BookResult<String> {
    let trimmed = non_blank(value, "email")?;
    if trimmed.chars().any(char::is_whitespace) {
        return Err(invalid("email", "must not contain spaces"));
    }

    let (local, domain) = match trimmed.split_once('@') {
        Some(parts) => parts,
        None => return Err(invalid("email", "missing '@'")),
    };
    if local.is_empty() || domain.contains('@') {
        return Err(invalid("email", "expected exactly one '@' after a name"));
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid("email", "domain must look like example.com"));
    }
    Ok(trimmed)
}

/// A readable `DD.MM.YYYY` date that is not after `today`.
pub fn birthday(value: &str, today: NaiveDate) -> BookResult<String> {
    let trimmed = non_blank(value, "birthday")?;
    let parsed = Birthday::parse(&trimmed)?;
    if parsed.is_after(today) {
        return Err(invalid("birthday", "cannot be in the future"));
    }
    Ok(trimmed)
}

pub fn window_days(value: &str) -> BookResult<u32> {
    non_blank(value, "number of days")?
        .parse::<u32>()
        .map_err(|_| invalid("number of days", "expected a whole number of days"))
}

pub fn contact_id(value: &str) -> BookResult<ContactId> {
    non_blank(value, "id")?
        .parse::<ContactId>()
        .map_err(|_| invalid("id", "expected a number"))
}

/// The stored form of a typed tag: trimmed and lowercased.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits comma-separated tags, normalized, dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_tag)
        .filter(|t| !t.is_empty())
        .collect()
}
