use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::error::{BookError, BookResult};
use crate::model::{Contact, ContactId, Note};

/// Rows are keyed by position; ids are stored as data and may repeat.
pub fn insert(conn: &Connection, position: usize, contact: &Contact) -> BookResult<()> {
    let id = i64::try_from(contact.id.value()).map_err(|_| BookError::InvalidField {
        field: "id".into(),
        reason: format!("{} is too large to store", contact.id),
    })?;

    conn.execute(
        "INSERT INTO contacts (position, id, name, phone_number, email, address, birthday, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            position as i64,
            id,
            contact.name,
            contact.phone_number,
            contact.email,
            contact.address,
            contact.birthday,
            contact.notes.value(),
        ],
    )?;

    for tag in contact.notes.tags() {
        conn.execute(
            "INSERT INTO contact_tags (position, tag) VALUES (?1, ?2)",
            params![position as i64, tag],
        )?;
    }
    Ok(())
}

pub fn delete_all(conn: &Connection) -> BookResult<()> {
    conn.execute("DELETE FROM contact_tags", [])?;
    conn.execute("DELETE FROM contacts", [])?;
    Ok(())
}

pub fn find_tags(conn: &Connection, position: usize) -> BookResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT tag FROM contact_tags WHERE position = ?1 ORDER BY tag")?;
    let tags = stmt
        .query_map(params![position as i64], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(tags)
}

/// All stored contacts in their saved order, tags included.
pub fn find_all(conn: &Connection) -> BookResult<Vec<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT position, id, name, phone_number, email, address, birthday, note
         FROM contacts ORDER BY position",
    )?;

    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row_to_contact(row)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut contacts = Vec::with_capacity(rows.len());
    for (position, mut contact) in rows {
        let tags = find_tags(conn, position as usize)?;
        contact.notes.add_tags(&tags);
        contacts.push(contact);
    }

    Ok(contacts)
}

pub fn count(conn: &Connection) -> BookResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn row_to_contact(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
    let raw_id: i64 = row.get(1)?;
    let id = u64::try_from(raw_id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Integer, Box::new(e)))?;
    let note: Option<String> = row.get(7)?;
    Ok(Contact {
        id: ContactId(id),
        name: row.get(2)?,
        phone_number: row.get(3)?,
        email: row.get(4)?,
        address: row.get(5)?,
        birthday: row.get(6)?,
        notes: Note::new(note.as_deref()),
    })
}
