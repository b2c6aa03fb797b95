use rusqlite::{params, Connection};

use crate::db::contact_repo;
use crate::error::{BookError, BookResult};
use crate::model::{ContactBook, IdSequence};

const NEXT_ID_KEY: &str = "next_id";

/// Replace whatever is stored with `book`, in a single transaction.
pub fn save(conn: &mut Connection, book: &ContactBook) -> BookResult<()> {
    let tx = conn.transaction()?;

    contact_repo::delete_all(&tx)?;
    for (position, contact) in book.iter().enumerate() {
        contact_repo::insert(&tx, position, contact)?;
    }
    set_metadata(&tx, NEXT_ID_KEY, &book.ids().peek().to_string())?;

    tx.commit()?;
    log::info!("Saved {} contacts", book.len());
    Ok(())
}

/// Load the stored book. An empty database yields an empty book.
pub fn load(conn: &Connection) -> BookResult<ContactBook> {
    let contacts = contact_repo::find_all(conn)?;
    let next_id = match get_metadata(conn, NEXT_ID_KEY)? {
        Some(raw) => raw.parse::<u64>().map_err(|e| {
            BookError::Other(format!("Invalid stored {}: '{}' ({})", NEXT_ID_KEY, raw, e))
        })?,
        None => 0,
    };

    let book = ContactBook::from_parts(contacts, IdSequence::starting_at(next_id))?;
    log::info!("Loaded {} contacts", book.len());
    Ok(book)
}

pub fn set_metadata(conn: &Connection, key: &str, value: &str) -> BookResult<()> {
    conn.execute(
        "INSERT INTO book_metadata (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_metadata(conn: &Connection, key: &str) -> BookResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM book_metadata WHERE key = ?1")?;
    let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
