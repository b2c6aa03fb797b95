use std::path::Path;

use rusqlite::Connection;

use crate::db::book_repo;
use crate::error::{BookError, BookResult};
use crate::model::ContactBook;

/// Serialize the whole book, id sequence included, as pretty JSON.
pub fn to_json(book: &ContactBook) -> BookResult<String> {
    Ok(serde_json::to_string_pretty(book)?)
}

pub fn from_json(json: &str) -> BookResult<ContactBook> {
    let mut book: ContactBook = serde_json::from_str(json)?;
    book.reconcile_ids()?;
    Ok(book)
}

pub fn export_json(book: &ContactBook, path: &Path) -> BookResult<()> {
    std::fs::write(path, to_json(book)?)?;
    log::info!("Exported {} contacts to {}", book.len(), path.display());
    Ok(())
}

pub fn import_json(path: &Path) -> BookResult<ContactBook> {
    let json = std::fs::read_to_string(path)?;
    let book = from_json(&json)?;
    log::info!("Read {} contacts from {}", book.len(), path.display());
    Ok(book)
}

/// Load a JSON snapshot into a new database file. Refuses to touch an
/// existing database, and removes the new file again if writing fails.
/// Returns the number of contacts written.
pub fn import_into_db(json_path: &Path, db_path: &Path) -> BookResult<usize> {
    if db_path.exists() {
        return Err(BookError::Other(format!(
            "Database file {} already exists",
            db_path.display()
        )));
    }

    let book = import_json(json_path)?;
    let written = Connection::open(db_path)
        .map_err(BookError::from)
        .and_then(|mut conn| {
            crate::db::schema::initialize(&conn)?;
            book_repo::save(&mut conn, &book)
        });

    if let Err(e) = written {
        if let Err(rm) = std::fs::remove_file(db_path) {
            log::warn!("Could not remove {}: {}", db_path.display(), rm);
        }
        return Err(e);
    }
    Ok(book.len())
}

/// Write the book stored in `db_path` out as a JSON snapshot.
pub fn export_from_db(db_path: &Path, json_path: &Path) -> BookResult<usize> {
    if !db_path.exists() {
        return Err(BookError::Other(format!(
            "Database file {} does not exist",
            db_path.display()
        )));
    }

    let conn = crate::db::schema::open(db_path)?;
    let book = book_repo::load(&conn)?;
    export_json(&book, json_path)?;
    Ok(book.len())
}
