use std::path::Path;

use rusqlite::Connection;

use crate::error::BookResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> BookResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            position INTEGER PRIMARY KEY NOT NULL,
            id INTEGER NOT NULL,
            name TEXT NOT NULL,
            phone_number TEXT,
            email TEXT,
            address TEXT,
            birthday TEXT,
            note TEXT
        );

        CREATE TABLE IF NOT EXISTS contact_tags (
            position INTEGER NOT NULL REFERENCES contacts(position) ON DELETE CASCADE,
            tag TEXT NOT NULL,
            PRIMARY KEY (position, tag)
        );

        CREATE TABLE IF NOT EXISTS book_metadata (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Open (or create) a database file and make sure the schema exists.
pub fn open(path: &Path) -> BookResult<Connection> {
    let conn = Connection::open(path)?;
    initialize(&conn)?;
    Ok(conn)
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
