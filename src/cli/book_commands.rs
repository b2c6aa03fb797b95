use crate::cli::context::CLIContext;
use crate::db::{book_repo, contact_repo, schema};
use crate::error::BookResult;
use crate::model::ContactBook;
use crate::queries::{stats_queries, tag_queries};

/// Read the book stored in the configured data file, if there is one.
pub fn load_stored(config: &crate::config::Config) -> BookResult<Option<ContactBook>> {
    if !config.data_file.exists() {
        return Ok(None);
    }
    let conn = schema::open(&config.data_file)?;
    book_repo::load(&conn).map(Some)
}

/// Save the book and return how many contacts the file now holds.
pub fn write_stored(ctx: &CLIContext) -> BookResult<usize> {
    ctx.config.ensure_data_dir()?;
    let mut conn = schema::open(&ctx.config.data_file)?;
    book_repo::save(&mut conn, &ctx.book)?;
    contact_repo::count(&conn)
}

pub fn save(ctx: &mut CLIContext) {
    if ctx.book.is_empty() && !ctx.config.data_file.exists() {
        println!("There are no contacts yet. Nothing to save.");
        ctx.mark_clean();
        return;
    }

    match write_stored(ctx) {
        Ok(stored) => {
            ctx.mark_clean();
            println!("Saved {} contact(s) to {}.", stored, ctx.config.data_file.display());
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn load(ctx: &mut CLIContext) {
    if ctx.is_dirty() && !ctx.confirm("Unsaved changes will be lost. Load anyway? (y/n): ") {
        println!("Cancelled.");
        return;
    }

    match load_stored(&ctx.config) {
        Ok(Some(book)) => {
            ctx.book = book;
            ctx.mark_clean();
            println!("Data has been loaded! {} contact(s).", ctx.book.len());
        }
        Ok(None) => println!("No saved book at {}.", ctx.config.data_file.display()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn print_stats(ctx: &CLIContext) {
    let s = stats_queries::stats(&ctx.book, CLIContext::today());
    println!("Contacts: {}", s.total_contacts);
    println!("With birthday: {}", s.with_birthday);
    if s.unreadable_birthdays > 0 {
        println!("  unreadable birthdays: {}", s.unreadable_birthdays);
    }
    println!(
        "Birthdays in the next {} days: {}",
        stats_queries::BIRTHDAY_HORIZON_DAYS,
        s.upcoming_birthdays
    );
    println!("With notes: {}", s.with_notes);
    println!("With tags: {} ({} distinct tags)", s.with_tags, s.distinct_tags);
    for (tag, count) in tag_queries::tag_counts(&ctx.book) {
        println!("  #{}: {}", tag, count);
    }
    println!("Next ID: {}", s.next_id);
    if ctx.is_dirty() {
        println!("(unsaved changes)");
    }
}
