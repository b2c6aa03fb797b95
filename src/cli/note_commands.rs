use crate::cli::context::CLIContext;
use crate::cli::display;
use crate::model::Contact;
use crate::ops::note_ops;
use crate::queries::tag_queries;
use crate::validation;

pub fn find_notes(ctx: &CLIContext, args: &str) {
    if ctx.book.is_empty() {
        println!("There are no contacts yet.");
        return;
    }

    // An empty query shows every contact.
    let found: Vec<&Contact> = if args.is_empty() {
        ctx.book.iter().collect()
    } else {
        ctx.book.find_by_note_substring(args)
    };

    if found.is_empty() {
        println!("No notes contain '{}'.", args);
        return;
    }
    println!("{}", display::render_contacts(&found));
}

pub fn delete_notes(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: delete-notes <name|id>");
        return;
    }
    let Some(id) = ctx.find_contact(args) else {
        return;
    };

    match note_ops::delete_note(&mut ctx.book, id) {
        Ok(outcome) => {
            if outcome == crate::model::NoteDeletion::Deleted {
                ctx.mark_dirty();
            }
            println!("{}", outcome.message());
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn tag(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: tag <name|id>");
        return;
    }
    let Some(id) = ctx.find_contact(args) else {
        return;
    };

    let raw = match ctx.prompt("Tags to add (separated by comma): ") {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            println!("No tags added.");
            return;
        }
    };

    match note_ops::add_tags(&mut ctx.book, id, &raw) {
        Ok(contact) => {
            ctx.mark_dirty();
            println!("Tags of {}: {}", contact.name, contact.notes.tags_display());
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn tags(ctx: &CLIContext, args: &str) {
    if !ctx.book.has_tags() {
        println!("There are no tags in the book.");
        return;
    }

    if !args.is_empty() {
        let tag = validation::normalize_tag(args);
        let found = ctx.book.find_by_tag(&tag);
        if found.is_empty() {
            println!("No contacts are tagged '{}'.", tag);
        } else {
            println!("{}", display::render_contacts(&found));
        }
        return;
    }

    for (tag, contacts) in tag_queries::contacts_by_tag(&ctx.book) {
        println!("#{} ({})", tag, contacts.len());
        println!("{}", display::render_contacts(&contacts));
        println!();
    }

    let untagged = tag_queries::untagged(&ctx.book);
    if !untagged.is_empty() {
        println!("Untagged ({})", untagged.len());
        println!("{}", display::render_contacts(&untagged));
    }
}
