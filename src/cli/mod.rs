pub mod context;
pub mod display;
pub mod contact_commands;
pub mod note_commands;
pub mod book_commands;

use crate::config::Config;
use crate::model::ContactBook;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(config: Config) {
    println!("Address Book");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let book = match book_commands::load_stored(&config) {
        Ok(Some(book)) => {
            println!("Loaded {} contact(s) from {}", book.len(), config.data_file.display());
            book
        }
        Ok(None) => {
            println!("No saved book found. Starting with an empty one.");
            ContactBook::new()
        }
        Err(e) => {
            log::warn!("Could not load {}: {}", config.data_file.display(), e);
            println!("Error loading data: {}", e);
            println!("Starting with an empty book...");
            ContactBook::new()
        }
    };

    let mut ctx = CLIContext::new(book, config);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => println!("{}", display::render_commands()),
            "quit" | "exit" | "q" => {
                if confirm_exit(ctx) {
                    break;
                }
            }

            // Contacts
            "add" => contact_commands::add(ctx, args),
            "list" | "ls" => contact_commands::list(ctx),
            "show" | "view" => contact_commands::show(ctx, args),
            "edit" => contact_commands::edit(ctx, args),
            "find" => contact_commands::find(ctx, args),
            "find-id" => contact_commands::find_id(ctx, args),
            "delete" | "rm" => contact_commands::delete(ctx, args),
            "birthdays" | "bd" => contact_commands::birthdays(ctx, args),

            // Notes and tags
            "notes" => note_commands::find_notes(ctx, args),
            "delete-notes" => note_commands::delete_notes(ctx, args),
            "tag" => note_commands::tag(ctx, args),
            "tags" => note_commands::tags(ctx, args),

            // Book
            "save" => book_commands::save(ctx),
            "load" => book_commands::load(ctx),
            "stats" => book_commands::print_stats(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

fn confirm_exit(ctx: &mut CLIContext) -> bool {
    if !ctx.is_dirty() {
        return true;
    }
    match ctx.prompt("Save changes before exiting? (y/n, or Enter to stay): ").as_deref() {
        Some("y") | Some("Y") => {
            book_commands::save(ctx);
            !ctx.is_dirty()
        }
        Some("n") | Some("N") | None => true,
        _ => false,
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}
