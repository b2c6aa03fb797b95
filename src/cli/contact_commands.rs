use crate::cli::context::CLIContext;
use crate::cli::display;
use crate::model::*;
use crate::ops::*;
use crate::queries::*;
use crate::validation;

const NO_CONTACTS: &str = "There are no contacts yet. Use 'add' to create one.";

pub fn list(ctx: &CLIContext) {
    if ctx.book.is_empty() {
        println!("{}", NO_CONTACTS);
        return;
    }

    let contacts: Vec<&Contact> = ctx.book.iter().collect();
    println!("Contacts in your book ({}):", contacts.len());
    println!();
    println!("{}", display::render_contacts(&contacts));
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    println!("Creating a new contact. A contact cannot be created without a name;");
    println!("press Enter to skip any other field.");
    println!();

    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name (required): ") {
            Some(s) if s.is_empty() => {
                println!("Name is required.");
                return;
            }
            Some(s) => s,
            None => return,
        }
    };

    let today = CLIContext::today();
    let phone = ctx.prompt_optional("Phone number: ", validation::phone_number);
    let birthday = ctx.prompt_optional("Birthday (DD.MM.YYYY): ", |b| validation::birthday(b, today));
    let email = ctx.prompt_optional("Email address: ", validation::email);
    let address = ctx.prompt("Address: ");
    let notes = ctx.prompt("Notes: ");
    let tags = ctx
        .prompt("Tags (separated by comma): ")
        .map(|raw| validation::parse_tags(&raw))
        .unwrap_or_default();

    match contact_ops::add_contact(
        &mut ctx.book,
        today,
        &name,
        phone.as_deref(),
        email.as_deref(),
        address.as_deref(),
        birthday.as_deref(),
        notes.as_deref(),
        &tags,
    ) {
        Ok(contact) => {
            ctx.mark_dirty();
            println!("Contact has been created.");
            println!("{}", display::render_contacts(&[&contact]));
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show <name|id>");
        return;
    }
    let Some(id) = ctx.find_contact(args) else {
        return;
    };
    match ctx.book.get(id) {
        Ok(contact) => println!("{}", display::render_contact(contact)),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit(ctx: &mut CLIContext, args: &str) {
    if ctx.book.is_empty() {
        println!("{}", NO_CONTACTS);
        return;
    }
    if args.is_empty() {
        println!("Usage: edit <name|id>");
        return;
    }
    let Some(id) = ctx.find_contact(args) else {
        return;
    };
    let Ok(contact) = ctx.book.get(id) else {
        return;
    };

    println!("Editing {}", contact.name);
    println!();
    println!("Choose the attribute to edit:");
    for (i, field) in ContactField::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, capitalize(field.label()));
    }
    let tags_choice = ContactField::ALL.len() + 1;
    println!("  {}. Tags", tags_choice);
    println!();

    let choice = match ctx.prompt(&format!("Choice (1-{}, or Enter to cancel): ", tags_choice)) {
        Some(c) => c,
        None => return,
    };
    if choice.is_empty() {
        println!("Cancelled.");
        return;
    }

    let index = match choice.parse::<usize>() {
        Ok(n) if (1..=tags_choice).contains(&n) => n - 1,
        _ => {
            println!("Invalid choice.");
            return;
        }
    };

    let result = if index == ContactField::ALL.len() {
        let raw = ctx.prompt("Tags to add (separated by comma): ").unwrap_or_default();
        note_ops::add_tags(&mut ctx.book, id, &raw)
    } else if ContactField::ALL[index] == ContactField::Notes {
        let value = ctx.prompt("New notes: ").unwrap_or_default();
        note_ops::set_note(&mut ctx.book, id, &value)
    } else {
        let field = ContactField::ALL[index];
        let hint = match field {
            ContactField::Birthday => " (DD.MM.YYYY)",
            ContactField::Name | ContactField::Notes => "",
            _ => " (Enter to clear)",
        };
        let value = ctx
            .prompt(&format!("New {}{}: ", field.label(), hint))
            .unwrap_or_default();
        contact_ops::edit_contact(&mut ctx.book, CLIContext::today(), id, field, &value)
    };

    match result {
        Ok(updated) => {
            ctx.mark_dirty();
            println!("{}", display::render_contacts(&[&updated]));
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn find(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: find <name>");
        return;
    }

    let exact = ctx.book.find_by_exact_name(args);
    if !exact.is_empty() {
        println!("{}", display::render_contacts(&exact));
        return;
    }

    let similar = ctx.book.find_by_name_substring(args);
    if similar.is_empty() {
        println!("There is no contact with the name {}.", args);
        return;
    }
    println!("No exact match for '{}'. Names containing it:", args);
    println!("{}", display::render_contacts(&similar));
}

pub fn find_id(ctx: &CLIContext, args: &str) {
    let id = match validation::contact_id(args) {
        Ok(id) => id,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    let found = ctx.book.find_by_id(id);
    if found.is_empty() {
        println!("There is no contact with ID {}.", id);
        return;
    }
    println!("{}", display::render_contacts(&found));
}

pub fn delete(ctx: &mut CLIContext, args: &str) {
    if ctx.book.is_empty() {
        println!("{}", NO_CONTACTS);
        return;
    }

    let id = if args.is_empty() {
        let all: Vec<&Contact> = ctx.book.iter().collect();
        println!("{}", display::render_contacts(&all));
        println!("Which contact would you like to delete?");
        match ctx.prompt("ID: ") {
            Some(input) => validation::contact_id(&input),
            None => return,
        }
    } else {
        validation::contact_id(args)
    };

    match id.and_then(|id| contact_ops::delete_contact(&mut ctx.book, id)) {
        Ok(removed) => {
            ctx.mark_dirty();
            println!("The following contact has been deleted from the book:");
            println!("{}", display::render_contacts(&[&removed]));
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn birthdays(ctx: &CLIContext, args: &str) {
    if ctx.book.is_empty() {
        println!("{}", NO_CONTACTS);
        return;
    }

    let raw = if args.is_empty() {
        ctx.prompt("Number of days: ").unwrap_or_default()
    } else {
        args.to_string()
    };
    let window = match validation::window_days(&raw) {
        Ok(w) => w,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    let upcoming = birthday_queries::upcoming(&ctx.book, CLIContext::today(), window);
    if upcoming.is_empty() {
        println!("There are no coming birthdays in the nearest {} days.", window);
        return;
    }

    for u in &upcoming {
        let when = match u.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        println!(
            "  {} (ID {}) turns {} on {} ({})",
            u.contact.name,
            u.contact.id,
            u.turning_age,
            u.date.format("%d.%m"),
            when
        );
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
