//! Text rendering for the interactive session.

use crate::model::Contact;

const EMPTY: &str = "-";

const HEADERS: [&str; 7] = ["ID", "Name", "Phone", "Birthday", "Email", "Address", "Notes"];

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(EMPTY)
}

/// A table of contacts, one row each, in the order given.
pub fn render_contacts(contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let rows: Vec<[String; 7]> = contacts
        .iter()
        .map(|c| {
            let (id, name, phone, birthday, email, address, note) = c.identity_summary();
            [
                id.to_string(),
                name.to_string(),
                or_dash(phone).to_string(),
                or_dash(birthday).to_string(),
                or_dash(email).to_string(),
                or_dash(address).to_string(),
                or_dash(Some(note)).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(format_row(&HEADERS));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(format_row(&cells));
    }
    out.join("\n")
}

/// Every field of one contact, including tags.
pub fn render_contact(contact: &Contact) -> String {
    let (name, phone, email, address, birthday, note) = contact.value_summary();
    [
        format!("ID: {}", contact.id),
        format!("Name: {}", name),
        format!("Phone: {}", or_dash(phone)),
        format!("Email: {}", or_dash(email)),
        format!("Address: {}", or_dash(address)),
        format!("Birthday: {}", or_dash(birthday)),
        format!("Notes: {}", or_dash(Some(note))),
        format!("Tags: {}", contact.notes.tags_display()),
    ]
    .join("\n")
}

pub fn render_commands() -> &'static str {
    r#"
COMMANDS:

  Contacts:
    add [name]              Create a new contact (interactive)
    list                    Display all contacts
    show <name|id>          Show one contact in full
    edit <name|id>          Edit a contact (menu)
    find <name>             Find contacts by name
    find-id <id>            Find a contact by ID
    delete <id>             Delete a contact
    birthdays <days>        Contacts with a birthday in the next <days> days

  Notes and tags:
    notes [query]           Find contacts whose notes contain <query>
    delete-notes <name|id>  Delete a contact's notes
    tag <name|id>           Add tags to a contact
    tags [tag]              Contacts grouped by tag, or those with <tag>

  Book:
    save                    Save the book to the data file
    load                    Replace the book with the saved one
    stats                   Show statistics
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Name lookups are case-sensitive and partial matches work
  - Birthdays are written DD.MM.YYYY"#
}
