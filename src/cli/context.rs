use chrono::Local;
use std::io::{self, Write};

use crate::cli::display;
use crate::config::Config;
use crate::error::{BookError, BookResult};
use crate::model::{Contact, ContactBook, ContactId};
use crate::validation;

pub struct CLIContext {
    pub book: ContactBook,
    pub config: Config,
    dirty: bool,
}

impl CLIContext {
    pub fn new(book: ContactBook, config: Config) -> Self {
        Self {
            book,
            config,
            dirty: false,
        }
    }

    /// True when the in-memory book differs from what was last saved or loaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    pub fn confirm(&self, prompt: &str) -> bool {
        matches!(self.prompt(prompt).as_deref(), Some("y") | Some("Y") | Some("yes"))
    }

    /// Ask for an optional value until it is blank or passes `validate`.
    /// EOF counts as blank.
    pub fn prompt_optional<F>(&self, prompt: &str, validate: F) -> Option<String>
    where
        F: Fn(&str) -> BookResult<String>,
    {
        loop {
            let input = self.prompt(prompt)?;
            if input.is_empty() {
                return None;
            }
            match validate(&input) {
                Ok(valid) => return Some(valid),
                Err(e) => self.print_error(&e),
            }
        }
    }

    /// Resolve `args` to one contact: a numeric id, or a name substring.
    /// Several name matches are listed and the user picks an id.
    pub fn find_contact(&self, args: &str) -> Option<ContactId> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        if let Ok(id) = validation::contact_id(query) {
            if let Ok(contact) = self.book.get(id) {
                return Some(contact.id);
            }
        }

        let matches = self.book.find_by_name_substring(query);
        match matches.len() {
            0 => {
                println!("There is no contact named '{}'.", query);
                None
            }
            1 => Some(matches[0].id),
            _ => {
                let exact = self.book.find_by_exact_name(query);
                if exact.len() == 1 {
                    return Some(exact[0].id);
                }
                println!("There are several contacts in the book:");
                println!("{}", display::render_contacts(&matches));
                self.choose_among(&matches)
            }
        }
    }

    fn choose_among(&self, candidates: &[&Contact]) -> Option<ContactId> {
        let input = self.prompt("Choose ID: ")?;
        match validation::contact_id(&input) {
            Ok(id) if candidates.iter().any(|c| c.id == id) => Some(id),
            Ok(id) => {
                self.print_error(&BookError::contact_not_found(id));
                None
            }
            Err(e) => {
                self.print_error(&e);
                None
            }
        }
    }

    pub fn today() -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    /// Input mistakes are printed plainly; anything else is also logged.
    pub fn print_error(&self, e: &BookError) {
        if e.is_validation() {
            println!("Invalid input: {}", e);
        } else {
            log::warn!("{:?}", e);
            println!("Error: {}", e);
        }
    }
}
