use std::path::PathBuf;

use clap::Parser;

use abook::config::Config;

/// Personal address book.
#[derive(Parser)]
#[command(name = "abook")]
#[command(about = "Keep contacts, notes, tags and birthdays in one place")]
#[command(version)]
struct Cli {
    /// Database file path (default: .data/address_book.db, or $ABOOK_FILE)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Import a JSON snapshot into a new database file and exit
    #[arg(long, value_name = "JSON_PATH", conflicts_with = "export")]
    import: Option<PathBuf>,

    /// Export the database as a JSON snapshot and exit
    #[arg(long, value_name = "JSON_PATH")]
    export: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::resolve(cli.file);
    if let Err(e) = config.ensure_data_dir() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Some(json_path) = cli.import {
        println!("Importing from {}...", json_path.display());
        match abook::snapshot::import_into_db(&json_path, &config.data_file) {
            Ok(count) => println!("Import complete! Contacts: {}", count),
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(json_path) = cli.export {
        match abook::snapshot::export_from_db(&config.data_file, &json_path) {
            Ok(count) => println!("Exported {} contact(s) to {}", count, json_path.display()),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    abook::cli::run(config);
}
