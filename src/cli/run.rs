use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

use crate::prelude::{
    AppError, Contact, ContactStore, ContactUpdate, StorageMediums,
    command::{Cli, Commands},
    parse_storage_type,
};

pub fn run_app() -> Result<(), AppError> {
    // Load .env before clap resolves its env-backed defaults
    dotenv().ok();

    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage_choice)?;
    let storage = parse_storage_type(Some(medium), cli.store_path.as_deref())?;

    debug!("using {} storage", storage.medium());

    let mut store = ContactStore::new(storage);

    match cli.command {
        Commands::CreateBook { name } => {
            if store.create_book(&name)? {
                println!("Book '{}' created successfully", name);
            } else {
                println!("Book '{}' already exists, nothing to do", name);
            }
            Ok(())
        }

        Commands::Add {
            book,
            first_name,
            last_name,
            address,
            city,
            state,
            zip,
            phone,
            email,
        } => {
            let new_contact = Contact {
                first_name,
                last_name,
                address,
                city,
                state,
                zip,
                phone,
                email,
            };

            store.add_contact(&book, new_contact)?;

            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts of one book
        Commands::List { book } => {
            let contacts = store.view_contacts(&book)?;

            if contacts.is_empty() {
                println!("No contact in '{}' yet", book);
                return Ok(());
            }

            for (mut i, c) in contacts.iter().enumerate() {
                i += 1;
                println!("{i:>3}. {}", display_contact(c));
            }
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            book,
            first_name,
            last_name,
            new_first_name,
            new_last_name,
            new_address,
            new_city,
            new_state,
            new_zip,
            new_phone,
            new_email,
        } => {
            let update = ContactUpdate {
                first_name: new_first_name,
                last_name: new_last_name,
                address: new_address,
                city: new_city,
                state: new_state,
                zip: new_zip,
                phone: new_phone,
                email: new_email,
            };

            store.edit_contact(&book, &first_name, &last_name, &update)?;

            println!("Contact updated successfully");
            Ok(())
        }

        // Delete Contact
        Commands::Delete {
            book,
            first_name,
            last_name,
        } => {
            let removed = store.delete_contact(&book, &first_name, &last_name)?;

            println!("Deleted {} contact(s)", removed);
            Ok(())
        }

        Commands::Count { book } => {
            let total = store.count_contacts(&book)?;

            println!("{} contact(s) in '{}'", total, book);
            Ok(())
        }

        // Search every book by city or state
        Commands::Search { term } => {
            let matches = store.search_by_city_or_state(&term);

            if matches.is_empty() {
                println!("Couldn't find a contact in city or state '{}'", term);
                return Ok(());
            }

            for (mut i, c) in matches.iter().enumerate() {
                i += 1;
                println!("{i:>3}. {}", display_contact(c));
            }
            Ok(())
        }
    }
}

fn display_contact(c: &Contact) -> String {
    format!(
        "{:<12} {:<12} {:<22} {:<14} {:<14} {:>6} {:>11} {:<28}",
        c.first_name, c.last_name, c.address, c.city, c.state, c.zip, c.phone, c.email
    )
}
