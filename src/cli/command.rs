use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bookdex", version, about = "Multi-book contact manager")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Where the books file lives
    #[arg(long, env = "JSON_STORAGE_PATH")]
    pub store_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new, empty address book
    CreateBook {
        /// Book name, unique among books
        #[arg(long)]
        name: String,
    },
    /// Add a contact to a book
    Add {
        /// Target book
        #[arg(long)]
        book: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        state: String,

        /// 5 or 6 digits
        #[arg(long)]
        zip: String,

        /// 10 digits, starting with 6-9
        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,
    },
    /// List the contacts of a book in insertion order
    List {
        #[arg(long)]
        book: String,
    },
    /// Edit fields of an existing contact
    /// Provide the contact's current first and last name
    /// followed by optional arguments for as many fields as you wish to update
    Edit {
        #[arg(long)]
        book: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        new_first_name: Option<String>,

        #[arg(long)]
        new_last_name: Option<String>,

        #[arg(long)]
        new_address: Option<String>,

        #[arg(long)]
        new_city: Option<String>,

        #[arg(long)]
        new_state: Option<String>,

        #[arg(long)]
        new_zip: Option<String>,

        #[arg(long)]
        new_phone: Option<String>,

        #[arg(long)]
        new_email: Option<String>,
    },
    /// Delete every contact matching a first and last name
    Delete {
        #[arg(long)]
        book: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,
    },
    /// Count the contacts in a book
    Count {
        #[arg(long)]
        book: String,
    },
    /// Search every book by city or state (case-insensitive)
    Search {
        #[arg(long)]
        term: String,
    },
}
