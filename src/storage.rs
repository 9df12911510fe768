pub mod json;
pub mod memory;

use std::fs;
use std::path::Path;

use dotenv::dotenv;

use crate::domain::book::Books;
use crate::errors::AppError;

/// Persistence collaborator: the whole store is loaded once at startup
/// and written back in full after every successful mutation.
pub trait BookStore {
    fn load(&self) -> Result<Books, AppError>;

    fn save(&self, books: &Books) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::validation(
                "storage_choice",
                "Not a recognized storage medium, expected 'json' or 'mem'".to_string(),
            )),
        }
    }
}

pub fn parse_storage_type(
    storage_medium: Option<StorageMediums>,
    path: Option<&str>,
) -> Result<Box<dyn BookStore>, AppError> {
    let medium: StorageMediums;
    if let Some(storage_medium) = storage_medium {
        medium = storage_medium;
    } else {
        dotenv().ok();

        let choice = std::env::var("STORAGE_CHOICE").unwrap_or("json".to_string());
        medium = StorageMediums::from(&choice)?;
    }

    match medium {
        StorageMediums::Json => Ok(Box::new(json::JsonStorage::new(path)?)),
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
