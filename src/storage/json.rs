use super::*;

use std::env;
use std::fs::OpenOptions;
use std::io::{Read, Write};

pub const STORAGE_PATH: &str = "./.instance/books.json";

pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: Option<&str>) -> Result<Self, AppError> {
        let path = match path {
            Some(path) => path.to_string(),
            None => env::var("JSON_STORAGE_PATH").unwrap_or(STORAGE_PATH.to_string()),
        };

        Ok(Self {
            medium: "json".to_string(),
            path,
        })
    }
}

impl BookStore for JsonStorage {
    fn load(&self) -> Result<Books, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(Books::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.is_empty() {
            return Ok(Books::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, books: &Books) -> Result<(), AppError> {
        // Pretty JSON keeps the blob human-readable; BTreeMap keys keep
        // the output byte-stable across save(load()) round trips.
        let data = serde_json::to_string_pretty(books)?;

        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(Path::new(&self.path))?;

        file.write_all(data.as_bytes())?;
        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::domain::contact::Contact;
    use tempfile::TempDir;

    fn john_doe() -> Contact {
        Contact {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "123 Main St".to_string(),
            city: "New York".to_string(),
            state: "New York".to_string(),
            zip: "10001".to_string(),
            phone: "9876543210".to_string(),
            email: "john.doe@example.com".to_string(),
        }
    }

    #[test]
    fn json_store_is_persistent() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let path = dir.path().join("books.json");
        let storage = JsonStorage::new(path.to_str())?;

        let mut books = Books::new();
        books.insert("Personal".to_string(), vec![john_doe()]);
        books.insert("Work".to_string(), Vec::new());

        storage.save(&books)?;

        let loaded = storage.load()?;
        assert_eq!(loaded, books);
        Ok(())
    }

    #[test]
    fn missing_file_loads_as_empty() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let path = dir.path().join("absent.json");
        let storage = JsonStorage::new(path.to_str())?;

        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn resaving_a_loaded_store_is_a_no_op_on_content() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let path = dir.path().join("books.json");
        let storage = JsonStorage::new(path.to_str())?;

        let mut books = Books::new();
        books.insert("Personal".to_string(), vec![john_doe()]);
        storage.save(&books)?;

        let first_pass = fs::read_to_string(&path)?;
        storage.save(&storage.load()?)?;
        let second_pass = fs::read_to_string(&path)?;

        assert_eq!(first_pass, second_pass);
        Ok(())
    }
}
