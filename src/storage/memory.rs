use super::*;

use std::cell::RefCell;

/// Ephemeral medium for unit tests and throwaway runs. Saves land in
/// process memory and vanish with it.
pub struct MemStorage {
    data: RefCell<Books>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(Books::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for MemStorage {
    fn load(&self) -> Result<Books, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, books: &Books) -> Result<(), AppError> {
        *self.data.borrow_mut() = books.clone();
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
