use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::contact::{Contact, ContactUpdate};
use crate::errors::AppError;
use crate::storage::BookStore;

/// Book name -> contacts, in insertion order. A BTreeMap keeps book
/// iteration and serialization deterministic, so re-saving an untouched
/// store never changes the file.
pub type Books = BTreeMap<String, Vec<Contact>>;

pub struct ContactStore {
    books: Books,
    storage: Box<dyn BookStore>,
}

impl ContactStore {
    /// Loads the persisted books once. An absent or unreadable file means
    /// starting from an empty store, never a startup failure.
    pub fn new(storage: Box<dyn BookStore>) -> Self {
        let books = match storage.load() {
            Ok(books) => books,
            Err(e) => {
                warn!("could not load persisted books, starting empty: {e}");
                Books::new()
            }
        };

        Self { books, storage }
    }

    /// Creates an empty book. Returns false (not an error) when the name
    /// is already taken; nothing is persisted in that case.
    pub fn create_book(&mut self, name: &str) -> Result<bool, AppError> {
        if self.books.contains_key(name) {
            return Ok(false);
        }

        self.books.insert(name.to_string(), Vec::new());
        self.persist()?;
        Ok(true)
    }

    /// Validation and the duplicate check both run before the append, so
    /// a rejected contact is never stored or persisted.
    pub fn add_contact(&mut self, book_name: &str, contact: Contact) -> Result<(), AppError> {
        let book = self
            .books
            .get_mut(book_name)
            .ok_or_else(|| AppError::BookNotFound(book_name.to_string()))?;

        contact.validate()?;

        // Two contacts are duplicates only when every field matches.
        // Name-only collisions are allowed; delete removes them together.
        if book.iter().any(|existing| existing == &contact) {
            return Err(AppError::DuplicateContact(format!(
                "{} {}",
                contact.first_name, contact.last_name
            )));
        }

        book.push(contact);
        self.persist()
    }

    pub fn view_contacts(&self, book_name: &str) -> Result<&[Contact], AppError> {
        self.books
            .get(book_name)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::BookNotFound(book_name.to_string()))
    }

    /// Removes every contact matching both names and reports how many
    /// went. Nothing is persisted when no contact matched.
    pub fn delete_contact(
        &mut self,
        book_name: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<usize, AppError> {
        let book = self
            .books
            .get_mut(book_name)
            .ok_or_else(|| AppError::BookNotFound(book_name.to_string()))?;

        let before = book.len();
        book.retain(|contact| !contact.matches_name(first_name, last_name));
        let removed = before - book.len();

        if removed == 0 {
            return Err(AppError::ContactNotFound(format!(
                "{} {}",
                first_name, last_name
            )));
        }

        self.persist()?;
        Ok(removed)
    }

    /// Partial update of the first contact matching both names. Provided
    /// fields are re-validated before any of them is applied.
    pub fn edit_contact(
        &mut self,
        book_name: &str,
        first_name: &str,
        last_name: &str,
        update: &ContactUpdate,
    ) -> Result<(), AppError> {
        let book = self
            .books
            .get_mut(book_name)
            .ok_or_else(|| AppError::BookNotFound(book_name.to_string()))?;

        let contact = book
            .iter_mut()
            .find(|contact| contact.matches_name(first_name, last_name))
            .ok_or_else(|| AppError::ContactNotFound(format!("{} {}", first_name, last_name)))?;

        update.validate()?;
        update.apply(contact);

        self.persist()
    }

    pub fn count_contacts(&self, book_name: &str) -> Result<usize, AppError> {
        self.books
            .get(book_name)
            .map(Vec::len)
            .ok_or_else(|| AppError::BookNotFound(book_name.to_string()))
    }

    /// Case-insensitive whole-field match on city or state across every
    /// book, flattened in book order then insertion order.
    pub fn search_by_city_or_state(&self, term: &str) -> Vec<&Contact> {
        self.books
            .values()
            .flatten()
            .filter(|contact| {
                contact.city.eq_ignore_ascii_case(term) || contact.state.eq_ignore_ascii_case(term)
            })
            .collect()
    }

    /// Mirrors the whole store to persistent storage. A failed save is
    /// surfaced to the caller; the in-memory state stays authoritative
    /// for the rest of the process lifetime.
    fn persist(&self) -> Result<(), AppError> {
        self.storage.save(&self.books)
    }
}
