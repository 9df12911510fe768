pub mod book;
pub mod contact;

pub use book::{Books, ContactStore};
pub use contact::{Contact, ContactUpdate};
