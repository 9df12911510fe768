pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::{Books, ContactStore},
    contact::{Contact, ContactUpdate, ValidationReq},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, BookStore, StorageMediums, parse_storage_type};
