use core::fmt;

#[derive(Debug)]
pub enum AppError {
    BookNotFound(String),
    ContactNotFound(String),
    DuplicateContact(String),
    Validation { field: &'static str, reason: String },
    Io(std::io::Error),
    Serde(serde_json::Error),
    Regex(regex::Error),
}

impl AppError {
    pub fn validation(field: &'static str, reason: String) -> Self {
        AppError::Validation { field, reason }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serde(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BookNotFound(name) => {
                write!(f, "Address book '{}' not found", name)
            }
            AppError::ContactNotFound(name) => {
                write!(f, "Contact '{}' not found", name)
            }
            AppError::DuplicateContact(name) => {
                write!(f, "Contact '{}' already exists in this book", name)
            }
            AppError::Validation { field, reason } => {
                write!(f, "Validation failed on {}: {}", field, reason)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Serde(e) => {
                write!(f, "Could not read or write persisted books: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
        }
    }
}
