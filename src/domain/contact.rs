use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Must start with a capital letter, have at least 3 characters and contain only alphabets"
            .to_string()
    }

    pub fn place_req() -> String {
        "Must have at least 4 characters".to_string()
    }

    pub fn zip_req() -> String {
        "Zip must be 5 or 6 digits".to_string()
    }

    pub fn phone_req() -> String {
        "Phone must be 10 digits and start with 6, 7, 8 or 9".to_string()
    }

    pub fn email_req() -> String {
        "Email must have the shape local@domain.tld".to_string()
    }
}

impl Contact {
    /// Checks every field against its format rule, in a fixed order.
    /// The first violated rule wins and aborts the rest.
    pub fn validate(&self) -> Result<(), AppError> {
        if !validate_name(&self.first_name)? {
            return Err(AppError::validation("first_name", ValidationReq::name_req()));
        }
        if !validate_name(&self.last_name)? {
            return Err(AppError::validation("last_name", ValidationReq::name_req()));
        }
        if !validate_place(&self.address) {
            return Err(AppError::validation("address", ValidationReq::place_req()));
        }
        if !validate_place(&self.city) {
            return Err(AppError::validation("city", ValidationReq::place_req()));
        }
        if !validate_place(&self.state) {
            return Err(AppError::validation("state", ValidationReq::place_req()));
        }
        if !validate_zip(&self.zip)? {
            return Err(AppError::validation("zip", ValidationReq::zip_req()));
        }
        if !validate_phone(&self.phone)? {
            return Err(AppError::validation("phone", ValidationReq::phone_req()));
        }
        if !validate_email(&self.email)? {
            return Err(AppError::validation("email", ValidationReq::email_req()));
        }
        Ok(())
    }

    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

/// Partial update of a contact. Omitted fields keep their prior value.
#[derive(Debug, Default, Clone)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    /// Re-validates every provided field with the same rules used at
    /// creation time. One bad field rejects the whole update.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(first_name) = &self.first_name
            && !validate_name(first_name)?
        {
            return Err(AppError::validation("first_name", ValidationReq::name_req()));
        }
        if let Some(last_name) = &self.last_name
            && !validate_name(last_name)?
        {
            return Err(AppError::validation("last_name", ValidationReq::name_req()));
        }
        if let Some(address) = &self.address
            && !validate_place(address)
        {
            return Err(AppError::validation("address", ValidationReq::place_req()));
        }
        if let Some(city) = &self.city
            && !validate_place(city)
        {
            return Err(AppError::validation("city", ValidationReq::place_req()));
        }
        if let Some(state) = &self.state
            && !validate_place(state)
        {
            return Err(AppError::validation("state", ValidationReq::place_req()));
        }
        if let Some(zip) = &self.zip
            && !validate_zip(zip)?
        {
            return Err(AppError::validation("zip", ValidationReq::zip_req()));
        }
        if let Some(phone) = &self.phone
            && !validate_phone(phone)?
        {
            return Err(AppError::validation("phone", ValidationReq::phone_req()));
        }
        if let Some(email) = &self.email
            && !validate_email(email)?
        {
            return Err(AppError::validation("email", ValidationReq::email_req()));
        }
        Ok(())
    }

    pub fn apply(&self, contact: &mut Contact) {
        if let Some(first_name) = &self.first_name {
            contact.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            contact.last_name = last_name.clone();
        }
        if let Some(address) = &self.address {
            contact.address = address.clone();
        }
        if let Some(city) = &self.city {
            contact.city = city.clone();
        }
        if let Some(state) = &self.state {
            contact.state = state.clone();
        }
        if let Some(zip) = &self.zip {
            contact.zip = zip.clone();
        }
        if let Some(phone) = &self.phone {
            contact.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            contact.email = email.clone();
        }
    }
}

pub fn validate_name(name: &str) -> Result<bool, AppError> {
    // Must start with a capital, at least 3 characters, alphabets only
    let re = Regex::new(r"^[A-Z][A-Za-z]{2,}$")?;
    Ok(re.is_match(name))
}

pub fn validate_place(place: &str) -> bool {
    // Address, city and state only need some substance: 4+ characters
    place.chars().count() >= 4
}

pub fn validate_zip(zip: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^[0-9]{5,6}$")?;
    Ok(re.is_match(zip))
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // 10 digits, mobile range prefix
    let re = Regex::new(r"^[6-9][0-9]{9}$")?;
    Ok(re.is_match(phone))
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")?;
    Ok(re.is_match(email))
}
