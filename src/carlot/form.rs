//! Raw form input and its mapping to records.

use crate::model::NewListing;
use crate::validation::{parse_price, validate_listing_form, ValidationResult};

/// Values of the sell form exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingForm {
    pub name: String,
    pub price: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub year: String,
    pub mileage: String,
    pub fuel: String,
}

impl ListingForm {
    /// Validates the form and maps it to a [`NewListing`].
    ///
    /// Text fields are trimmed, an empty image falls back to
    /// `placeholder_image`, and empty optional fields become `None`.
    pub fn into_new_listing(
        self,
        placeholder_image: &str,
    ) -> std::result::Result<NewListing, ValidationResult> {
        let validation = validate_listing_form(&self);
        let price = match parse_price(&self.price) {
            Some(price) if validation.is_valid() => price,
            _ => return Err(validation),
        };

        let image = self.image.trim();
        Ok(NewListing {
            name: self.name.trim().to_string(),
            price,
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            image: if image.is_empty() {
                placeholder_image.to_string()
            } else {
                image.to_string()
            },
            year: non_empty(&self.year),
            mileage: non_empty(&self.mileage),
            fuel: non_empty(&self.fuel),
        })
    }
}

/// Values of the login form exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
