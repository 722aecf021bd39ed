//! Form validation for the sell and login forms.
//!
//! Validation never fails with an error: it returns a [`ValidationResult`]
//! mapping each offending field to one message. Inputs are trimmed before any
//! check, so whitespace-only values count as empty.
//!
//! # Examples
//! ```
//! use carlot::form::LoginForm;
//! use carlot::validation::{validate_login_form, Field};
//!
//! let result = validate_login_form(&LoginForm::new("a@b.co", "123"));
//! assert!(!result.is_valid());
//! assert!(result.error_for(Field::Email).is_none());
//! assert_eq!(
//!     result.error_for(Field::Password),
//!     Some("Password must be at least 6 characters")
//! );
//! ```

use crate::form::{ListingForm, LoginForm};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MIN_PASSWORD_CHARS: usize = 6;

const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_REGEX).expect("valid regex"));

/// A validated form field. Ordered as the fields appear on their form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Price,
    Location,
    Description,
    Image,
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Location => "location",
            Field::Description => "description",
            Field::Image => "image",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// The message for a single field, for checking one input in isolation.
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    fn reject(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

pub fn validate_listing_form(form: &ListingForm) -> ValidationResult {
    let mut result = ValidationResult::default();

    let name = form.name.trim();
    if name.is_empty() {
        result.reject(Field::Name, "Car name is required");
    } else if name.chars().count() < MIN_NAME_CHARS {
        result.reject(Field::Name, "Car name must be at least 3 characters");
    }

    let price = form.price.trim();
    if price.is_empty() {
        result.reject(Field::Price, "Price is required");
    } else if parse_price(price).is_none() {
        result.reject(Field::Price, "Please enter a valid price");
    }

    if form.location.trim().is_empty() {
        result.reject(Field::Location, "Location is required");
    }

    let description = form.description.trim();
    if description.is_empty() {
        result.reject(Field::Description, "Description is required");
    } else if description.chars().count() < MIN_DESCRIPTION_CHARS {
        result.reject(
            Field::Description,
            "Description must be at least 10 characters",
        );
    }

    let image = form.image.trim();
    if !image.is_empty() && !is_valid_url(image) {
        result.reject(Field::Image, "Please enter a valid image URL");
    }

    result
}

pub fn validate_login_form(form: &LoginForm) -> ValidationResult {
    let mut result = ValidationResult::default();

    let email = form.email.trim();
    if email.is_empty() {
        result.reject(Field::Email, "Email is required");
    } else if !is_valid_email(email) {
        result.reject(Field::Email, "Please enter a valid email");
    }

    let password = form.password.trim();
    if password.is_empty() {
        result.reject(Field::Password, "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        result.reject(Field::Password, "Password must be at least 6 characters");
    }

    result
}

/// A price is any finite number strictly above zero.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

/// Structural check only: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// True when `url` parses as an absolute URL.
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_listing() -> ListingForm {
        ListingForm {
            name: "Audi A4 2019".into(),
            price: "24999.99".into(),
            location: "Denver, CO".into(),
            description: "Quattro, heated seats, one careful owner".into(),
            image: "https://example.com/a4.jpg".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_listing_has_no_errors() {
        let result = validate_listing_form(&valid_listing());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn image_is_optional() {
        let form = ListingForm {
            image: "   ".into(),
            ..valid_listing()
        };
        assert!(validate_listing_form(&form).is_valid());
    }

    #[test]
    fn short_name_is_rejected() {
        let form = ListingForm {
            name: "AB".into(),
            ..valid_listing()
        };
        let result = validate_listing_form(&form);
        assert_eq!(
            result.error_for(Field::Name),
            Some("Car name must be at least 3 characters")
        );
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn negative_price_is_rejected() {
        let form = ListingForm {
            price: "-5".into(),
            ..valid_listing()
        };
        assert_eq!(
            validate_listing_form(&form).error_for(Field::Price),
            Some("Please enter a valid price")
        );
    }

    #[test]
    fn non_numeric_prices_are_rejected() {
        for price in ["abc", "12abc", "0", "1,000", "NaN", "inf"] {
            let form = ListingForm {
                price: price.into(),
                ..valid_listing()
            };
            assert_eq!(
                validate_listing_form(&form).error_for(Field::Price),
                Some("Please enter a valid price"),
                "price {:?} should be rejected",
                price
            );
        }
    }

    #[test]
    fn numeric_price_spellings_are_accepted() {
        for price in ["1", " 42 ", "1e3", "0.5", "+7"] {
            assert!(parse_price(price).is_some(), "price {:?}", price);
        }
    }

    #[test]
    fn nine_character_description_is_rejected() {
        let form = ListingForm {
            description: "123456789".into(),
            ..valid_listing()
        };
        assert_eq!(
            validate_listing_form(&form).error_for(Field::Description),
            Some("Description must be at least 10 characters")
        );

        let form = ListingForm {
            description: "1234567890".into(),
            ..valid_listing()
        };
        assert!(validate_listing_form(&form).is_valid());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let result = validate_listing_form(&ListingForm::default());
        assert_eq!(result.errors().len(), 4);
        assert_eq!(result.error_for(Field::Name), Some("Car name is required"));
        assert_eq!(result.error_for(Field::Price), Some("Price is required"));
        assert_eq!(
            result.error_for(Field::Location),
            Some("Location is required")
        );
        assert_eq!(
            result.error_for(Field::Description),
            Some("Description is required")
        );
    }

    #[test]
    fn malformed_image_url_is_rejected() {
        let form = ListingForm {
            image: "not a url".into(),
            ..valid_listing()
        };
        assert_eq!(
            validate_listing_form(&form).error_for(Field::Image),
            Some("Please enter a valid image URL")
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let form = ListingForm {
            name: "Öko".into(),
            ..valid_listing()
        };
        assert!(validate_listing_form(&form).is_valid());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = validate_login_form(&LoginForm::new("not-an-email", "123456"));
        assert_eq!(
            result.error_for(Field::Email),
            Some("Please enter a valid email")
        );
        assert!(result.error_for(Field::Password).is_none());
    }

    #[test]
    fn short_password_is_the_only_error() {
        let result = validate_login_form(&LoginForm::new("a@b.co", "123"));
        let fields: Vec<_> = result.errors().keys().copied().collect();
        assert_eq!(fields, vec![Field::Password]);
    }

    #[test]
    fn valid_login() {
        let result = validate_login_form(&LoginForm::new("a@b.co", "123456"));
        assert!(result.is_valid());
    }

    #[test]
    fn empty_login_fields_are_required() {
        let result = validate_login_form(&LoginForm::new(" ", ""));
        assert_eq!(result.error_for(Field::Email), Some("Email is required"));
        assert_eq!(
            result.error_for(Field::Password),
            Some("Password is required")
        );
    }

    #[test]
    fn email_pattern_is_structural() {
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@c.de"));
        assert!(!is_valid_email("@c.de"));
    }
}
