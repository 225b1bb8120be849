//! Field validation functions for receipt models
//!
//! Each field has two entry points: a `validator`-crate flavored check used by
//! the `#[derive(Validate)]` wire structs, and a `*_field` variant returning
//! the parsed value or our own [`ValidationError`](super::error::ValidationError).

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

use super::error::{ValidationError as ModelValidationError, ValidationErrorKind, ValidationResult};

/// Wire format of `purchaseDate`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of `purchaseTime`
pub const TIME_FORMAT: &str = "%H:%M";

static RETAILER_REGEX: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION_REGEX: OnceLock<Regex> = OnceLock::new();
static AMOUNT_REGEX: OnceLock<Regex> = OnceLock::new();
static DATE_SHAPE_REGEX: OnceLock<Regex> = OnceLock::new();
static TIME_SHAPE_REGEX: OnceLock<Regex> = OnceLock::new();

fn retailer_regex() -> &'static Regex {
    RETAILER_REGEX.get_or_init(|| Regex::new(r"^[\w\s\-&]+$").expect("Invalid retailer regex pattern"))
}

fn description_regex() -> &'static Regex {
    DESCRIPTION_REGEX
        .get_or_init(|| Regex::new(r"^[\w\s\-]+$").expect("Invalid description regex pattern"))
}

fn amount_regex() -> &'static Regex {
    AMOUNT_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid amount regex pattern"))
}

// chrono skips leading whitespace and accepts a signed year, so the digit
// layout is checked before parsing
fn date_shape_regex() -> &'static Regex {
    DATE_SHAPE_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{1,4}-[0-9]{1,2}-[0-9]{1,2}$").expect("Invalid date shape regex pattern")
    })
}

fn time_shape_regex() -> &'static Regex {
    TIME_SHAPE_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]{1,2}:[0-9]{1,2}$").expect("Invalid time shape regex pattern"))
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if !date_shape_regex().is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Parse a 24-hour `HH:MM` time of day
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    if !time_shape_regex().is_match(time) {
        return None;
    }
    NaiveTime::parse_from_str(time, TIME_FORMAT).ok()
}

/// Whether a string is laid out as `digits.dd`
pub fn is_amount(amount: &str) -> bool {
    amount_regex().is_match(amount)
}

/// Parse a two-decimal amount string into integer cents
///
/// Returns `None` when the string does not match `digits.dd` or does not fit
/// in `i64` cents.
pub fn parse_cents(amount: &str) -> Option<i64> {
    if !is_amount(amount) {
        return None;
    }
    let (whole, fraction) = amount.split_once('.')?;
    let whole: i64 = whole.parse().ok()?;
    let fraction: i64 = fraction.parse().ok()?;
    whole.checked_mul(100)?.checked_add(fraction)
}

/// Validate retailer name for validator crate
pub fn validate_retailer(retailer: &str) -> Result<(), ValidationError> {
    if retailer_regex().is_match(retailer) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_retailer"))
    }
}

/// Validate item description for validator crate
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description_regex().is_match(description) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_description"))
    }
}

/// Validate purchase date for validator crate
pub fn validate_purchase_date(date: &str) -> Result<(), ValidationError> {
    parse_date(date)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("invalid_date"))
}

/// Validate purchase time for validator crate
pub fn validate_purchase_time(time: &str) -> Result<(), ValidationError> {
    parse_time(time)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("invalid_time"))
}

/// Validate a two-decimal amount for validator crate
pub fn validate_amount(amount: &str) -> Result<(), ValidationError> {
    match parse_cents(amount) {
        Some(_) => Ok(()),
        None if is_amount(amount) => Err(ValidationError::new("amount_too_large")),
        None => Err(ValidationError::new("invalid_amount")),
    }
}

/// Validate a strictly positive two-decimal price for validator crate
pub fn validate_price(price: &str) -> Result<(), ValidationError> {
    validate_amount(price)?;
    match parse_cents(price) {
        Some(cents) if cents > 0 => Ok(()),
        _ => Err(ValidationError::new("non_positive_price")),
    }
}

/// Validate retailer name returning our custom error type
pub fn validate_retailer_field(retailer: &str, field_name: &str) -> ValidationResult<String> {
    if retailer.is_empty() {
        return Err(ModelValidationError::new(ValidationErrorKind::RequiredField, field_name));
    }
    if !retailer_regex().is_match(retailer) {
        return Err(ModelValidationError::with_context(
            ValidationErrorKind::InvalidCharacters,
            field_name,
            "allowed: letters, digits, underscore, whitespace, '-' and '&'",
        ));
    }
    Ok(retailer.to_string())
}

/// Validate item description returning our custom error type
pub fn validate_description_field(description: &str, field_name: &str) -> ValidationResult<String> {
    if description.is_empty() {
        return Err(ModelValidationError::new(ValidationErrorKind::RequiredField, field_name));
    }
    if !description_regex().is_match(description) {
        return Err(ModelValidationError::with_context(
            ValidationErrorKind::InvalidCharacters,
            field_name,
            "allowed: letters, digits, underscore, whitespace and '-'",
        ));
    }
    Ok(description.to_string())
}

/// Validate purchase date returning the parsed calendar date
pub fn validate_date_field(date: &str, field_name: &str) -> ValidationResult<NaiveDate> {
    parse_date(date).ok_or_else(|| {
        ModelValidationError::with_context(
            ValidationErrorKind::InvalidDate,
            field_name,
            format!("got '{}'", date),
        )
    })
}

/// Validate purchase time returning the parsed time of day
pub fn validate_time_field(time: &str, field_name: &str) -> ValidationResult<NaiveTime> {
    parse_time(time).ok_or_else(|| {
        ModelValidationError::with_context(
            ValidationErrorKind::InvalidTime,
            field_name,
            format!("got '{}'", time),
        )
    })
}

/// Validate a two-decimal amount returning it in cents
pub fn validate_amount_field(amount: &str, field_name: &str) -> ValidationResult<i64> {
    let kind = if is_amount(amount) {
        ValidationErrorKind::AmountTooLarge
    } else {
        ValidationErrorKind::InvalidAmount
    };
    parse_cents(amount)
        .ok_or_else(|| ModelValidationError::with_context(kind, field_name, format!("got '{}'", amount)))
}

/// Validate an item price returning it in cents; the price must be above zero
pub fn validate_price_field(price: &str, field_name: &str) -> ValidationResult<i64> {
    let cents = validate_amount_field(price, field_name)?;
    if cents <= 0 {
        return Err(ModelValidationError::with_context(
            ValidationErrorKind::NonPositivePrice,
            field_name,
            format!("got '{}'", price),
        ));
    }
    Ok(cents)
}
