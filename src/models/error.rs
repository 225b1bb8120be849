//! Validation error types for receipt models
//!
//! This module defines error types specifically for receipt validation,
//! separate from the general application errors.

use std::fmt;
use thiserror::Error;

/// A single failed check on one receipt field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The kind of validation error
    pub kind: ValidationErrorKind,
    /// Path of the field that failed validation, e.g. `items[0].price`
    pub field: String,
    /// Optional additional context
    pub context: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            context: None,
        }
    }

    /// Create a validation error with additional context
    pub fn with_context(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            context: Some(context.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(f, "{}: {} ({})", self.field, self.kind, ctx),
            None => write!(f, "{}: {}", self.field, self.kind),
        }
    }
}

/// Specific validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Field is required but empty
    #[error("Required field is missing")]
    RequiredField,

    /// Field contains characters outside its allowed set
    #[error("Contains characters that are not allowed")]
    InvalidCharacters,

    /// Purchase date is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    /// Purchase time is not a 24-hour `HH:MM` time
    #[error("Invalid time format. Use HH:MM (24h)")]
    InvalidTime,

    /// Receipt has no items
    #[error("At least one item required")]
    NoItems,

    /// Amount is not a decimal with exactly two fractional digits
    #[error("Amount must be a decimal with exactly two fractional digits")]
    InvalidAmount,

    /// Amount is well formed but does not fit in 64-bit cents
    #[error("Amount is too large")]
    AmountTooLarge,

    /// Item price is zero
    #[error("Price must be positive")]
    NonPositivePrice,
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Collection of validation errors
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validation error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record the error of a failed check, returning the value of a passed one
    pub fn check<T>(&mut self, result: ValidationResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.add(e);
                None
            },
        }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether any error of the given kind was recorded
    pub fn contains(&self, kind: &ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| &e.kind == kind)
    }

    /// Convert to a Result
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "No validation errors"),
            [single] => write!(f, "{}", single),
            errors => {
                write!(f, "{} fields are invalid: ", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", error)?;
                }
                Ok(())
            },
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

/// Convert validation errors to application errors
impl From<ValidationError> for crate::error::Error {
    fn from(err: ValidationError) -> Self {
        crate::error::Error::validation(err.to_string())
    }
}

impl From<ValidationErrors> for crate::error::Error {
    fn from(err: ValidationErrors) -> Self {
        crate::error::Error::validation(err.to_string())
    }
}
