//! Data models for the receipt processor
//!
//! This module contains the receipt structures accepted over the wire, their
//! validated typed counterparts, and the validation logic between them.

pub mod error;
pub mod receipt;
pub mod validation;

// Re-export commonly used types
pub use error::{ValidationError, ValidationErrorKind, ValidationErrors};
pub use receipt::{Item, RawItem, RawReceipt, Receipt};
pub use validation::parse_cents;
