//! Receipt data models
//!
//! This module defines the receipt structures as they arrive over the wire and
//! the typed receipts produced once every field has been validated.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use validator::Validate;

use super::error::{ValidationError, ValidationErrorKind, ValidationErrors};
use super::validation::{
    validate_amount, validate_amount_field, validate_date_field, validate_description,
    validate_description_field, validate_price, validate_price_field, validate_purchase_date,
    validate_purchase_time, validate_retailer, validate_retailer_field, validate_time_field,
};

/// Raw receipt line item as submitted by a client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Free-text product description
    #[validate(custom(function = "validate_description"))]
    pub short_description: String,

    /// Price as a two-decimal string, e.g. `"6.49"`
    #[validate(custom(function = "validate_price"))]
    pub price: String,
}

impl RawItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    fn parse(&self, index: usize, errors: &mut ValidationErrors) -> Option<Item> {
        let short_description = errors.check(validate_description_field(
            &self.short_description,
            &format!("items[{}].shortDescription", index),
        ));
        let price_cents =
            errors.check(validate_price_field(&self.price, &format!("items[{}].price", index)));

        Some(Item {
            short_description: short_description?,
            price_cents: price_cents?,
        })
    }
}

/// Raw receipt as submitted by a client
///
/// All fields are kept as strings until [`Receipt::try_from`] has checked
/// them. The derived [`Validate`] impl runs the same per-field checks through
/// the `validator` crate; it does not descend into `items`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    /// Store name
    #[validate(custom(function = "validate_retailer"))]
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`
    #[validate(custom(function = "validate_purchase_date"))]
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`
    #[validate(custom(function = "validate_purchase_time"))]
    pub purchase_time: String,

    /// Purchased items, at least one
    #[validate(length(min = 1))]
    pub items: Vec<RawItem>,

    /// Total amount paid as a two-decimal string
    #[validate(custom(function = "validate_amount"))]
    pub total: String,
}

impl RawReceipt {
    /// Validate all fields, collecting every failure
    pub fn validate_fields(&self) -> Result<(), ValidationErrors> {
        self.parse().map(|_| ())
    }

    fn parse(&self) -> Result<Receipt, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let retailer = errors.check(validate_retailer_field(&self.retailer, "retailer"));
        let purchase_date = errors.check(validate_date_field(&self.purchase_date, "purchaseDate"));
        let purchase_time = errors.check(validate_time_field(&self.purchase_time, "purchaseTime"));

        if self.items.is_empty() {
            errors.add(ValidationError::new(ValidationErrorKind::NoItems, "items"));
        }
        let items: Vec<Option<Item>> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| item.parse(index, &mut errors))
            .collect();

        let total_cents = errors.check(validate_amount_field(&self.total, "total"));

        // Every failed check left a None behind and an entry in `errors`
        match (retailer, purchase_date, purchase_time, total_cents) {
            (Some(retailer), Some(purchase_date), Some(purchase_time), Some(total_cents)) => {
                errors.into_result(Receipt {
                    retailer,
                    purchase_date,
                    purchase_time,
                    items: items.into_iter().flatten().collect(),
                    total_cents,
                })
            },
            _ => Err(errors),
        }
    }
}

/// Validated receipt line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Description exactly as submitted, surrounding whitespace included
    pub short_description: String,

    /// Price in cents, always above zero
    pub price_cents: i64,
}

/// Validated receipt ready for storage and scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    /// Never empty
    pub items: Vec<Item>,
    /// Total in cents
    pub total_cents: i64,
}

impl Receipt {
    /// Number of line items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Validate a raw receipt into a typed one
impl TryFrom<RawReceipt> for Receipt {
    type Error = ValidationErrors;

    fn try_from(raw: RawReceipt) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl TryFrom<&RawReceipt> for Receipt {
    type Error = ValidationErrors;

    fn try_from(raw: &RawReceipt) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Builder for creating test receipts
#[cfg(test)]
pub struct ReceiptBuilder {
    retailer: String,
    purchase_date: String,
    purchase_time: String,
    items: Vec<RawItem>,
    total: String,
}

#[cfg(test)]
impl ReceiptBuilder {
    pub fn new() -> Self {
        Self {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![RawItem::new("Pepsi - 12-oz", "1.25")],
            total: "1.25".to_string(),
        }
    }

    pub fn retailer(mut self, retailer: &str) -> Self {
        self.retailer = retailer.to_string();
        self
    }

    pub fn purchase_date(mut self, date: &str) -> Self {
        self.purchase_date = date.to_string();
        self
    }

    pub fn purchase_time(mut self, time: &str) -> Self {
        self.purchase_time = time.to_string();
        self
    }

    pub fn items(mut self, items: &[(&str, &str)]) -> Self {
        self.items = items.iter().map(|(d, p)| RawItem::new(*d, *p)).collect();
        self
    }

    pub fn total(mut self, total: &str) -> Self {
        self.total = total.to_string();
        self
    }

    pub fn build(self) -> RawReceipt {
        RawReceipt {
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            items: self.items,
            total: self.total,
        }
    }

    pub fn build_valid(self) -> Receipt {
        Receipt::try_from(self.build()).expect("builder produced an invalid receipt")
    }
}
