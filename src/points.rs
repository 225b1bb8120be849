//! Points calculation for validated receipts
//!
//! Points are the sum of seven fixed rules. Scoring is pure: it reads only the
//! receipt, so the same receipt always earns the same points.

use chrono::{Datelike, NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

use crate::models::{Item, Receipt};

/// Point count; wide enough that no valid receipt can overflow it
pub type Points = u128;

/// Bonus for a total with no cents
pub const ROUND_TOTAL_POINTS: Points = 50;

/// Bonus for a total that is a multiple of 0.25
pub const QUARTER_TOTAL_POINTS: Points = 25;

/// Points for every two items
pub const ITEM_PAIR_POINTS: Points = 5;

/// Bonus for an odd purchase day
pub const ODD_DAY_POINTS: Points = 6;

/// Bonus for a purchase between 14:00 and 16:00 inclusive
pub const AFTERNOON_POINTS: Points = 10;

static WORD_CHAR_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_char_regex() -> &'static Regex {
    WORD_CHAR_REGEX.get_or_init(|| Regex::new(r"\w").expect("Invalid word character regex pattern"))
}

/// 14:00 through 16:00, in seconds since midnight
const AFTERNOON_WINDOW: std::ops::RangeInclusive<u32> = 14 * 3600..=16 * 3600;

/// Per-rule contributions to a receipt's points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    /// One point per letter, digit or underscore in the retailer name
    pub retailer_name: Points,
    /// Total has no cents
    pub round_total: Points,
    /// Total is a multiple of 0.25
    pub quarter_total: Points,
    /// Five points for every two items
    pub item_pairs: Points,
    /// Sum of `ceil(price * 0.2)` over items whose trimmed description
    /// length is a multiple of three
    pub item_descriptions: Points,
    /// Day of month is odd
    pub odd_day: Points,
    /// Purchased between 14:00 and 16:00
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Evaluate every rule against a receipt
    pub fn for_receipt(receipt: &Receipt) -> Self {
        Self {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_total: round_total_points(receipt.total_cents),
            quarter_total: quarter_total_points(receipt.total_cents),
            item_pairs: item_pair_points(receipt.items.len()),
            item_descriptions: receipt.items.iter().map(item_description_points).sum(),
            odd_day: odd_day_points(receipt.purchase_date.day()),
            afternoon: afternoon_points(receipt.purchase_time),
        }
    }

    /// Sum of all rule contributions
    pub fn total(&self) -> Points {
        self.retailer_name
            + self.round_total
            + self.quarter_total
            + self.item_pairs
            + self.item_descriptions
            + self.odd_day
            + self.afternoon
    }
}

/// Compute the points earned by a receipt
pub fn score(receipt: &Receipt) -> Points {
    PointsBreakdown::for_receipt(receipt).total()
}

fn retailer_name_points(retailer: &str) -> Points {
    word_char_regex().find_iter(retailer).count() as Points
}

fn round_total_points(total_cents: i64) -> Points {
    if total_cents.rem_euclid(100) == 0 {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

fn quarter_total_points(total_cents: i64) -> Points {
    if total_cents.rem_euclid(25) == 0 {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> Points {
    (item_count / 2) as Points * ITEM_PAIR_POINTS
}

fn item_description_points(item: &Item) -> Points {
    let length = item.short_description.trim().chars().count();
    if length % 3 == 0 {
        fifth_rounded_up(item.price_cents)
    } else {
        0
    }
}

/// `ceil(price * 0.2)` in whole points, computed exactly on cents
fn fifth_rounded_up(price_cents: i64) -> Points {
    // price * 0.2 == cents / 500; no intermediate sum, so i64::MAX cannot overflow
    let points = price_cents.div_euclid(500) + i64::from(price_cents.rem_euclid(500) != 0);
    points.max(0) as Points
}

fn odd_day_points(day: u32) -> Points {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(time: NaiveTime) -> Points {
    if AFTERNOON_WINDOW.contains(&time.num_seconds_from_midnight()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}
