//! Points calculator
//!
//! Scoring is a pure function of a receipt's fields. Seven independent rules
//! each contribute a non-negative amount and the score is their sum:
//!
//! | rule | points |
//! |------|--------|
//! | retailer | 1 per ASCII letter or digit |
//! | round total | 50 if the total has no cents |
//! | quarter total | 25 if the total is a multiple of 0.25 |
//! | item pairs | 5 per two items |
//! | descriptions | `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3 |
//! | odd day | 6 if the purchase day is odd |
//! | afternoon | 10 if purchased after 14:00 and before 16:00 |
//!
//! Totals and prices are parsed into [`Decimal`] so that boundary values such
//! as `"10.25"` are classified exactly.
//!
//! A number that fails to parse never fails scoring: the affected rule scores
//! zero and the miss is recorded as a [`ParseFallback`] on the
//! [`PointsBreakdown`]. This keeps compatibility with receipts scored by the
//! legacy service, which silently treated such values as zero. Submissions
//! that pass validation only take this path for amounts with more
//! significant digits than [`Decimal`] holds.
//!
//! Contributions and their sum saturate at `u64::MAX`.

use crate::core::receipt::{Item, ReceiptDraft};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::str::FromStr;

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_TOTAL_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// A field whose numeric value could not be read, so its rule scored zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFallback {
    pub field: String,
    pub value: String,
}

/// Per-rule contributions behind a points value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
    pub fallbacks: Vec<ParseFallback>,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(self.retailer, u64::saturating_add)
    }

    fn fallback(&mut self, field: impl Into<String>, value: &str) {
        self.fallbacks.push(ParseFallback {
            field: field.into(),
            value: value.to_string(),
        });
    }
}

/// Score a receipt
pub fn calculate(receipt: &ReceiptDraft) -> u64 {
    breakdown(receipt).total()
}

/// Score a receipt, keeping every rule's contribution
pub fn breakdown(receipt: &ReceiptDraft) -> PointsBreakdown {
    let mut points = PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        item_pairs: item_pair_points(receipt.items.len()),
        ..PointsBreakdown::default()
    };

    match parse_amount(&receipt.total) {
        Some(total) => {
            if total.fract().is_zero() {
                points.round_total = ROUND_TOTAL_POINTS;
            }
            if (total % Decimal::new(25, 2)).is_zero() {
                points.quarter_total = QUARTER_TOTAL_POINTS;
            }
        }
        None => points.fallback("total", &receipt.total),
    }

    for (index, item) in receipt.items.iter().enumerate() {
        let bonus = description_points(item, index, &mut points.fallbacks);
        points.descriptions = points.descriptions.saturating_add(bonus);
    }

    match purchase_day(&receipt.purchase_date) {
        Some(day) if day % 2 == 1 => points.odd_day = ODD_DAY_POINTS,
        Some(_) => {}
        None => points.fallback("purchaseDate", &receipt.purchase_date),
    }

    match purchase_time(&receipt.purchase_time) {
        Some((hour, minute)) if in_afternoon_window(hour, minute) => {
            points.afternoon = AFTERNOON_POINTS
        }
        Some(_) => {}
        None => points.fallback("purchaseTime", &receipt.purchase_time),
    }

    for fallback in &points.fallbacks {
        tracing::warn!(
            field = %fallback.field,
            value = %fallback.value,
            "unparseable value scored as zero"
        );
    }

    points
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

fn description_points(item: &Item, index: usize, fallbacks: &mut Vec<ParseFallback>) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length == 0 || length % 3 != 0 {
        return 0;
    }

    let Some(price) = parse_amount(&item.price) else {
        fallbacks.push(ParseFallback {
            field: format!("items[{}].price", index),
            value: item.price.clone(),
        });
        return 0;
    };

    (price * Decimal::new(2, 1)).ceil().to_u64().unwrap_or(u64::MAX)
}

/// Non-negative decimal amount, or `None` when the text is not one
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|amount| !amount.is_sign_negative())
}

/// Day of month: the last `-`-separated segment of the date
fn purchase_day(date: &str) -> Option<u32> {
    date.rsplit('-').next()?.trim().parse().ok()
}

fn purchase_time(time: &str) -> Option<(u32, u32)> {
    let (hour, minute) = time.split_once(':')?;
    Some((hour.trim().parse().ok()?, minute.trim().parse().ok()?))
}

/// Strictly after 14:00 and strictly before 16:00
fn in_afternoon_window(hour: u32, minute: u32) -> bool {
    (hour == 14 && minute > 0) || hour == 15
}
