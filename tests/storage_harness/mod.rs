//! Shared test harness for receipt store testing
//!
//! Provides receipt fixtures and the `receipt_store_tests!` contract suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod receipt_store_tests;

use receipts::prelude::*;

/// A scored receipt with a fresh id
pub fn make_receipt(retailer: &str, total: &str, item_count: usize) -> Receipt {
    let draft = ReceiptDraft {
        retailer: retailer.to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: total.to_string(),
        items: vec![Item::new("Gatorade", "2.25"); item_count],
    };
    let points = calculate(&draft);
    draft.into_receipt(Uuid::new_v4(), points)
}
