//! Submission validation
//!
//! Turns a raw [`ReceiptSubmission`] into a [`ReceiptDraft`], or reports
//! every field that is missing or malformed in one [`ValidationError`].

pub mod extractor;
pub mod validators;

pub use extractor::ValidatedReceipt;
pub use validators::FieldPattern;

use crate::config::ValidationConfig;
use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::receipt::{Item, ItemSubmission, ReceiptDraft, ReceiptSubmission};
use validators::{matches, min_items, required_message};

/// Collects field errors while a submission is checked
#[derive(Default)]
struct FieldChecks {
    errors: Vec<FieldValidationError>,
}

impl FieldChecks {
    /// Require a text field and check it against `pattern`
    fn text(&mut self, field: &str, value: Option<String>, pattern: FieldPattern) -> String {
        let Some(value) = value else {
            self.errors
                .push(FieldValidationError::new(field, required_message(field)));
            return String::new();
        };

        if let Err(message) = matches(pattern)(field, &value) {
            self.errors.push(FieldValidationError::new(field, message));
        }
        value
    }

    fn item(&mut self, index: usize, item: ItemSubmission, config: &ValidationConfig) -> Item {
        let description_field = format!("items[{}].shortDescription", index);
        let price_field = format!("items[{}].price", index);

        Item {
            short_description: self.text(
                &description_field,
                item.short_description,
                config.item_description.into(),
            ),
            price: self.text(&price_field, item.price, FieldPattern::Amount),
        }
    }

    fn finish(self, draft: ReceiptDraft) -> Result<ReceiptDraft, ValidationError> {
        if self.errors.is_empty() {
            Ok(draft)
        } else {
            Err(ValidationError::FieldErrors(self.errors))
        }
    }
}

/// Validate a submission against the receipt field rules
pub fn validate_submission(
    submission: ReceiptSubmission,
    config: &ValidationConfig,
) -> Result<ReceiptDraft, ValidationError> {
    let mut checks = FieldChecks::default();

    let retailer = checks.text("retailer", submission.retailer, FieldPattern::NonEmpty);
    let purchase_date = checks.text("purchaseDate", submission.purchase_date, FieldPattern::Date);
    let purchase_time = checks.text("purchaseTime", submission.purchase_time, FieldPattern::Time);
    let total = checks.text("total", submission.total, FieldPattern::Amount);

    let items = match submission.items {
        Some(items) => {
            if let Err(message) = min_items(1)("items", items.len()) {
                checks.errors.push(FieldValidationError::new("items", message));
            }
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| checks.item(index, item, config))
                .collect()
        }
        None => {
            checks
                .errors
                .push(FieldValidationError::new("items", required_message("items")));
            Vec::new()
        }
    };

    checks.finish(ReceiptDraft {
        retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    })
}
