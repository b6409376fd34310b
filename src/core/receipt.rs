//! Receipt and item types, plus the raw submission payload they are built from

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line entry on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    /// Two-decimal price string, e.g. `"12.34"`
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A validated, scored receipt as held by a [`ReceiptStore`](crate::core::ReceiptStore)
///
/// Receipts are immutable once stored. `points` is computed exactly once,
/// when the receipt is accepted, and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: Uuid,
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
    #[serde(with = "points_as_string")]
    pub points: u64,
}

impl Receipt {
    /// The scoreable fields of this receipt
    pub fn to_draft(&self) -> ReceiptDraft {
        ReceiptDraft {
            retailer: self.retailer.clone(),
            purchase_date: self.purchase_date.clone(),
            purchase_time: self.purchase_time.clone(),
            total: self.total.clone(),
            items: self.items.clone(),
        }
    }
}

/// The scoreable fields of a receipt, before an id or points are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptDraft {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

impl ReceiptDraft {
    /// Assign an identifier and the given score, producing a storable receipt
    pub fn into_receipt(self, id: Uuid, points: u64) -> Receipt {
        Receipt {
            id,
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            total: self.total,
            items: self.items,
            points,
        }
    }
}

/// JSON body of `POST /receipt/process`
///
/// Every field is optional here so that a missing field surfaces as a
/// field-level validation error rather than a deserialization failure.
/// Client-supplied `id` and `points` are not part of this shape and are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub total: Option<String>,
    pub items: Option<Vec<ItemSubmission>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    pub short_description: Option<String>,
    pub price: Option<String>,
}

/// Response body of `POST /receipt/process`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: Uuid,
}

/// Response body of `GET /receipt/{id}/points`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    #[serde(with = "points_as_string")]
    pub points: u64,
}

/// Points travel as strings on the wire.
mod points_as_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(points: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&points.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_points_serialize_as_string() {
        let body = serde_json::to_value(PointsResponse { points: 28 }).unwrap();
        assert_eq!(body, json!({ "points": "28" }));
    }

    #[test]
    fn test_receipt_uses_camel_case_fields() {
        let receipt = ReceiptDraft {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "6.49".to_string(),
            items: vec![Item::new("Dew", "6.49")],
        }
        .into_receipt(Uuid::nil(), 12);

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["purchaseDate"], "2022-01-01");
        assert_eq!(value["items"][0]["shortDescription"], "Dew");
        assert_eq!(value["points"], "12");
    }

    #[test]
    fn test_submission_ignores_client_id_and_points() {
        let submission: ReceiptSubmission = serde_json::from_value(json!({
            "id": "client-chosen",
            "points": "9999",
            "retailer": "Target"
        }))
        .unwrap();
        assert_eq!(submission.retailer.as_deref(), Some("Target"));
        assert!(submission.items.is_none());
    }
}
