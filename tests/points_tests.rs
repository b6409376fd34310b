//! Scoring rules checked through the public calculator API

use receipts::prelude::*;

fn draft(retailer: &str, date: &str, time: &str, total: &str, items: &[(&str, &str)]) -> ReceiptDraft {
    ReceiptDraft {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        total: total.to_string(),
        items: items.iter().map(|(d, p)| Item::new(*d, *p)).collect(),
    }
}

/// Scores zero on every rule
fn baseline() -> ReceiptDraft {
    draft("-", "2022-01-02", "09:00", "1.01", &[("ab", "1.00")])
}

#[test]
fn test_calculate_is_deterministic() {
    let receipt = draft(
        "Walgreens",
        "2022-01-03",
        "14:45",
        "2.65",
        &[("Pepsi", "1.25"), ("Dasani", "1.40")],
    );
    let first = calculate(&receipt);
    for _ in 0..10 {
        assert_eq!(calculate(&receipt), first);
    }
}

#[test]
fn test_retailer_rule() {
    let target = ReceiptDraft {
        retailer: "Target".to_string(),
        ..baseline()
    };
    let market = ReceiptDraft {
        retailer: "M&M Corner Market".to_string(),
        ..baseline()
    };
    assert_eq!(calculate(&target), 6);
    assert_eq!(calculate(&market), 14);
}

#[test]
fn test_total_rules() {
    let score = |total: &str| {
        breakdown(&ReceiptDraft {
            total: total.to_string(),
            ..baseline()
        })
    };

    assert_eq!(score("10.00").round_total, 50);
    assert_eq!(score("10.05").round_total, 0);
    assert_eq!(score("10.00").total(), 75);
    assert_eq!(score("10.10").total(), 0);
    assert_eq!(score("10.75").total(), 25);
}

#[test]
fn test_item_pair_rule_ignores_descriptions() {
    let four = ReceiptDraft {
        items: vec![Item::new("ab", "1.00"); 4],
        ..baseline()
    };
    let three = ReceiptDraft {
        items: vec![Item::new("ab", "1.00"); 3],
        ..baseline()
    };
    assert_eq!(breakdown(&four).item_pairs, 10);
    assert_eq!(breakdown(&three).item_pairs, 5);
}

#[test]
fn test_afternoon_rule() {
    let score = |time: &str| {
        calculate(&ReceiptDraft {
            purchase_time: time.to_string(),
            ..baseline()
        })
    };

    assert_eq!(score("14:00"), 0);
    assert_eq!(score("14:01"), 10);
    assert_eq!(score("15:00"), 10);
    assert_eq!(score("15:59"), 10);
    assert_eq!(score("16:00"), 0);
}

#[test]
fn test_reference_target_receipt() {
    let receipt = draft(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        &[("Mountain Dew 12PK", "6.49"), ("Emils Cheese Pizza", "12.25")],
    );
    let points = breakdown(&receipt);

    assert_eq!(points.retailer, 6);
    assert_eq!(points.item_pairs, 5);
    assert_eq!(points.descriptions, 3);
    assert_eq!(points.odd_day, 6);
    assert_eq!(points.total(), 20);
    assert!(points.fallbacks.is_empty());
}

#[test]
fn test_fallbacks_never_fail_scoring() {
    let receipt = draft("Target", "2022-01-xx", "noon", "lots", &[("abc", "free")]);
    let points = breakdown(&receipt);

    assert_eq!(points.total(), 6);
    let fields: Vec<&str> = points.fallbacks.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, vec!["total", "items[0].price", "purchaseDate", "purchaseTime"]);
}

#[test]
fn test_validated_amounts_always_parse() {
    let submission: ReceiptSubmission = serde_json::from_value(serde_json::json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "total": "١٠.٠٠",
        "items": [{ "shortDescription": "abc", "price": "１０.００" }]
    }))
    .expect("submission should deserialize");

    let err = validate_submission(submission, &ValidationConfig::default()).unwrap_err();
    match err {
        ValidationError::FieldErrors(errors) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["total", "items[0].price"]);
        }
        other => panic!("expected field errors, got {:?}", other),
    }
}

#[test]
fn test_large_validated_prices_do_not_overflow() {
    let submission: ReceiptSubmission = serde_json::from_value(serde_json::json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "09:00",
        "total": "180000000000000000000.00",
        "items": [
            { "shortDescription": "abc", "price": "90000000000000000000.00" },
            { "shortDescription": "abc", "price": "90000000000000000000.00" }
        ]
    }))
    .expect("submission should deserialize");

    let draft = validate_submission(submission, &ValidationConfig::default())
        .expect("large amounts are well-formed");
    let points = breakdown(&draft);

    assert!(points.fallbacks.is_empty());
    assert_eq!(points.descriptions, u64::MAX);
    assert_eq!(points.total(), u64::MAX);
}
