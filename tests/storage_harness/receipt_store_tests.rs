//! Macro-generated test suite for `ReceiptStore` contract validation.
//!
//! # Generated Tests
//!
//! - `test_insert_and_find` — insert then retrieve, every field intact
//! - `test_find_nonexistent` — random UUID returns None
//! - `test_empty_store` — new store reports zero receipts
//! - `test_len_counts_inserts` — len follows inserts
//! - `test_points_survive_storage` — stored points match the calculator
//! - `test_concurrent_inserts` — parallel inserts from spawned tasks

/// Generate a `ReceiptStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh store implementing
/// `ReceiptStore + Clone + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! receipt_store_tests {
    ($factory:expr) => {
        mod receipt_store_contract_tests {
            use super::*;
            use receipts::prelude::*;

            #[tokio::test]
            async fn test_insert_and_find() {
                let store = $factory;
                let receipt = make_receipt("Target", "35.35", 2);

                store.insert(receipt.clone()).await.expect("insert should succeed");

                let found = store
                    .find_by_id(&receipt.id)
                    .await
                    .expect("find should succeed")
                    .expect("receipt should exist");
                assert_eq!(found, receipt);
            }

            #[tokio::test]
            async fn test_find_nonexistent() {
                let store = $factory;
                store
                    .insert(make_receipt("Target", "35.35", 2))
                    .await
                    .expect("insert should succeed");

                let found = store
                    .find_by_id(&Uuid::new_v4())
                    .await
                    .expect("find should succeed");
                assert!(found.is_none());
            }

            #[tokio::test]
            async fn test_empty_store() {
                let store = $factory;
                assert_eq!(store.len().await.expect("len should succeed"), 0);
                assert!(store.is_empty().await.expect("is_empty should succeed"));
            }

            #[tokio::test]
            async fn test_len_counts_inserts() {
                let store = $factory;
                for n in 1..=5 {
                    store
                        .insert(make_receipt("Walgreens", "2.65", n))
                        .await
                        .expect("insert should succeed");
                }
                assert_eq!(store.len().await.expect("len should succeed"), 5);
            }

            #[tokio::test]
            async fn test_points_survive_storage() {
                let store = $factory;
                let receipt = make_receipt("M&M Corner Market", "9.00", 4);
                store.insert(receipt.clone()).await.expect("insert should succeed");

                let found = store
                    .find_by_id(&receipt.id)
                    .await
                    .expect("find should succeed")
                    .expect("receipt should exist");
                assert_eq!(found.points, calculate(&found.to_draft()));
                assert_eq!(found.points, 109);
            }

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let store = $factory;
                let mut handles = Vec::new();
                for _ in 0..20 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        let receipt = make_receipt("Target", "1.00", 1);
                        let id = receipt.id;
                        store.insert(receipt).await.expect("insert should succeed");
                        id
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.expect("task should not panic"));
                }

                assert_eq!(store.len().await.expect("len should succeed"), 20);
                for id in ids {
                    assert!(store.find_by_id(&id).await.expect("find should succeed").is_some());
                }
            }
        }
    };
}
