//! Storage implementations for receipts

pub mod in_memory;

pub use in_memory::InMemoryReceiptStore;
