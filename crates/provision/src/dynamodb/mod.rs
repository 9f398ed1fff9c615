//! DynamoDB storage backend (Imperative Shell).
//!
//! Creates tally tables with `aws-sdk-dynamodb` and maps the SDK's error
//! taxonomy onto [`tally_core::storage`] outcomes.

mod backend;
mod client;
mod error;

pub use backend::DynamoDbTableBackend;
pub use client::{create_client, ProvisionTarget};
