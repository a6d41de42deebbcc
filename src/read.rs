//! Read operations for retrieving todo records from a DynamoDB table.
//!
//! - Getting an individual item by primary key
//! - Scanning the table with a filter, following every page

/// Common utilities and types for read operations.
pub mod common;

/// Get item operation for retrieving a single item by primary key.
pub mod get_item;

/// Scan operation for retrieving filtered items from a table.
pub mod scan;
