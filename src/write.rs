//! Write operations for modifying todo records in a DynamoDB table.
//!
//! - Putting new items or replacing existing ones
//! - Deleting items by primary key

/// Delete item operation for removing items from tables.
pub mod delete_item;

/// Put item operation for creating or replacing items.
pub mod put_item;
