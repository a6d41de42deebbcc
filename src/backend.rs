//! The seam between [`TodoStore`](crate::store::TodoStore) and DynamoDB.
//!
//! [`Backend`] is kept as close as possible to the SDK client so that the code
//! behind it stays thin: the real implementation simply sends the operation.

/// In-process backend for tests and local runs.
pub mod memory;

use crate::{read, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, error::SdkError, operation};
use serde_json::Value;

/// Executes the four table operations a todo store needs.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Look up a single item by primary key.
    async fn send_get_item(
        &self,
        get_item: read::get_item::GetItem<String>,
    ) -> Result<operation::get_item::GetItemOutput, SdkError<operation::get_item::GetItemError>>;

    /// Scan the table, returning every matching item.
    async fn send_scan(
        &self,
        scan: read::scan::Scan<Value>,
    ) -> Result<operation::scan::ScanOutput, SdkError<operation::scan::ScanError>>;

    /// Write an item, replacing any item with the same key.
    async fn send_put_item(
        &self,
        put_item: write::put_item::PutItem,
    ) -> Result<operation::put_item::PutItemOutput, SdkError<operation::put_item::PutItemError>>;

    /// Delete an item by primary key.
    async fn send_delete_item(
        &self,
        delete_item: write::delete_item::DeleteItem<String>,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        SdkError<operation::delete_item::DeleteItemError>,
    >;
}

#[async_trait]
impl Backend for Client {
    async fn send_get_item(
        &self,
        get_item: read::get_item::GetItem<String>,
    ) -> Result<operation::get_item::GetItemOutput, SdkError<operation::get_item::GetItemError>>
    {
        get_item.send(self).await
    }

    async fn send_scan(
        &self,
        scan: read::scan::Scan<Value>,
    ) -> Result<operation::scan::ScanOutput, SdkError<operation::scan::ScanError>> {
        scan.send(self).await
    }

    async fn send_put_item(
        &self,
        put_item: write::put_item::PutItem,
    ) -> Result<operation::put_item::PutItemOutput, SdkError<operation::put_item::PutItemError>>
    {
        put_item.send(self).await
    }

    async fn send_delete_item(
        &self,
        delete_item: write::delete_item::DeleteItem<String>,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        SdkError<operation::delete_item::DeleteItemError>,
    > {
        delete_item.send(self).await
    }
}
