use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

/// Put item operation.
///
/// The item is already marshalled, so a failure to encode a record is reported
/// before any request is built. The put is unconditional: an existing item with
/// the same key is replaced.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types::AttributeValue};
/// use todo_crud::write;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: [("id".to_string(), AttributeValue::S("1".to_string()))].into(),
///     table_name: "todos".to_string(),
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItem {
    /// The item to put into the table.
    pub item: collections::HashMap<String, types::AttributeValue>,
    /// The name of the table to write to.
    pub table_name: String,
}

impl PutItem {
    /// Execute the put item operation.
    #[tracing::instrument(
        name = "todo_crud.put_item",
        skip_all,
        fields(table = %self.table_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        client
            .put_item()
            .set_item(Some(self.item))
            .table_name(self.table_name)
            .send()
            .await
    }
}
