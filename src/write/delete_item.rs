use crate::common;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// delete item operation
#[derive(Debug, PartialEq)]
struct DeleteItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    table_name: String,
}

/// Delete item operation.
///
/// Deleting a key that is not in the table succeeds like any other delete.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use todo_crud::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let delete_item = write::delete_item::DeleteItem {
///     key: common::key::Key {
///         name: "id".to_string(),
///         value: "1".to_string(),
///     },
///     table_name: "todos".to_string(),
/// };
/// delete_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteItem<T> {
    /// The primary key of the item to delete.
    pub key: common::key::Key<T>,
    /// The name of the table to delete from.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<DeleteItem<T>> for DeleteItemInput {
    type Error = Error;

    fn try_from(delete_item: DeleteItem<T>) -> Result<Self> {
        let key = delete_item.key.try_into()?;
        let operation = Self {
            key,
            table_name: delete_item.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> DeleteItem<T> {
    /// Execute the delete item operation.
    #[tracing::instrument(
        name = "todo_crud.delete_item",
        skip_all,
        fields(table = %self.table_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        error::SdkError<operation::delete_item::DeleteItemError>,
    > {
        let delete_item: DeleteItemInput = self.try_into().map_err(error::BuildError::other)?;
        client
            .delete_item()
            .set_key(Some(delete_item.key))
            .table_name(delete_item.table_name)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::string_key(
        DeleteItem {
            key: common::key::Key {
                name: "id".to_string(),
                value: "a".to_string(),
            },
            table_name: "b".to_string(),
        },
        DeleteItemInput {
            key: collections::HashMap::from(
                [(
                    "id".to_string(),
                    types::AttributeValue::S(
                        "a".to_string()
                    ),
                )]
            ),
            table_name: "b".to_string(),
        }
    )]
    #[case::empty_key_is_passed_through(
        DeleteItem {
            key: common::key::Key {
                name: "id".to_string(),
                value: String::new(),
            },
            table_name: "b".to_string(),
        },
        DeleteItemInput {
            key: collections::HashMap::from(
                [(
                    "id".to_string(),
                    types::AttributeValue::S(
                        String::new()
                    ),
                )]
            ),
            table_name: "b".to_string(),
        }
    )]
    fn test_delete_item(#[case] args: DeleteItem<String>, #[case] expected: DeleteItemInput) {
        let actual: DeleteItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
