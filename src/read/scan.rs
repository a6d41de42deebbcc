use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// scan operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanInput {
    expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    filter_expression: Option<String>,
    read_operation: read::common::ReadInput,
}

/// Scan operation.
///
/// Every page is read, so the output holds all matching items.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use todo_crud::{common, read};
/// use serde_json::Value;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     conditions: vec![common::condition::Condition {
///         name: "createdBy".to_string(),
///         equals: Value::String("alice".to_string()),
///     }],
///     read_args: read::common::ReadArgs {
///         table_name: "todos".to_string(),
///         ..Default::default()
///     },
/// };
/// scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan<T> {
    /// Equality conditions combined with `AND` into the filter expression.
    ///
    /// An empty list scans without a filter.
    pub conditions: Vec<common::condition::Condition<T>>,
    /// Additional read arguments (table name, consistent read, selection).
    pub read_args: read::common::ReadArgs,
}

impl<T: Serialize> TryFrom<Scan<T>> for ScanInput {
    type Error = Error;

    fn try_from(scan: Scan<T>) -> Result<Self> {
        let mut read_operation: read::common::ReadInput = scan.read_args.into();
        if scan.conditions.is_empty() {
            let operation = Self {
                read_operation,
                ..Default::default()
            };
            return Ok(operation);
        }
        let condition_operation = common::condition::Condition::get_expression_operation(scan.conditions)?;
        read_operation
            .expression_attribute_names
            .get_or_insert_with(collections::HashMap::new)
            .extend(condition_operation.expression_attribute_names);
        let operation = Self {
            expression_attribute_values: Some(condition_operation.expression_attribute_values),
            filter_expression: Some(condition_operation.expression),
            read_operation,
        };
        Ok(operation)
    }
}

impl<T: Serialize> Scan<T> {
    /// Execute the scan operation, following pagination to the last page.
    #[tracing::instrument(
        name = "todo_crud.scan",
        skip_all,
        fields(table = %self.read_args.table_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<operation::scan::ScanOutput, error::SdkError<operation::scan::ScanError>> {
        let scan: ScanInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .scan()
            .set_expression_attribute_values(scan.expression_attribute_values)
            .set_filter_expression(scan.filter_expression);
        let mut paginator = crate::apply_read_operation!(builder, scan.read_operation)
            .into_paginator()
            .send();
        let mut items = Vec::new();
        let mut count = 0;
        let mut scanned_count = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            count += page.count;
            scanned_count += page.scanned_count;
            items.extend(page.items.unwrap_or_default());
        }
        tracing::debug!(count, scanned_count, "scan complete");
        let output = operation::scan::ScanOutput::builder()
            .set_items(Some(items))
            .count(count)
            .scanned_count(scanned_count)
            .build();
        Ok(output)
    }
}
