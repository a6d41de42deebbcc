//! Common utilities for DynamoDB expressions.
//!
//! This module provides the shared pieces used by read and write operations:
//! primary keys, equality conditions for filter expressions, and attribute
//! selections for projection expressions.

/// Equality conditions for filter expressions.
pub mod condition;

/// Primary key of an item.
pub mod key;

/// Attribute selection for projection expressions.
pub mod selection;

use aws_sdk_dynamodb::types;
use std::collections;

pub(crate) fn placeholder(name: &str) -> String {
    format!("#{name}")
}

fn get_expression(left: String, separator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{separator}{right}")
    }
}

/// expression with its placeholder bindings
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(separator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, separator, item.expression);
        }
        operation
    }
}
