use crate::common;

use std::collections;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) projection_expression: Option<String>,
    pub(crate) table_name: String,
}

/// Arguments shared by read operations (GetItem, Scan).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReadArgs {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// Which attributes to retrieve (projection expression).
    ///
    /// If `None`, all attributes are retrieved.
    pub selection: Option<common::selection::Selection>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl From<ReadArgs> for ReadInput {
    fn from(read_args: ReadArgs) -> Self {
        let (expression_attribute_names, projection_expression) = match read_args.selection {
            Some(selection) => {
                let selection_operation: common::ExpressionInput = selection.into();
                (
                    Some(selection_operation.expression_attribute_names),
                    Some(selection_operation.expression),
                )
            }
            None => (None, None),
        };
        Self {
            consistent_read: read_args.consistent_read,
            expression_attribute_names,
            projection_expression,
            table_name: read_args.table_name,
        }
    }
}

/// apply common read operation settings to a builder
#[macro_export]
macro_rules! apply_read_operation {
    ($builder:expr, $read_operation:expr) => {
        $builder
            .set_consistent_read($read_operation.consistent_read)
            .set_expression_attribute_names($read_operation.expression_attribute_names)
            .set_projection_expression($read_operation.projection_expression)
            .table_name($read_operation.table_name)
    };
}
