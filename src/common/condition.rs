use crate::common;

use serde::Serialize;
use serde_dynamo::{Result, to_attribute_value};

const AND: &str = " AND ";

/// Equality condition on a top-level attribute.
///
/// A list of conditions is combined with `AND` into a filter expression.
///
/// ```rust
/// use todo_crud::common::condition;
///
/// let condition = condition::Condition {
///     name: "createdBy".to_string(),
///     equals: "alice".to_string(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Condition<T> {
    /// The name of the attribute to compare.
    pub name: String,
    /// The value the attribute must be equal to.
    pub equals: T,
}

impl<T: Serialize> Condition<T> {
    fn get_expression(self, index: usize) -> Result<common::ExpressionInput> {
        let value = to_attribute_value(self.equals)?;
        let name_placeholder = common::placeholder(&self.name);
        let value_placeholder = format!(":{}_eq{}", self.name, index);
        let operation = common::ExpressionInput {
            expression: format!("{name_placeholder} = {value_placeholder}"),
            expression_attribute_names: [(name_placeholder, self.name)].into(),
            expression_attribute_values: [(value_placeholder, value)].into(),
        };
        Ok(operation)
    }

    pub(crate) fn get_expression_operation(conditions: Vec<Self>) -> Result<common::ExpressionInput> {
        let mut operations = Vec::with_capacity(conditions.len());
        for (index, condition) in conditions.into_iter().enumerate() {
            operations.push(condition.get_expression(index)?);
        }
        Ok(common::ExpressionInput::merge(AND, operations))
    }
}
