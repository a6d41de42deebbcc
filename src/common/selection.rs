use crate::common;

/// Top-level attributes to return from a read (projection expression).
///
/// ```rust
/// use todo_crud::common::selection;
///
/// let selection = selection::Selection(vec![
///     "id".to_string(),
///     "item".to_string(),
/// ]);
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Selection(pub Vec<String>);

impl From<Selection> for common::ExpressionInput {
    fn from(selection: Selection) -> Self {
        let operations = selection
            .0
            .into_iter()
            .map(|name| {
                let placeholder = common::placeholder(&name);
                common::ExpressionInput {
                    expression: placeholder.clone(),
                    expression_attribute_names: [(placeholder, name)].into(),
                    ..Default::default()
                }
            })
            .collect();
        common::ExpressionInput::merge(", ", operations)
    }
}
