use serde::{Deserialize, Serialize};

/// Attribute name of the primary key.
pub const ID: &str = "id";

/// Attribute name of the free-text description.
pub const ITEM: &str = "item";

/// Attribute name of the owner.
pub const CREATED_BY: &str = "createdBy";

/// Attribute name of the status code.
pub const STATE: &str = "state";

/// Every attribute a todo record carries, in projection order.
pub const ATTRIBUTES: [&str; 4] = [ID, ITEM, CREATED_BY, STATE];

/// A todo record.
///
/// Missing fields decode to their zero value, both from request bodies and from stored items.
///
/// ```rust
/// use todo_crud::todo::Todo;
///
/// let todo: Todo = serde_json::from_str(r#"{"item":"buy milk","createdBy":"alice"}"#).unwrap();
/// assert!(todo.id.is_empty());
/// assert_eq!(todo.state, 0);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, minted on creation.
    pub id: String,
    /// Free-text description.
    pub item: String,
    /// Owner of the record, fixed at creation.
    pub created_by: String,
    /// Caller-defined status code.
    pub state: i64,
}

impl Todo {
    /// Apply this update payload on top of the stored record.
    ///
    /// The owner always comes from `current`, an empty `item` keeps the stored one,
    /// and `state` is taken as given.
    pub fn merged_onto(mut self, current: Todo) -> Self {
        self.created_by = current.created_by;
        if self.item.is_empty() {
            self.item = current.item;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn todo(id: &str, item: &str, created_by: &str, state: i64) -> Todo {
        Todo {
            id: id.to_string(),
            item: item.to_string(),
            created_by: created_by.to_string(),
            state,
        }
    }

    #[rstest]
    #[case::empty_item_is_carried_forward(
        todo("1", "", "bob", 1),
        todo("1", "buy milk", "alice", 0),
        todo("1", "buy milk", "alice", 1)
    )]
    #[case::item_is_replaced(
        todo("1", "buy bread", "", 0),
        todo("1", "buy milk", "alice", 3),
        todo("1", "buy bread", "alice", 0)
    )]
    #[case::owner_is_never_changed(
        todo("1", "buy milk", "mallory", 2),
        todo("1", "buy milk", "alice", 2),
        todo("1", "buy milk", "alice", 2)
    )]
    fn test_merged_onto(#[case] update: Todo, #[case] current: Todo, #[case] expected: Todo) {
        assert_eq!(update.merged_onto(current), expected);
    }

    #[rstest]
    #[case::full(
        r#"{"id":"1","item":"buy milk","createdBy":"alice","state":2}"#,
        todo("1", "buy milk", "alice", 2)
    )]
    #[case::missing_fields(
        r#"{"item":"buy milk"}"#,
        todo("", "buy milk", "", 0)
    )]
    #[case::unknown_fields_ignored(
        r#"{"id":"1","owner":"x"}"#,
        todo("1", "", "", 0)
    )]
    fn test_deserialize(#[case] body: &str, #[case] expected: Todo) {
        let actual: Todo = serde_json::from_str(body).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let actual = serde_json::to_value(todo("1", "buy milk", "alice", 0)).unwrap();
        let expected = serde_json::json!({
            "id": "1",
            "item": "buy milk",
            "createdBy": "alice",
            "state": 0,
        });
        assert_eq!(actual, expected);
    }
}
