use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Partition key of an item.
///
/// Todo tables are keyed by a single partition key, so there is no sort key.
///
/// ```rust
/// use todo_crud::common::key;
///
/// let key = key::Key {
///     name: "id".to_string(),
///     value: "1".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

impl<T: Serialize> TryFrom<Key<T>> for collections::HashMap<String, types::AttributeValue> {
    type Error = Error;

    fn try_from(key: Key<T>) -> Result<Self> {
        let value = to_attribute_value(key.value)?;
        Ok(Self::from([(key.name, value)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::string(
        Key {
            name: "id".to_string(),
            value: Value::String(
                "b".to_string()
            ),
        },
        collections::HashMap::from(
            [(
                "id".to_string(),
                types::AttributeValue::S(
                    "b".to_string()
                ),
            )]
        )
    )]
    #[case::empty_string(
        Key {
            name: "id".to_string(),
            value: Value::String(
                String::new()
            ),
        },
        collections::HashMap::from(
            [(
                "id".to_string(),
                types::AttributeValue::S(
                    String::new()
                ),
            )]
        )
    )]
    #[case::number(
        Key {
            name: "a".to_string(),
            value: Value::Number(
                42.into()
            ),
        },
        collections::HashMap::from(
            [(
                "a".to_string(),
                types::AttributeValue::N(
                    "42".to_string()
                ),
            )]
        )
    )]
    fn test_key_to_hash_map(
        #[case] key: Key<Value>,
        #[case] expected: collections::HashMap<String, types::AttributeValue>,
    ) {
        let actual: collections::HashMap<String, types::AttributeValue> = key.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
