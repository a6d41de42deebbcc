use crate::{backend, common, read, todo, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::{error::SdkError, operation, types};
use indexmap::IndexMap;
use serde_dynamo::to_attribute_value;
use serde_json::Value;
use std::{collections, fmt, sync};

type Item = collections::HashMap<String, types::AttributeValue>;

/// Table operation, used to make a [`MemoryBackend`] fail on purpose.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    /// GetItem.
    GetItem,
    /// Scan.
    Scan,
    /// PutItem.
    PutItem,
    /// DeleteItem.
    DeleteItem,
}

/// Backend holding items in memory, keyed by their `id` attribute.
///
/// Scans return items in insertion order. Every operation can be switched to
/// fail with [`MemoryBackend::fail`].
///
/// ```rust
/// use todo_crud::{backend::memory::MemoryBackend, store::TodoStore};
///
/// # async fn example() -> Result<(), todo_crud::error::TodoError> {
/// let store = TodoStore::new(MemoryBackend::new(), "todos");
/// let todo = store.create(br#"{"item":"buy milk","createdBy":"alice"}"#).await?;
/// assert_eq!(store.get(&todo.id).await?, todo);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    calls: sync::atomic::AtomicUsize,
    failures: sync::Mutex<collections::HashSet<Operation>>,
    items: sync::Mutex<IndexMap<String, Item>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call of `operation` fail.
    pub fn fail(&self, operation: Operation) {
        lock(&self.failures).insert(operation);
    }

    /// Store a raw item, bypassing any encoding.
    pub fn insert(&self, item: Item) {
        let id = match item.get(todo::ID) {
            Some(types::AttributeValue::S(id)) => id.clone(),
            _ => String::new(),
        };
        lock(&self.items).insert(id, item);
    }

    /// All stored items, in insertion order.
    pub fn items(&self) -> Vec<Item> {
        lock(&self.items).values().cloned().collect()
    }

    /// Number of operations sent so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(sync::atomic::Ordering::SeqCst)
    }

    fn begin(&self, operation: Operation) -> bool {
        self.calls.fetch_add(1, sync::atomic::Ordering::SeqCst);
        !lock(&self.failures).contains(&operation)
    }
}

fn lock<T>(mutex: &sync::Mutex<T>) -> sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(sync::PoisonError::into_inner)
}

fn failure<E>(message: impl fmt::Display) -> SdkError<E> {
    SdkError::construction_failure(message.to_string())
}

fn project(item: &Item, selection: Option<&common::selection::Selection>) -> Item {
    match selection {
        Some(selection) => item
            .iter()
            .filter(|(name, _)| selection.0.contains(*name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
        None => item.clone(),
    }
}

#[async_trait]
impl backend::Backend for MemoryBackend {
    async fn send_get_item(
        &self,
        get_item: read::get_item::GetItem<String>,
    ) -> Result<operation::get_item::GetItemOutput, SdkError<operation::get_item::GetItemError>>
    {
        if !self.begin(Operation::GetItem) {
            return Err(failure("GetItem failed"));
        }
        let item = lock(&self.items)
            .get(&get_item.key.value)
            .map(|item| project(item, get_item.read_args.selection.as_ref()));
        let output = operation::get_item::GetItemOutput::builder()
            .set_item(item)
            .build();
        Ok(output)
    }

    async fn send_scan(
        &self,
        scan: read::scan::Scan<Value>,
    ) -> Result<operation::scan::ScanOutput, SdkError<operation::scan::ScanError>> {
        if !self.begin(Operation::Scan) {
            return Err(failure("Scan failed"));
        }
        let mut conditions = Vec::with_capacity(scan.conditions.len());
        for condition in scan.conditions {
            let value: types::AttributeValue = match to_attribute_value(condition.equals) {
                Ok(value) => value,
                Err(err) => return Err(failure(err)),
            };
            conditions.push((condition.name, value));
        }
        let items = lock(&self.items);
        let scanned_count = items.len();
        let matches: Vec<Item> = items
            .values()
            .filter(|item| {
                conditions
                    .iter()
                    .all(|(name, value)| item.get(name) == Some(value))
            })
            .map(|item| project(item, scan.read_args.selection.as_ref()))
            .collect();
        drop(items);
        let output = operation::scan::ScanOutput::builder()
            .count(i32::try_from(matches.len()).unwrap_or(i32::MAX))
            .scanned_count(i32::try_from(scanned_count).unwrap_or(i32::MAX))
            .set_items(Some(matches))
            .build();
        Ok(output)
    }

    async fn send_put_item(
        &self,
        put_item: write::put_item::PutItem,
    ) -> Result<operation::put_item::PutItemOutput, SdkError<operation::put_item::PutItemError>>
    {
        if !self.begin(Operation::PutItem) {
            return Err(failure("PutItem failed"));
        }
        self.insert(put_item.item);
        Ok(operation::put_item::PutItemOutput::builder().build())
    }

    async fn send_delete_item(
        &self,
        delete_item: write::delete_item::DeleteItem<String>,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        SdkError<operation::delete_item::DeleteItemError>,
    > {
        if !self.begin(Operation::DeleteItem) {
            return Err(failure("DeleteItem failed"));
        }
        lock(&self.items).shift_remove(&delete_item.key.value);
        Ok(operation::delete_item::DeleteItemOutput::builder().build())
    }
}
