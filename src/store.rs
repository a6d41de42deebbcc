//! The todo facade: one backend call per operation, mapped to a [`TodoError`].

use crate::{backend::Backend, common, error::TodoError, read, todo, todo::Todo, write};

use aws_sdk_dynamodb::error::DisplayErrorContext;
use serde_dynamo::{from_item, from_items, to_item};
use serde_json::Value;
use tracing::{debug, error};

/// CRUD operations on the todo records of one table.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use todo_crud::store::TodoStore;
///
/// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
/// let store = TodoStore::new(client, "todos");
/// let todos = store.list("alice", "0").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TodoStore<B> {
    backend: B,
    table_name: String,
}

impl<B: Backend> TodoStore<B> {
    /// Create a store over `backend` for the table `table_name`.
    pub fn new(backend: B, table_name: impl Into<String>) -> Self {
        Self {
            backend,
            table_name: table_name.into(),
        }
    }

    /// The table this store reads and writes.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The backend this store sends operations to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// List the todos owned by `created_by` whose state equals `state`.
    ///
    /// Both arguments are raw query parameters: `created_by` must not be empty and
    /// `state` must parse as an integer, otherwise nothing is sent.
    pub async fn list(&self, created_by: &str, state: &str) -> Result<Vec<Todo>, TodoError> {
        let state: i64 = match state.parse() {
            Ok(state) if !created_by.is_empty() => state,
            _ => return Err(TodoError::InvalidData),
        };
        let scan = read::scan::Scan {
            conditions: vec![
                common::condition::Condition {
                    name: todo::CREATED_BY.to_string(),
                    equals: Value::from(created_by),
                },
                common::condition::Condition {
                    name: todo::STATE.to_string(),
                    equals: Value::from(state),
                },
            ],
            read_args: read::common::ReadArgs {
                selection: Some(common::selection::Selection(
                    todo::ATTRIBUTES.map(String::from).to_vec(),
                )),
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        };
        let output = self.backend.send_scan(scan).await.map_err(|err| {
            error!(table = %self.table_name, error = %DisplayErrorContext(&err), "Scan failed");
            TodoError::FailedToFetchRecord
        })?;
        let todos: Vec<Todo> = from_items(output.items.unwrap_or_default()).map_err(|err| {
            error!(table = %self.table_name, error = %err, "failed to decode scanned items");
            TodoError::FailedToUnmarshalRecord
        })?;
        debug!(table = %self.table_name, created_by, state, count = todos.len(), "listed todos");
        Ok(todos)
    }

    /// Look up a todo by `id`, telling a missing record apart from a found one.
    pub async fn fetch(&self, id: &str) -> Result<Option<Todo>, TodoError> {
        let get_item = read::get_item::GetItem {
            key: common::key::Key {
                name: todo::ID.to_string(),
                value: id.to_string(),
            },
            read_args: read::common::ReadArgs {
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        };
        let output = self.backend.send_get_item(get_item).await.map_err(|err| {
            error!(table = %self.table_name, id, error = %DisplayErrorContext(&err), "GetItem failed");
            TodoError::FailedToFetchRecord
        })?;
        output
            .item
            .map(|item| {
                from_item(item).map_err(|err| {
                    error!(table = %self.table_name, id, error = %err, "failed to decode item");
                    TodoError::FailedToUnmarshalRecord
                })
            })
            .transpose()
    }

    /// Look up a todo by `id`.
    ///
    /// A missing record comes back zero-valued; use [`TodoStore::fetch`] to tell it apart.
    pub async fn get(&self, id: &str) -> Result<Todo, TodoError> {
        Ok(self.fetch(id).await?.unwrap_or_default())
    }

    /// Create a todo from a JSON `body`, minting a fresh `id`.
    ///
    /// Any `id` in the body is ignored. Creating the same body twice makes two records.
    pub async fn create(&self, body: &[u8]) -> Result<Todo, TodoError> {
        let mut todo: Todo = serde_json::from_slice(body).map_err(|_| TodoError::InvalidData)?;
        todo.id = uuid::Uuid::new_v4().to_string();
        self.put(todo).await
    }

    /// Update a todo from a JSON `body` that names it by `id`.
    ///
    /// The owner cannot change and an empty `item` keeps the stored one; see
    /// [`Todo::merged_onto`]. The record is replaced as a whole, so concurrent
    /// updates of the same record race and the last write wins.
    pub async fn update(&self, body: &[u8]) -> Result<Todo, TodoError> {
        let todo: Todo = serde_json::from_slice(body).map_err(|_| TodoError::InvalidData)?;
        if todo.id.is_empty() {
            return Err(TodoError::InvalidData);
        }
        let current = self
            .fetch(&todo.id)
            .await?
            .filter(|current| !current.created_by.is_empty())
            .ok_or(TodoError::DoesNotExist)?;
        self.put(todo.merged_onto(current)).await
    }

    /// Delete the todo with `id`.
    ///
    /// The id is sent as is, and deleting a missing record succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), TodoError> {
        let delete_item = write::delete_item::DeleteItem {
            key: common::key::Key {
                name: todo::ID.to_string(),
                value: id.to_string(),
            },
            table_name: self.table_name.clone(),
        };
        self.backend
            .send_delete_item(delete_item)
            .await
            .map_err(|err| {
                error!(table = %self.table_name, id, error = %DisplayErrorContext(&err), "DeleteItem failed");
                TodoError::CouldNotDeleteItem
            })?;
        debug!(table = %self.table_name, id, "deleted todo");
        Ok(())
    }

    async fn put(&self, todo: Todo) -> Result<Todo, TodoError> {
        let item = to_item(&todo).map_err(|err| {
            error!(table = %self.table_name, id = %todo.id, error = %err, "failed to encode item");
            TodoError::CouldNotMarshalItem
        })?;
        let put_item = write::put_item::PutItem {
            item,
            table_name: self.table_name.clone(),
        };
        self.backend.send_put_item(put_item).await.map_err(|err| {
            error!(table = %self.table_name, id = %todo.id, error = %DisplayErrorContext(&err), "PutItem failed");
            TodoError::CouldNotDynamoPutItem
        })?;
        debug!(table = %self.table_name, id = %todo.id, "put todo");
        Ok(todo)
    }
}
