#![deny(missing_docs)]

//! # Todo CRUD
//!
//! A serverless CRUD handler for "todo" records stored in an Amazon DynamoDB table,
//! invoked through API Gateway.
//!
//! ## Overview
//!
//! - [`store::TodoStore`] exposes List, Get, Create, Update and Delete, each mapped to a
//!   single table call and to a fixed [`error::TodoError`] on failure
//! - [`handler::function_handler`] routes an API Gateway request to the store and renders
//!   a JSON response
//! - The table operations themselves are structured types (see [`mod@read`] and
//!   [`mod@write`]) that build filter, projection and key expressions for you
//!
//! ## Quick Example
//!
//! ```no_run
//! use todo_crud::store::TodoStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let store = TodoStore::new(aws_sdk_dynamodb::Client::new(&config), "todos");
//!
//! let todo = store
//!     .create(br#"{"item": "buy milk", "createdBy": "alice", "state": 0}"#)
//!     .await?;
//! // an empty item keeps "buy milk", and the owner stays "alice"
//! let body = format!(r#"{{"id": "{}", "item": "", "createdBy": "bob", "state": 1}}"#, todo.id);
//! store.update(body.as_bytes()).await?;
//! let done = store.list("alice", "1").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Keys, filter conditions and selections
//! - [`mod@read`] - Read operations (GetItem, Scan)
//! - [`mod@write`] - Write operations (PutItem, DeleteItem)
//! - [`mod@backend`] - The seam between the store and DynamoDB

/// Backends executing table operations.
pub mod backend;

/// Common utilities for keys, conditions, and attribute selection.
pub mod common;

/// Configuration read from the environment.
pub mod config;

/// The todo error taxonomy.
pub mod error;

/// API Gateway request handling.
pub mod handler;

/// Read operations for retrieving data from DynamoDB tables.
pub mod read;

/// The todo store facade.
pub mod store;

/// The todo record.
pub mod todo;

/// Write operations for modifying data in DynamoDB tables.
pub mod write;
