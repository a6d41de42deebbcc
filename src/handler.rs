//! API Gateway adapter: maps an HTTP request onto a [`TodoStore`] operation.
//!
//! | Method   | Operation                                                        |
//! |----------|------------------------------------------------------------------|
//! | `GET`    | get by `id` (path or query parameter), otherwise list by `createdBy` and `state` |
//! | `POST`   | create from the body                                             |
//! | `PUT`    | update from the body                                             |
//! | `DELETE` | delete by the `id` query parameter                               |
//!
//! Failures answer `400` with `{"error": "<message>"}`, other methods `405`.

use crate::{backend::Backend, error::TodoError, store::TodoStore};

use lambda_http::{
    Body, Error, Request, RequestExt, Response,
    http::{Method, StatusCode, header},
};
use serde::Serialize;
use tracing::{info, warn};

const METHOD_NOT_ALLOWED: &str = "method not allowed";

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Handle one API Gateway request against `store`.
pub async fn function_handler<B: Backend>(
    store: &TodoStore<B>,
    request: Request,
) -> Result<Response<Body>, Error> {
    info!(method = %request.method(), path = request.uri().path(), "handling request");
    match *request.method() {
        Method::GET => match id_parameter(&request) {
            Some(id) => reply(StatusCode::OK, store.get(id).await),
            None => {
                let created_by = query_parameter(&request, "createdBy").unwrap_or_default();
                let state = query_parameter(&request, "state").unwrap_or_default();
                reply(StatusCode::OK, store.list(created_by, state).await)
            }
        },
        Method::POST => reply(StatusCode::CREATED, store.create(request.body()).await),
        Method::PUT => reply(StatusCode::OK, store.update(request.body()).await),
        Method::DELETE => {
            let id = query_parameter(&request, "id").unwrap_or_default();
            reply(StatusCode::OK, store.delete(id).await)
        }
        _ => respond(
            StatusCode::METHOD_NOT_ALLOWED,
            &ErrorBody {
                error: METHOD_NOT_ALLOWED,
            },
        ),
    }
}

fn query_parameter<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request
        .query_string_parameters_ref()
        .and_then(|parameters| parameters.first(name))
}

fn id_parameter(request: &Request) -> Option<&str> {
    request
        .path_parameters_ref()
        .and_then(|parameters| parameters.first("id"))
        .or_else(|| query_parameter(request, "id"))
}

fn reply<T: Serialize>(
    status: StatusCode,
    result: Result<T, TodoError>,
) -> Result<Response<Body>, Error> {
    match result {
        Ok(value) => respond(status, &value),
        Err(err) => {
            warn!(error = %err, "request failed");
            respond(
                StatusCode::BAD_REQUEST,
                &ErrorBody {
                    error: &err.to_string(),
                },
            )
        }
    }
}

fn respond<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(body)?;
    let response = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::Text(body))?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::{MemoryBackend, Operation};

    use rstest::{fixture, rstest};
    use serde_json::{Value, json};
    use std::collections;

    #[fixture]
    fn store() -> TodoStore<MemoryBackend> {
        TodoStore::new(MemoryBackend::new(), "todos")
    }

    fn request(method: Method, body: Body) -> Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri("/todos")
            .body(body)
            .unwrap()
    }

    fn query(pairs: &[(&str, &str)]) -> collections::HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    async fn call(store: &TodoStore<MemoryBackend>, request: Request) -> (StatusCode, Value) {
        let response = function_handler(store, request).await.unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = serde_json::from_slice(response.body()).unwrap();
        (response.status(), body)
    }

    async fn create(store: &TodoStore<MemoryBackend>) -> Value {
        let body = Body::from(r#"{"item":"buy milk","createdBy":"alice","state":0}"#);
        let (status, todo) = call(store, request(Method::POST, body)).await;
        assert_eq!(status, StatusCode::CREATED);
        todo
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_then_get_by_query(store: TodoStore<MemoryBackend>) {
        let created = create(&store).await;
        assert_eq!(created["item"], "buy milk");
        assert_eq!(created["createdBy"], "alice");
        let id = created["id"].as_str().unwrap();
        let get = request(Method::GET, Body::Empty)
            .with_query_string_parameters(query(&[("id", id)]));
        assert_eq!(call(&store, get).await, (StatusCode::OK, created.clone()));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_by_path_parameter(store: TodoStore<MemoryBackend>) {
        let created = create(&store).await;
        let id = created["id"].as_str().unwrap();
        let get = request(Method::GET, Body::Empty).with_path_parameters(query(&[("id", id)]));
        assert_eq!(call(&store, get).await, (StatusCode::OK, created.clone()));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_missing_is_zero_valued(store: TodoStore<MemoryBackend>) {
        let get = request(Method::GET, Body::Empty)
            .with_query_string_parameters(query(&[("id", "nope")]));
        let expected = json!({"id": "", "item": "", "createdBy": "", "state": 0});
        assert_eq!(call(&store, get).await, (StatusCode::OK, expected));
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_and_list(store: TodoStore<MemoryBackend>) {
        let created = create(&store).await;
        let body = json!({"id": created["id"], "item": "", "createdBy": "bob", "state": 1});
        let put = request(Method::PUT, Body::from(body.to_string()));
        let (status, updated) = call(&store, put).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["item"], "buy milk");
        assert_eq!(updated["createdBy"], "alice");
        assert_eq!(updated["state"], 1);
        let list = request(Method::GET, Body::Empty)
            .with_query_string_parameters(query(&[("createdBy", "alice"), ("state", "1")]));
        assert_eq!(call(&store, list).await, (StatusCode::OK, json!([updated])));
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete(store: TodoStore<MemoryBackend>) {
        let created = create(&store).await;
        let id = created["id"].as_str().unwrap();
        let delete = request(Method::DELETE, Body::Empty)
            .with_query_string_parameters(query(&[("id", id)]));
        assert_eq!(call(&store, delete).await, (StatusCode::OK, Value::Null));
        assert!(store.backend().items().is_empty());
    }

    #[rstest]
    #[case::list_without_owner(
        request(Method::GET, Body::Empty)
            .with_query_string_parameters(query(&[("state", "1")])),
        "invalid data"
    )]
    #[case::list_without_parameters(request(Method::GET, Body::Empty), "invalid data")]
    #[case::create_with_bad_body(request(Method::POST, Body::from("{")), "invalid data")]
    #[case::create_without_body(request(Method::POST, Body::Empty), "invalid data")]
    #[case::update_without_id(
        request(Method::PUT, Body::from(r#"{"item":"a"}"#)),
        "invalid data"
    )]
    #[case::update_missing_record(
        request(Method::PUT, Body::from(r#"{"id":"nope","item":"a"}"#)),
        "does not exist"
    )]
    #[tokio::test]
    async fn test_errors_are_bad_requests(
        store: TodoStore<MemoryBackend>,
        #[case] incoming: Request,
        #[case] message: &str,
    ) {
        assert_eq!(
            call(&store, incoming).await,
            (StatusCode::BAD_REQUEST, json!({"error": message}))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_store_failure_is_bad_request(store: TodoStore<MemoryBackend>) {
        store.backend().fail(Operation::DeleteItem);
        let delete = request(Method::DELETE, Body::Empty)
            .with_query_string_parameters(query(&[("id", "1")]));
        assert_eq!(
            call(&store, delete).await,
            (
                StatusCode::BAD_REQUEST,
                json!({"error": "could not delete item"})
            )
        );
    }

    #[rstest]
    #[case::patch(Method::PATCH)]
    #[case::head(Method::HEAD)]
    #[tokio::test]
    async fn test_method_not_allowed(store: TodoStore<MemoryBackend>, #[case] method: Method) {
        assert_eq!(
            call(&store, request(method, Body::Empty)).await,
            (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({"error": "method not allowed"})
            )
        );
        assert_eq!(store.backend().calls(), 0);
    }
}
