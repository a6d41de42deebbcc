use lambda_http::{Error, run, service_fn, tracing};
use todo_crud::{config::Config, handler, store::TodoStore};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env()?;
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = TodoStore::new(aws_sdk_dynamodb::Client::new(&sdk_config), config.table_name);
    ::tracing::info!(table = store.table_name(), "todo handler starting");

    run(service_fn(|request| handler::function_handler(&store, request))).await
}
