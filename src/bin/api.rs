use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use serving_api::api::{Adapter, handler};
use serving_api::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env().map_err(Error::from)?;
    let log = serving_api::setup_logging(config.log_level);
    tracing::info!(root_path = %config.root_path, "Starting serving-api");

    let adapter = Arc::new(Adapter::from_config(&config, Arc::new(log)));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let adapter = Arc::clone(&adapter);
        async move { handler(&adapter, event).await }
    }))
    .await
}
