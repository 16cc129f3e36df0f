//! serving-api - a greeting endpoint served through a serverless invocation adapter.
//!
//! The crate has two halves:
//! 1. An HTTP application (`app`) built on axum with a single `GET /` route
//!    mounted under a root path prefix (`/prod` by default)
//! 2. An invocation adapter (`api`) that turns AWS Lambda proxy events into
//!    HTTP requests, calls the application in-process and shapes the reply
//!    back into `{statusCode, headers, body}`
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lambda_runtime::Context;
//! use serde_json::json;
//! use serving_api::api::Adapter;
//! use serving_api::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let log = serving_api::setup_logging(config.log_level);
//!     let adapter = Adapter::from_config(&config, Arc::new(log));
//!
//!     let event = json!({
//!         "httpMethod": "GET",
//!         "path": "/prod/",
//!         "headers": {},
//!         "body": null
//!     });
//!     let response = adapter.handle(event, &Context::default()).await?;
//!     println!("{}", response["body"]);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod core;
pub mod errors;

pub use errors::AdapterError;

use api::TracingLog;
use tracing::Level;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Installs a process-wide tracing-subscriber with a JSON formatter suitable
/// for `CloudWatch` Logs, filtered at `level`, and returns the invocation log
/// the adapter writes through. Calling it again keeps the first subscriber.
///
/// # Example
///
/// ```
/// let log = serving_api::setup_logging(tracing::Level::INFO);
/// assert!(log.enabled());
/// ```
pub fn setup_logging(level: Level) -> TracingLog {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(LevelFilter::from_level(level));

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }

    TracingLog::new(level)
}
