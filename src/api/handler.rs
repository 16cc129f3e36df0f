//! Invocation adapter: event in, application call, shaped response out.
//!
//! Each invocation writes exactly two log records through the adapter's
//! [`InvocationLog`]: the serialized event before translation and the
//! serialized response before it is returned.

use std::sync::Arc;

use axum::Router;
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use tower::ServiceExt;
use tracing::{debug, error};

use super::helpers;
use super::log::{InvocationLog, Stage};
use super::translate;
use crate::app;
use crate::core::config::AppConfig;
use crate::errors::AdapterError;

pub use self::function_handler as handler;

#[derive(Clone)]
pub struct Adapter {
    app: Router,
    log: Arc<dyn InvocationLog>,
}

impl Adapter {
    #[must_use]
    pub fn new(app: Router, log: Arc<dyn InvocationLog>) -> Self {
        Self { app, log }
    }

    /// Adapter around the greeting application for `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig, log: Arc<dyn InvocationLog>) -> Self {
        Self::new(app::router(config), log)
    }

    /// Runs one invocation. The context is carried for the platform only.
    ///
    /// # Errors
    ///
    /// Translation and dispatch failures propagate unchanged; unmatched routes,
    /// including paths without a leading `/`, are not errors and come back as
    /// 404 responses.
    pub async fn handle(&self, event: Value, _context: &Context) -> Result<Value, AdapterError> {
        self.log.record(Stage::Event, &serde_json::to_string(&event)?);

        let request = translate::event_to_request(&event)?;
        let shape = request.reply_shape();

        let response = if request.is_routable() {
            self.app
                .clone()
                .oneshot(request.into_http()?)
                .await
                .unwrap_or_else(|never| match never {})
        } else {
            debug!(path = %request.path, "Path is not origin-form");
            app::not_found_response()
        };

        let shaped = helpers::shape_response(response, shape).await?.to_value()?;
        self.log.record(Stage::Response, &serde_json::to_string(&shaped)?);

        Ok(shaped)
    }
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Returns the adapter's error, boxed for the runtime, when the event cannot
/// be translated or the response cannot be collected.
#[tracing::instrument(
    level = "info",
    skip(adapter, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler(adapter: &Adapter, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    adapter.handle(payload, &context).await.map_err(|e| {
        error!("Invocation failed: {}", e);
        Error::from(e)
    })
}
