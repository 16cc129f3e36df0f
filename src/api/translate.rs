//! Pure translation from an invocation event to an HTTP request.
//!
//! Three event shapes are understood:
//!
//! - REST API (payload v1): `httpMethod`, `path`, `headers` /
//!   `multiValueHeaders`, `queryStringParameters` /
//!   `multiValueQueryStringParameters`, `body`, `isBase64Encoded`
//! - HTTP API (payload v2): `requestContext.http.method`, `rawPath`,
//!   `rawQueryString`, `headers`, `cookies`, `body`, `isBase64Encoded`
//! - Application Load Balancer: the v1 field names plus `requestContext.elb`;
//!   path and query parameters arrive still percent-encoded
//!
//! REST API paths arrive decoded and are re-encoded here; HTTP API and ALB
//! paths are already encoded, so only characters a URI cannot carry are
//! escaped and existing `%XX` sequences are kept.
//!
//! Nothing here performs I/O, so it is tested without a router.

use axum::body::Body;
use axum::http::{Method, Request};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;
use url::form_urlencoded;

use super::helpers::ReplyShape;
use super::parsing::{string_pairs, v_bool, v_object, v_str};
use crate::errors::AdapterError;

/// Characters escaped in a path that is already percent-encoded.
const RAW_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters escaped in a decoded path; a literal `%` must be escaped too.
const DECODED_PATH: &AsciiSet = &RAW_PATH.add(b'%');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFormat {
    RestV1,
    HttpV2,
    Alb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub format: EventFormat,
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// The event carried `multiValueHeaders`; ALB expects the reply to match.
    pub multi_value_headers: bool,
}

impl InvocationRequest {
    /// Only origin-form paths (leading `/`) can be dispatched to the router.
    #[must_use]
    pub fn is_routable(&self) -> bool {
        self.path.starts_with('/')
    }

    #[must_use]
    pub fn reply_shape(&self) -> ReplyShape {
        ReplyShape {
            format: self.format,
            multi_value_headers: self.multi_value_headers,
        }
    }

    /// Path plus query string, as it goes on the request line.
    #[must_use]
    pub fn uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }

    pub fn into_http(self) -> Result<Request<Body>, AdapterError> {
        let mut builder = Request::builder().method(self.method.clone()).uri(self.uri());
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        Ok(builder.body(Body::from(self.body))?)
    }
}

#[must_use]
pub fn detect_format(event: &Value) -> EventFormat {
    let is_v2 = v_str(event, &["version"]) == Some("2.0")
        || event.get("rawPath").is_some()
        || v_str(event, &["requestContext", "http", "method"]).is_some();
    if is_v2 {
        EventFormat::HttpV2
    } else if event.get("requestContext").and_then(|c| c.get("elb")).is_some() {
        EventFormat::Alb
    } else {
        EventFormat::RestV1
    }
}

/// Translates an invocation event into a request description.
///
/// # Errors
///
/// Fails when the method or path is missing, the method is not a valid HTTP
/// token, or a base64-flagged body does not decode. A path without a leading
/// `/` is not an error; see [`InvocationRequest::is_routable`].
pub fn event_to_request(event: &Value) -> Result<InvocationRequest, AdapterError> {
    let format = detect_format(event);

    let (method, path) = match format {
        EventFormat::RestV1 | EventFormat::Alb => {
            (v_str(event, &["httpMethod"]), v_str(event, &["path"]))
        }
        EventFormat::HttpV2 => (
            v_str(event, &["requestContext", "http", "method"]),
            v_str(event, &["rawPath"]),
        ),
    };

    let method = method
        .ok_or_else(|| AdapterError::Translation("event has no HTTP method".to_string()))?;
    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|e| AdapterError::Translation(format!("invalid method '{}': {}", method, e)))?;

    let path = match path {
        Some(p) if !p.is_empty() => encode_path(p, format),
        _ => return Err(AdapterError::Translation("event has no path".to_string())),
    };

    let query = match format {
        EventFormat::RestV1 => rest_query(event),
        EventFormat::Alb => alb_query(event),
        EventFormat::HttpV2 => v_str(event, &["rawQueryString"])
            .filter(|q| !q.is_empty())
            .map(ToString::to_string),
    };

    let headers = match format {
        EventFormat::RestV1 | EventFormat::Alb => rest_headers(event),
        EventFormat::HttpV2 => http_headers(event),
    };

    Ok(InvocationRequest {
        format,
        method,
        path,
        query,
        headers,
        body: decode_body(event)?,
        multi_value_headers: v_object(event, "multiValueHeaders").is_some(),
    })
}

#[must_use]
pub fn encode_path(path: &str, format: EventFormat) -> String {
    let set = match format {
        EventFormat::RestV1 => DECODED_PATH,
        EventFormat::HttpV2 | EventFormat::Alb => RAW_PATH,
    };
    utf8_percent_encode(path, set).to_string()
}

fn query_params(event: &Value) -> Option<Vec<(String, String)>> {
    let params = v_object(event, "multiValueQueryStringParameters")
        .or_else(|| v_object(event, "queryStringParameters"))?;
    let pairs = string_pairs(params);
    (!pairs.is_empty()).then_some(pairs)
}

fn rest_query(event: &Value) -> Option<String> {
    let pairs = query_params(event)?;
    Some(
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish(),
    )
}

// ALB hands over keys and values exactly as they appeared on the wire.
fn alb_query(event: &Value) -> Option<String> {
    let pairs = query_params(event)?;
    Some(
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&"),
    )
}

fn rest_headers(event: &Value) -> Vec<(String, String)> {
    v_object(event, "multiValueHeaders")
        .or_else(|| v_object(event, "headers"))
        .map(string_pairs)
        .unwrap_or_default()
}

fn http_headers(event: &Value) -> Vec<(String, String)> {
    let mut headers = v_object(event, "headers")
        .map(string_pairs)
        .unwrap_or_default();

    let cookies: Vec<&str> = event
        .get("cookies")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    if !cookies.is_empty() {
        headers.push(("cookie".to_string(), cookies.join("; ")));
    }
    headers
}

fn decode_body(event: &Value) -> Result<Vec<u8>, AdapterError> {
    let Some(body) = event.get("body").and_then(Value::as_str) else {
        return Ok(Vec::new());
    };
    if v_bool(event, "isBase64Encoded") {
        Ok(STANDARD.decode(body)?)
    } else {
        Ok(body.as_bytes().to_vec())
    }
}
