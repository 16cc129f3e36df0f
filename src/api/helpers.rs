//! Response shaping for the invocation boundary.
//!
//! The platform expects `{statusCode, headers, body}` where `body` is a
//! string. Text bodies pass through; anything else is base64 encoded and
//! flagged with `isBase64Encoded`.
//!
//! Repeated headers cannot always be comma-joined (`set-cookie` dates contain
//! commas), so where they go depends on the event format:
//!
//! - REST API: single values in `headers`, repeated ones in `multiValueHeaders`
//! - HTTP API: `set-cookie` values in `cookies`, the rest comma-joined
//! - ALB: everything in `multiValueHeaders` when the event used it, otherwise
//!   comma-joined, plus a `statusDescription`

use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, HeaderName, Response, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::{Map, Value};

use super::translate::EventFormat;
use crate::errors::AdapterError;

/// What the reply has to look like for the event that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyShape {
    pub format: EventFormat,
    pub multi_value_headers: bool,
}

impl Default for ReplyShape {
    fn default() -> Self {
        Self {
            format: EventFormat::RestV1,
            multi_value_headers: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub headers: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub multi_value_headers: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<String>,
    pub body: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_base64_encoded: bool,
}

impl InvocationResponse {
    pub fn to_value(&self) -> Result<Value, AdapterError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Collects the application's response into the invocation shape.
pub async fn shape_response(
    response: Response<Body>,
    shape: ReplyShape,
) -> Result<InvocationResponse, AdapterError> {
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await?;

    let (body, is_base64_encoded) = if is_text(&parts.headers) {
        match String::from_utf8(bytes.to_vec()) {
            Ok(text) => (text, false),
            Err(_) => (STANDARD.encode(&bytes), true),
        }
    } else if bytes.is_empty() {
        (String::new(), false)
    } else {
        (STANDARD.encode(&bytes), true)
    };

    let mut shaped = InvocationResponse {
        status_code: parts.status.as_u16(),
        status_description: None,
        headers: Map::new(),
        multi_value_headers: Map::new(),
        cookies: Vec::new(),
        body,
        is_base64_encoded,
    };

    match shape.format {
        EventFormat::RestV1 => {
            for name in parts.headers.keys() {
                let values = header_values(&parts.headers, name);
                if let [single] = values.as_slice() {
                    shaped.headers.insert(name.to_string(), Value::from(single.as_str()));
                } else {
                    shaped.multi_value_headers.insert(name.to_string(), Value::from(values));
                }
            }
        }
        EventFormat::HttpV2 => {
            let mut rest = parts.headers.clone();
            shaped.cookies = header_values(&parts.headers, &header::SET_COOKIE);
            rest.remove(header::SET_COOKIE);
            shaped.headers = header_map(&rest);
        }
        EventFormat::Alb => {
            shaped.status_description = Some(status_description(parts.status));
            if shape.multi_value_headers {
                for name in parts.headers.keys() {
                    let values = header_values(&parts.headers, name);
                    shaped.multi_value_headers.insert(name.to_string(), Value::from(values));
                }
            } else {
                shaped.headers = header_map(&parts.headers);
            }
        }
    }

    Ok(shaped)
}

/// Lower-cased header names; repeated headers are joined with `, `.
#[must_use]
pub fn header_map(headers: &HeaderMap) -> Map<String, Value> {
    let mut out = Map::new();
    for name in headers.keys() {
        let joined = header_values(headers, name).join(", ");
        out.insert(name.as_str().to_string(), Value::String(joined));
    }
    out
}

fn header_values(headers: &HeaderMap, name: &HeaderName) -> Vec<String> {
    headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect()
}

/// `"404 Not Found"`, as ALB wants it.
fn status_description(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

fn is_text(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return true;
    };
    let content_type = content_type.to_ascii_lowercase();
    content_type.starts_with("text/")
        || content_type.contains("json")
        || content_type.contains("xml")
        || content_type.contains("javascript")
        || content_type.starts_with("application/x-www-form-urlencoded")
}
