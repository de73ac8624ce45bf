//! Lenient JSON body extractor.
//!
//! Handlers validate fields themselves, so the extractor never rejects on
//! shape: an empty body reads as `{}` and a body that is not JSON reads as
//! `None`, leaving the status code decision to the handler.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use crate::http::error::AppError;

/// The request body as JSON, or `None` if it is not valid JSON.
#[derive(Debug)]
pub struct JsonBody(pub Option<Value>);

impl JsonBody {
    /// Look up a top-level string field. Non-string values count as absent.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.0.as_ref()?.get(name)?.as_str()
    }
}

impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        Ok(JsonBody(parse(&bytes)))
    }
}

fn parse(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Some(Value::Object(Map::new()));
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "Request body is not valid JSON");
            None
        }
    }
}
