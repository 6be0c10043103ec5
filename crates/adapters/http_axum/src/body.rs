//! Lenient JSON body extractor.
//!
//! Unlike [`axum::Json`], [`JsonBody`] never rejects a request because of
//! its content. Anything that is not a JSON object sent with a JSON content
//! type becomes `None`, and the service reports "Not a JSON" when it gets to
//! that check. A parent that does not exist is reported first.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;

use hbnb_domain::payload::Payload;

/// The request body as an optional [`Payload`].
#[derive(Debug)]
pub struct JsonBody(pub Option<Payload>);

/// `application/json` or any `application/*+json` media type.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;
        if !is_json {
            tracing::debug!("ignoring body without a JSON content type");
            return Ok(Self(None));
        }
        Ok(Self(Payload::from_slice(&bytes)))
    }
}
