use crate::error::AppError;
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{warn, Instrument};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Echo the caller's `x-request-id`, or mint one, on request and response.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let id = match req.headers().get(X_REQUEST_ID) {
        Some(v) => v.clone(),
        None => {
            let request_id = Uuid::new_v4().to_string();
            match HeaderValue::from_str(&request_id) {
                Ok(v) => {
                    req.headers_mut().insert(X_REQUEST_ID, v.clone());
                    v
                }
                Err(e) => {
                    warn!("parse request id error: {e}");
                    return Ok(next.run(req).await);
                }
            }
        }
    };
    let span = tracing::debug_span!("request", id = ?id);
    let mut res = next.run(req).instrument(span).await;
    res.headers_mut().insert(X_REQUEST_ID, id);
    Ok(res)
}
