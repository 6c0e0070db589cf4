//! handler latency, reported in `x-server-time` as whole microseconds

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::response::Response;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::time::Instant;
use tower::{Layer, Service};

pub const X_SERVER_TIME: &str = "x-server-time";

#[derive(Clone, Debug)]
pub struct ServerTimeLayer;

impl<S> Layer<S> for ServerTimeLayer {
    type Service = ServerTime<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ServerTime { inner }
    }
}

#[derive(Clone, Debug)]
pub struct ServerTime<S> {
    inner: S,
}

type BoxFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

impl<S> Service<Request> for ServerTime<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<Response, S::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let start = Instant::now();
        let route = format!("{} {}", req.method(), req.uri().path());
        let handled = self.inner.call(req);
        Box::pin(async move {
            let mut response = handled.await?;
            let micros = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
            tracing::debug!("{} -> {} in {}us", route, response.status(), micros);
            response
                .headers_mut()
                .insert(X_SERVER_TIME, HeaderValue::from(micros));
            Ok(response)
        })
    }
}
