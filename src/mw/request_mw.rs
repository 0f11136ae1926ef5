use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::info;

pub async fn request_mw(req: Request<Body>, next: Next) -> Response {
    info!("{} {}", req.method(), req.uri().path());
    next.run(req).await
}
