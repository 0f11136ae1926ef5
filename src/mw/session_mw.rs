use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{server::error::ServerError, session::models::SessionId};

/// The core is agnostic to how session identity travels between requests;
/// this deployment carries it in a header.
pub static SESSION_HEADER: &str = "X-Quiz-Session";

pub async fn session_mw(mut req: Request<Body>, next: Next) -> Result<Response, ServerError> {
    let Some(raw) = extract_header(SESSION_HEADER, req.headers()) else {
        return Err(ServerError::Api(
            StatusCode::UNAUTHORIZED,
            format!("Missing {} header", SESSION_HEADER),
        ));
    };

    let session_id = to_uuid(raw)?;
    req.extensions_mut().insert(SessionId(session_id));

    Ok(next.run(req).await)
}

fn to_uuid(value: String) -> Result<Uuid, ServerError> {
    value.parse().map_err(|_| {
        ServerError::Api(
            StatusCode::UNAUTHORIZED,
            "Session id is invalid format".into(),
        )
    })
}

fn extract_header(key: &str, header_map: &HeaderMap) -> Option<String> {
    header_map
        .get(key)
        .and_then(|header| header.to_str().ok())
        .map(|s| s.to_owned())
}
