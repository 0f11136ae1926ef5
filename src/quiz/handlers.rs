use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;

use crate::{
    config::config::CONFIG,
    mw::session_mw::session_mw,
    quiz::models::{StartResponse, SubmitAnswerRequest},
    server::{app_state::AppState, error::ServerError},
    session::models::SessionId,
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    let session_routes = Router::new()
        .route("/round", get(current_round))
        .route("/answer", post(submit_answer))
        .route("/advance", post(advance))
        .route("/score", get(final_score))
        .route("/reset", post(reset))
        .layer(from_fn(session_mw));

    Router::new()
        .route("/start", post(start))
        .merge(session_routes)
        .with_state(state)
}

async fn start(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ServerError> {
    let session_id = state.get_sessions().create();

    let summary = state.get_sessions().with_session(session_id, |session| {
        let mut rng = rand::rng();
        session.start(state.get_catalog(), CONFIG.quiz.rounds, &mut rng)
    })?;

    info!("Started quiz session {}", session_id);

    Ok((
        StatusCode::CREATED,
        Json(StartResponse {
            session_id,
            total_rounds: summary.total_rounds,
        }),
    ))
}

async fn current_round(
    State(state): State<Arc<AppState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<impl IntoResponse, ServerError> {
    let view = state.get_sessions().with_session(session_id, |session| {
        let mut rng = rand::rng();
        session.current_round(
            state.get_catalog(),
            CONFIG.quiz.decoys,
            CONFIG.quiz.decoy_strategy,
            &mut rng,
        )
    })?;

    Ok((StatusCode::OK, Json(view)))
}

async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let result = state.get_sessions().with_session(session_id, |session| {
        let mut rng = rand::rng();
        session.submit_answer(
            &request.selected_title,
            state.get_catalog(),
            CONFIG.quiz.decoys,
            CONFIG.quiz.decoy_strategy,
            &mut rng,
        )
    })?;

    Ok((StatusCode::OK, Json(result)))
}

async fn advance(
    State(state): State<Arc<AppState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<impl IntoResponse, ServerError> {
    let outcome = state
        .get_sessions()
        .with_session(session_id, |session| session.advance())?;

    Ok((StatusCode::OK, Json(outcome)))
}

async fn final_score(
    State(state): State<Arc<AppState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<impl IntoResponse, ServerError> {
    let score = state
        .get_sessions()
        .with_session(session_id, |session| session.final_score())?;

    Ok((StatusCode::OK, Json(score)))
}

async fn reset(
    State(state): State<Arc<AppState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<impl IntoResponse, ServerError> {
    state.get_sessions().with_session(session_id, |session| {
        session.reset();
        Ok(())
    })?;

    info!("Reset quiz session {}", session_id);

    Ok(StatusCode::NO_CONTENT)
}
