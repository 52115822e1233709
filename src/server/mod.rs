//! HTTP surface: routing, handler glue, and the maintenance sweeper.
//!
//! The server layer is deliberately thin — it deserializes, hands off to the
//! [`ChatPipeline`], and maps [`ChatError`] onto user-safe wire responses.
//! Raw collaborator error bodies never reach the client.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{debug, info, warn};

use crate::pipeline::{ChatError, ChatPipeline};

pub mod wire;

use wire::{ChatRequest, ErrorBody, FeedbackAck, FeedbackRequest};

/// Build the application router.
pub fn router(pipeline: Arc<ChatPipeline>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/feedback", post(feedback))
        .with_state(pipeline)
}

async fn chat(
    State(pipeline): State<Arc<ChatPipeline>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<ChatRequest>,
) -> Response {
    match pipeline.handle(request, Some(addr.ip().to_string())).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => {
            warn!(error = %error, "chat request failed");
            error_response(&error).into_response()
        }
    }
}

/// Out-of-band feedback channel: log the disliked question/answer pair and
/// acknowledge. No further processing contract.
async fn feedback(Json(feedback): Json<FeedbackRequest>) -> Response {
    info!(
        question = %feedback.question,
        answer = %feedback.answer,
        "user feedback received (disliked answer)"
    );
    (
        StatusCode::OK,
        Json(FeedbackAck {
            status: "ok".to_owned(),
            message: "Feedback received.".to_owned(),
        }),
    )
        .into_response()
}

/// Spawn the periodic TTL sweeper for sessions and the upstream cache.
///
/// Both stores also expire lazily on access; the sweep bounds memory for
/// keys that are never touched again.
pub fn spawn_maintenance_sweeper(
    pipeline: Arc<ChatPipeline>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let sessions = pipeline.sessions().sweep_expired();
            let cached = pipeline.cache().sweep_expired();
            if sessions > 0 || cached > 0 {
                debug!(sessions, cached, "swept expired entries");
            }
        }
    })
}

/// Map a pipeline error onto its wire status and user-safe body.
pub fn error_response(error: &ChatError) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(ErrorBody {
            error: error.user_message(),
        }),
    )
}
