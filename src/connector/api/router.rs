use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use super::container::Container;
use super::dto::{AskRequest, AskResponse, ExamTipsResponse, SummaryResponse};

/// Plain-text health string served at `/`.
pub const HEALTH_BANNER: &str = "🚀 AI Economics Tutor Backend (OLLAMA + phi3)";

/// Fixed body of the only error response the relay ever sends: `/ask` when
/// the backend is unreachable, times out, or otherwise fails.
pub const BUSY_REPLY: &str = "⚠️ Local AI is busy. Please wait and try again.";

pub fn router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/ask", post(ask))
        .route("/summary", get(summary))
        .route("/exam-tips", get(exam_tips))
        .layer(CorsLayer::permissive())
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, port: u16, public: bool) -> anyhow::Result<()> {
    let host = if public { "0.0.0.0" } else { "127.0.0.1" };
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Relay listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(container)).await?;
    Ok(())
}

async fn health() -> &'static str {
    HEALTH_BANNER
}

async fn ask(
    State(container): State<Arc<Container>>,
    Json(request): Json<AskRequest>,
) -> (StatusCode, Json<AskResponse>) {
    match container.ask_use_case().execute(&request.question).await {
        Ok(answer) => (StatusCode::OK, Json(AskResponse { answer })),
        Err(e) => {
            // Detail stays in the log; the caller gets the fixed busy message.
            error!("Ask failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AskResponse {
                    answer: BUSY_REPLY.to_string(),
                }),
            )
        }
    }
}

async fn summary(State(container): State<Arc<Container>>) -> Json<SummaryResponse> {
    // Always 200: the use case collapses failure into its fallback string.
    Json(SummaryResponse {
        summary: container.summary_use_case().execute().await,
    })
}

async fn exam_tips(State(container): State<Arc<Container>>) -> Json<ExamTipsResponse> {
    Json(ExamTipsResponse {
        tips: container.exam_tips_use_case().execute(),
    })
}
