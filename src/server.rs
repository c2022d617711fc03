use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::error::TunnelError;
use crate::pipeline::{yesterday, Pipeline, PitchSource, PlayerDirectory};

#[derive(Deserialize, Debug, Default)]
pub struct TopTunnelQuery {
    pub date: Option<NaiveDate>, // defaults to yesterday
}

impl IntoResponse for TunnelError {
    fn into_response(self) -> Response {
        let status = match &self {
            TunnelError::EmptySourceData { .. } | TunnelError::NoEligiblePitches { .. } => {
                StatusCode::NOT_FOUND
            }
            TunnelError::MalformedInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TunnelError::UnresolvedIdentity { .. } => StatusCode::BAD_GATEWAY,
            TunnelError::Source(_) => {
                tracing::error!("source failure: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = json!({ "error": self.to_string(), "kind": self.kind() });
        (status, Json(body)).into_response()
    }
}

pub async fn top_tunnel<S, D>(
    State(pipeline): State<Arc<Pipeline<S, D>>>,
    Query(query): Query<TopTunnelQuery>,
) -> Response
where
    S: PitchSource + Send + Sync + 'static,
    D: PlayerDirectory + Send + Sync + 'static,
{
    let date = query.date.unwrap_or_else(yesterday);

    // the pipeline reads files synchronously
    match tokio::task::spawn_blocking(move || pipeline.run(date)).await {
        Ok(Ok(result)) => Json(result).into_response(),
        Ok(Err(err)) => {
            tracing::info!(%date, kind = err.kind(), "no result: {}", err);
            err.into_response()
        }
        Err(join) => {
            tracing::error!("pipeline task failed: {}", join);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": join.to_string(), "kind": "internal" })),
            )
                .into_response()
        }
    }
}

pub fn router<S, D>(pipeline: Arc<Pipeline<S, D>>) -> Router
where
    S: PitchSource + Send + Sync + 'static,
    D: PlayerDirectory + Send + Sync + 'static,
{
    Router::new()
        .route("/top-tunnel", get(top_tunnel::<S, D>))
        .with_state(pipeline)
}

pub async fn serve<S, D>(bind_addr: &str, pipeline: Arc<Pipeline<S, D>>) -> anyhow::Result<()>
where
    S: PitchSource + Send + Sync + 'static,
    D: PlayerDirectory + Send + Sync + 'static,
{
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on {}", bind_addr);
    axum::serve(listener, router(pipeline)).await?;
    Ok(())
}
