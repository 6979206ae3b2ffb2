use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::parse;
use crate::models::resume::ParseResult;
use crate::state::AppState;

/// The single input: the full resume content as one string field.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// POST /api/v1/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResult>, AppError> {
    debug!("Parsing resume text ({} bytes)", req.text.len());
    let result = parse(&req.text, &state.patterns, state.recognizer.as_ref()).await?;
    Ok(Json(result))
}
