//! JSON endpoints for generating, submitting, and reading outlines.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use outliner_core::{Outline, OutlineContent};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{DataResponse, GenerateRequest, ListQuery, SubmitRequest};
use crate::session::Session;

pub async fn generate_outline(
    State(state): State<Arc<AppState>>,
    Session(session): Session,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Vec<Outline>>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "unreadable generate-outline body");
        ApiError::Unknown(Some(rejection.body_text()))
    })?;
    let outline = state
        .outlines
        .generate_outline(&session, &request.question)
        .await
        .map_err(ApiError::from_generation)?;
    Ok(Json(DataResponse::new(vec![outline])))
}

pub async fn submit_outline(
    State(state): State<Arc<AppState>>,
    Session(session): Session,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<DataResponse<Vec<Outline>>>, ApiError> {
    let content = OutlineContent::new(request.thesis, request.points);
    let outline = state.outlines.submit_outline(&session, request.title, content).await?;
    Ok(Json(DataResponse::new(vec![outline])))
}

pub async fn list_outlines(
    State(state): State<Arc<AppState>>,
    Session(session): Session,
    Query(query): Query<ListQuery>,
) -> Result<Json<DataResponse<Vec<Outline>>>, ApiError> {
    let outlines = state.outlines.list_outlines(&session, query.query(), query.page()).await?;
    Ok(Json(DataResponse::new(outlines)))
}

pub async fn get_outline(
    State(state): State<Arc<AppState>>,
    Session(session): Session,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Outline>>, ApiError> {
    let outline = state.outlines.get_outline(&session, &id).await?;
    Ok(Json(DataResponse::new(outline)))
}
