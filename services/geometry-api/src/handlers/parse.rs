//! Geometry parse handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::header,
    response::{IntoResponse, Response},
};
use geo_common::{CoordinateOrder, CoordinateSequence};
use serde::Deserialize;
use tracing::{debug, warn};
use wkt_parser::{media_types, to_wkt, FeatureCollection, GeometryParser, ParserConfig};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the parse endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ParseParams {
    /// "latlng" or "lnglat". Defaults to the configured order.
    pub order: Option<String>,
}

/// POST /parse - raw text in, GeoJSON FeatureCollection out
pub async fn parse_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ParseParams>,
    body: String,
) -> Result<Response, ApiError> {
    let lines = run_parse(&state, &params, &body)?;
    let json = FeatureCollection::from_sequences(&lines).to_json(state.config.pretty)?;

    Ok(([(header::CONTENT_TYPE, media_types::GEO_JSON)], json).into_response())
}

/// POST /parse/wkt - raw text in, normalized WKT out
pub async fn parse_wkt_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ParseParams>,
    body: String,
) -> Result<Response, ApiError> {
    let lines = run_parse(&state, &params, &body)?;

    Ok(([(header::CONTENT_TYPE, media_types::WKT)], to_wkt(&lines)).into_response())
}

/// Parser for this request: the shared one unless `order` overrides it.
fn request_parser(state: &AppState, params: &ParseParams) -> Result<GeometryParser, ApiError> {
    match params.order.as_deref() {
        Some(order) => {
            let order: CoordinateOrder = order.parse()?;
            Ok(GeometryParser::new(ParserConfig::with_order(order)))
        }
        None => Ok(state.parser.clone()),
    }
}

fn run_parse(
    state: &AppState,
    params: &ParseParams,
    body: &str,
) -> Result<Vec<CoordinateSequence>, ApiError> {
    let parser = request_parser(state, params)?;

    match parser.parse(body) {
        Ok(lines) => {
            let points: usize = lines.iter().map(CoordinateSequence::len).sum();
            state.metrics.record_success(lines.len(), points);
            debug!(sequences = lines.len(), points, "Parsed request body");
            Ok(lines)
        }
        Err(e) => {
            state.metrics.record_failure();
            warn!(error = %e, body_len = body.len(), "Rejected geometry input");
            Err(e.into())
        }
    }
}
