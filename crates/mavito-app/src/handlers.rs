use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mavito_core::analytics::{self, DescriptiveAnalytics, TermFrequency};
use mavito_core::{AnalyticsError, LoadError, Page, SearchQuery, SortBy, Suggestion, Term};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::state::AppState;

/// Error mapped onto an HTTP status with a `{"detail": ...}` body
#[derive(Debug)]
pub enum ApiError {
    Load(LoadError),
    Analytics(AnalyticsError),
    NotFound(String),
    BadRequest(String),
}

impl From<LoadError> for ApiError {
    fn from(e: LoadError) -> Self {
        ApiError::Load(e)
    }
}

impl From<AnalyticsError> for ApiError {
    fn from(e: AnalyticsError) -> Self {
        ApiError::Analytics(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Load(e) => {
                tracing::error!("dataset unavailable: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Analytics(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, what),
            ApiError::BadRequest(why) => (StatusCode::BAD_REQUEST, why),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

fn default_sort() -> String {
    "name".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub language: Option<String>,
    pub domain: Option<String>,
    pub part_of_speech: Option<String>,
    #[serde(default = "default_sort")]
    pub sort_by: String,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl SearchParams {
    fn to_query(&self) -> SearchQuery {
        SearchQuery {
            query: self.query.clone(),
            language: self.language.clone(),
            domain: self.domain.clone(),
            part_of_speech: self.part_of_speech.clone(),
            sort_by: SortBy::parse(&self.sort_by),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub query: String,
}

fn default_lang() -> String {
    "eng".to_string()
}

fn default_top_n() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct FrequencyParams {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub dataset_loaded: bool,
}

pub async fn handle_health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        dataset_loaded: state.engine.loader().is_loaded(),
    })
}

pub async fn handle_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Page<Term>>, ApiError> {
    let results = state.engine.search(&params.to_query()).await?;

    let page = params.page.unwrap_or(1);
    let page_size = params
        .page_size
        .unwrap_or(state.config.search.default_page_size);

    tracing::debug!(
        "search {:?}: {} results, page {} of size {}",
        params.query,
        results.len(),
        page,
        page_size
    );
    Ok(Json(Page::paginate(results, page, page_size)))
}

pub async fn handle_suggest(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Vec<Suggestion>>, ApiError> {
    Ok(Json(state.engine.suggest(&params.query).await?))
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("invalid term id: {raw}")))
}

pub async fn handle_get_term(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Term>, ApiError> {
    let id = parse_id(&id)?;
    state
        .engine
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("term {id} not found")))
}

pub async fn handle_get_translations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Term>>, ApiError> {
    let id = parse_id(&id)?;
    if state.engine.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(format!("term {id} not found")));
    }
    Ok(Json(state.engine.translations_of(id).await?))
}

pub async fn handle_descriptive(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DescriptiveAnalytics>, ApiError> {
    let records = state.engine.loader().load_records().await?;
    Ok(Json(analytics::descriptive(records)))
}

pub async fn handle_term_frequency(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FrequencyParams>,
) -> Result<Json<TermFrequency>, ApiError> {
    let records = state.engine.loader().load_records().await?;
    Ok(Json(analytics::term_frequency(
        records,
        &params.lang,
        params.top_n,
    )?))
}
