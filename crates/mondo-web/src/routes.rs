use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use maud::Markup;
use mondo_core::lookup::RegionalLookup;
use mondo_core::model::SearchItem;
use mondo_core::search::{filter_items, DEFAULT_RESULT_LIMIT};
use mondo_core::text::slugify;
use serde::Deserialize;

use crate::{error::AppError, pages, state::AppState};

#[derive(Deserialize)]
pub struct RegionQuery {
    region: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

fn check_language(lang: &str) -> Result<(), AppError> {
    if pages::is_supported_language(lang) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Unsupported language '{lang}'")))
    }
}

pub async fn root_handler() -> impl IntoResponse {
    Redirect::permanent("/en")
}

pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn homepage_handler(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
    Query(query): Query<RegionQuery>,
) -> Result<Markup, AppError> {
    check_language(&lang)?;
    let data = state.regional_data().await?;

    // Tabs link with the region slug; the full name is accepted too.
    let requested = query.region.as_deref().and_then(|wanted| {
        data.keys()
            .find(|name| *name == wanted || slugify(name) == wanted)
            .map(str::to_string)
    });

    Ok(pages::homepage(&lang, &data, requested.as_deref()))
}

pub async fn country_handler(
    State(state): State<Arc<AppState>>,
    Path((lang, slug)): Path<(String, String)>,
) -> Result<Markup, AppError> {
    check_language(&lang)?;
    let data = state.regional_data().await?;
    let country = data
        .find_country(&slug)
        .ok_or_else(|| AppError::NotFound(format!("No country '{slug}'")))?;
    Ok(pages::country_page(&lang, &data, country))
}

pub async fn destination_handler(
    State(state): State<Arc<AppState>>,
    Path((lang, slug)): Path<(String, String)>,
) -> Result<Markup, AppError> {
    check_language(&lang)?;
    let data = state.regional_data().await?;
    let dest = data
        .find_destination(&slug)
        .ok_or_else(|| AppError::NotFound(format!("No destination '{slug}'")))?;
    Ok(pages::destination_page(&lang, dest))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchItem>>, AppError> {
    let items = state.search_data().await?;
    let hits = filter_items(&items, &query.q, DEFAULT_RESULT_LIMIT)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(hits))
}

pub async fn search_data_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchItem>>, AppError> {
    Ok(Json(state.search_data().await?))
}
