//! Stream targets and embed redirects on the secondary asset provider.
//!
//! Some players append a literal `?v=undefined` to ids they pass along.
//! Every id and season/episode value is cleaned of it before use.

use std::sync::OnceLock;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::server::error::{ApiQuery, AppError};
use crate::server::AppContext;

pub fn embed_routes() -> Router<AppContext> {
    Router::new()
        .route("/v3/m3u8/:id", get(movie_target))
        .route("/v3/m3u8/tv/:id/:season/:episode", get(episode_target))
        .route("/v2/embed/movie", get(movie_embed))
        .route("/v2/embed/series", get(series_embed))
}

fn undefined_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\?v=undefined").expect("static pattern is valid"))
}

/// Strip any `?v=undefined` fragments and surrounding whitespace.
pub fn clean_id(raw: &str) -> String {
    undefined_suffix().replace_all(raw, "").trim().to_string()
}

fn required(value: Option<String>, name: &str) -> Result<String, Error> {
    value
        .map(|v| clean_id(&v))
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::client(format!("Missing {name} parameter")))
}

pub fn movie_stream_target(stream_base: &str, id: &str) -> String {
    format!("{}/movie/{}", stream_base.trim_end_matches('/'), id)
}

pub fn episode_stream_target(stream_base: &str, id: &str, season: &str, episode: &str) -> String {
    format!(
        "{}/server/3?path=/tv/{}/{}/{}",
        stream_base.trim_end_matches('/'),
        id,
        season,
        episode
    )
}

pub fn series_embed_target(embed_base: &str, id: &str, season: &str, episode: Option<&str>) -> String {
    let base = embed_base.trim_end_matches('/');
    match episode {
        Some(episode) => format!("{base}/tv/{id}/{season}/{episode}"),
        None => format!("{base}/tv/{id}/{season}"),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StreamTarget {
    success: bool,
    target_url: String,
}

/// GET /v3/m3u8/:id
async fn movie_target(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<StreamTarget>, AppError> {
    let id = required(Some(id), "id")?;
    Ok(Json(StreamTarget {
        success: true,
        target_url: movie_stream_target(&ctx.config.embed.stream_base, &id),
    }))
}

/// GET /v3/m3u8/tv/:id/:season/:episode
async fn episode_target(
    State(ctx): State<AppContext>,
    Path((id, season, episode)): Path<(String, String, String)>,
) -> Result<Json<StreamTarget>, AppError> {
    let id = required(Some(id), "id")?;
    let season = required(Some(season), "season")?;
    let episode = required(Some(episode), "episode")?;
    Ok(Json(StreamTarget {
        success: true,
        target_url: episode_stream_target(&ctx.config.embed.stream_base, &id, &season, &episode),
    }))
}

#[derive(Deserialize)]
struct MovieEmbedQuery {
    id: Option<String>,
}

/// GET /v2/embed/movie?id=
async fn movie_embed(
    State(ctx): State<AppContext>,
    ApiQuery(params): ApiQuery<MovieEmbedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = required(params.id, "id")?;
    let base = ctx.config.embed.embed_base.trim_end_matches('/');
    Ok(Redirect::to(&format!("{base}/movie/{id}")))
}

#[derive(Deserialize)]
struct SeriesEmbedQuery {
    id: Option<String>,
    s: Option<String>,
    e: Option<String>,
}

/// GET /v2/embed/series?id=&s=&e=
async fn series_embed(
    State(ctx): State<AppContext>,
    ApiQuery(params): ApiQuery<SeriesEmbedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = required(params.id, "id")?;
    let season = required(params.s, "s")?;
    let episode = params.e.map(|e| clean_id(&e)).filter(|e| !e.is_empty());
    Ok(Redirect::to(&series_embed_target(
        &ctx.config.embed.embed_base,
        &id,
        &season,
        episode.as_deref(),
    )))
}
