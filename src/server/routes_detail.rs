use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::detail;
use crate::error::Error;
use crate::model::{DetailRecord, Episode};
use crate::server::error::{ok, ApiQuery, AppError, Envelope};
use crate::server::{parse_id, AppContext};
use crate::upstream::MediaKind;

pub fn detail_routes() -> Router<AppContext> {
    Router::new()
        .route("/movie/:id", get(movie))
        .route("/series/:id", get(series))
        .route("/detail", get(detail_by_query))
        .route("/v3/tv/:id/episodes", get(episodes_v3))
        .route("/episodes/:id", get(episodes))
}

type DetailResponse = Result<Json<Envelope<DetailRecord>>, AppError>;

/// GET /movie/:id
async fn movie(State(ctx): State<AppContext>, Path(id): Path<String>) -> DetailResponse {
    fetch(&ctx, MediaKind::Movie, &id, "/movie/:id").await
}

/// GET /series/:id
async fn series(State(ctx): State<AppContext>, Path(id): Path<String>) -> DetailResponse {
    fetch(&ctx, MediaKind::Series, &id, "/series/:id").await
}

#[derive(Deserialize)]
struct DetailQuery {
    id: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// GET /detail?id=&type=
///
/// `type` defaults to movie.
async fn detail_by_query(
    State(ctx): State<AppContext>,
    ApiQuery(params): ApiQuery<DetailQuery>,
) -> DetailResponse {
    let id = params
        .id
        .ok_or_else(|| Error::client("Missing id parameter"))?;
    let kind = match params.kind.as_deref() {
        None | Some("") => MediaKind::Movie,
        Some(tag) => MediaKind::parse(tag)
            .ok_or_else(|| Error::client(format!("Unknown type: {tag}")))?,
    };
    fetch(&ctx, kind, &id, "/detail").await
}

async fn fetch(ctx: &AppContext, kind: MediaKind, raw_id: &str, route: &'static str) -> DetailResponse {
    let id = parse_id(raw_id)?;
    let record = detail::assemble(ctx.source.as_ref(), kind, id)
        .await
        .map_err(|e| {
            AppError::new(e)
                .in_route(route)
                .with_ids(format!("kind={} id={id}", kind.path_segment()))
        })?;
    Ok(ok(record))
}

#[derive(Deserialize)]
struct SeasonQuery {
    s: Option<String>,
}

type EpisodesResponse = Result<Json<Envelope<Vec<Episode>>>, AppError>;

/// GET /v3/tv/:id/episodes?s=
async fn episodes_v3(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    ApiQuery(params): ApiQuery<SeasonQuery>,
) -> EpisodesResponse {
    listing(&ctx, &id, params, "/v3/tv/:id/episodes").await
}

/// GET /episodes/:id?s=
async fn episodes(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    ApiQuery(params): ApiQuery<SeasonQuery>,
) -> EpisodesResponse {
    listing(&ctx, &id, params, "/episodes/:id").await
}

/// Season defaults to 1.
async fn listing(
    ctx: &AppContext,
    raw_id: &str,
    params: SeasonQuery,
    route: &'static str,
) -> EpisodesResponse {
    let id = parse_id(raw_id)?;
    let season: u32 = match params.s.as_deref().map(str::trim) {
        None | Some("") => 1,
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::client(format!("Invalid season: {raw}")))?,
    };

    let episodes = detail::season_listing(ctx.source.as_ref(), id, season)
        .await
        .map_err(|e| {
            AppError::new(e)
                .in_route(route)
                .with_ids(format!("id={id} season={season}"))
        })?;
    Ok(ok(episodes))
}
