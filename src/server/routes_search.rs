use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Error;
use crate::model::CatalogItem;
use crate::search;
use crate::server::error::{ok, ApiQuery, AppError, Envelope};
use crate::server::AppContext;

pub fn search_routes() -> Router<AppContext> {
    Router::new()
        .route("/v3/search", get(search_both))
        .route("/search", get(search_multi))
}

#[derive(Deserialize)]
struct SearchQuery {
    query: Option<String>,
}

impl SearchQuery {
    fn term(self) -> Result<String, Error> {
        self.query
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| Error::client("Missing query parameter"))
    }
}

type SearchResponse = Result<Json<Envelope<Vec<CatalogItem>>>, AppError>;

/// GET /v3/search?query=
async fn search_both(State(ctx): State<AppContext>, ApiQuery(params): ApiQuery<SearchQuery>) -> SearchResponse {
    let term = params.term()?;
    let items = search::search(ctx.source.as_ref(), &term)
        .await
        .map_err(|e| AppError::new(e).in_route("/v3/search"))?;
    Ok(ok(items))
}

/// GET /search?query=
async fn search_multi(State(ctx): State<AppContext>, ApiQuery(params): ApiQuery<SearchQuery>) -> SearchResponse {
    let term = params.term()?;
    let items = search::search_multi(ctx.source.as_ref(), &term)
        .await
        .map_err(|e| AppError::new(e).in_route("/search"))?;
    Ok(ok(items))
}
