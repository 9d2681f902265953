use axum::{extract::State, routing::get, Json, Router};

use crate::catalog;
use crate::model::HomeView;
use crate::server::error::{ok, AppError, Envelope};
use crate::server::AppContext;
use crate::upstream::MediaKind;

pub fn catalog_routes() -> Router<AppContext> {
    Router::new()
        .route("/v3/home", get(home))
        .route("/v3/movie", get(movies))
        .route("/v3/series", get(series))
}

/// GET /v3/home
async fn home(State(ctx): State<AppContext>) -> Result<Json<Envelope<HomeView>>, AppError> {
    let view = catalog::home_view(ctx.source.as_ref())
        .await
        .map_err(|e| AppError::new(e).in_route("/v3/home"))?;
    Ok(ok(view))
}

/// GET /v3/movie
async fn movies(State(ctx): State<AppContext>) -> Result<Json<Envelope<HomeView>>, AppError> {
    let view = catalog::kind_view(ctx.source.as_ref(), MediaKind::Movie)
        .await
        .map_err(|e| AppError::new(e).in_route("/v3/movie"))?;
    Ok(ok(view))
}

/// GET /v3/series
async fn series(State(ctx): State<AppContext>) -> Result<Json<Envelope<HomeView>>, AppError> {
    let view = catalog::kind_view(ctx.source.as_ref(), MediaKind::Series)
        .await
        .map_err(|e| AppError::new(e).in_route("/v3/series"))?;
    Ok(ok(view))
}
