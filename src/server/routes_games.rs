use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};

use crate::config::Game;
use crate::error::Error;
use crate::server::error::{ok, AppError, Envelope};
use crate::server::{parse_id, AppContext};

pub fn games_routes() -> Router<AppContext> {
    Router::new()
        .route("/v3/games", get(list_games))
        .route("/v3/game/:id", get(play_game))
}

/// GET /v3/games
async fn list_games(State(ctx): State<AppContext>) -> Json<Envelope<Vec<Game>>> {
    ok(ctx.config.games.clone())
}

/// GET /v3/game/:id
///
/// A full-page iframe around the game URL.
async fn play_game(
    State(ctx): State<AppContext>,
    Path(raw): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&raw).map_err(|_| Error::not_found("game", &raw))?;
    let game = ctx
        .config
        .games
        .iter()
        .find(|g| g.id == id)
        .ok_or_else(|| Error::not_found("game", id))?;

    Ok(Html(game_page(&game.game_url)))
}

fn game_page(url: &str) -> String {
    let src = url.replace('&', "&amp;").replace('"', "&quot;");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>html,body{{margin:0;height:100%;overflow:hidden}}iframe{{border:0;width:100%;height:100%}}</style>
</head>
<body>
<iframe src="{src}" allowfullscreen></iframe>
</body>
</html>
"#
    )
}
