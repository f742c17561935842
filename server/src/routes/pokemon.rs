//! Catalog read routes.

#[cfg(test)]
#[path = "pokemon_test.rs"]
mod pokemon_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use pokedex::PokemonResult;

use crate::state::AppState;

/// `GET /api/pokemon` — the full catalog list.
pub async fn list(State(state): State<AppState>) -> Json<Vec<PokemonResult>> {
    Json(state.pokedex.all().to_vec())
}

/// `GET /api/pokemon/:id` — one entry by id.
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PokemonResult>, StatusCode> {
    state
        .pokedex
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/name/:name` — one entry by display name (case-insensitive).
pub async fn by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PokemonResult>, StatusCode> {
    state
        .pokedex
        .get_by_name(&name)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
