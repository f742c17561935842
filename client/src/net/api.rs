//! REST API helpers for the catalog endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty/`None`; pages render a loading
//! fallback until hydration fetches real data.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/empty outputs instead of panics so catalog fetch
//! failures degrade to the missing/empty states without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use pokedex::PokemonResult;

/// Endpoint serving the full catalog list.
pub const LIST_ENDPOINT: &str = "/api/pokemon";

fn pokemon_endpoint(id: u32) -> String {
    format!("/api/pokemon/{id}")
}

fn name_endpoint(name: &str) -> String {
    format!("/api/name/{name}")
}

/// Fetch the full catalog list. Empty on failure or on the server.
pub async fn fetch_pokemon_list() -> Vec<PokemonResult> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get(LIST_ENDPOINT).send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<Vec<PokemonResult>>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch one entry by id. `None` if unknown, on failure, or on the server.
pub async fn fetch_pokemon(id: u32) -> Option<PokemonResult> {
    fetch_entry(&pokemon_endpoint(id)).await
}

/// Fetch one entry by name. `None` if unknown, on failure, or on the server.
pub async fn fetch_pokemon_by_name(name: &str) -> Option<PokemonResult> {
    fetch_entry(&name_endpoint(name)).await
}

async fn fetch_entry(endpoint: &str) -> Option<PokemonResult> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PokemonResult>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        None
    }
}
