//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is immutable after startup, so an `Arc` with no lock is enough.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use pokedex::Pokedex;

/// Shared application state. Clone is required by Axum — the catalog is
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub pokedex: Arc<Pokedex>,
}

impl AppState {
    #[must_use]
    pub fn new(pokedex: Pokedex) -> Self {
        Self { pokedex: Arc::new(pokedex) }
    }
}
