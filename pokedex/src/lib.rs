//! Shared Pokemon catalog model for the pokedex app.
//!
//! This crate owns the catalog shapes used by `fetch`, `server`, and
//! `client`: the subset of the PokeAPI response the app consumes, the
//! [`PokemonResult`] view model served to pages, and the prefetched
//! [`Pokedex`] dataset the server loads at startup.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Number of catalog entries fetched at build time (the original 151).
pub const CATALOG_SIZE: u32 = 151;

/// Fallback path substituted when the preferred artwork is absent.
pub const NO_IMAGE_PATH: &str = "/no-image.png";

/// Error returned by [`Pokedex::load`] and [`Pokedex::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// The dataset is not a JSON array of catalog entries.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// POKEAPI RESPONSE SUBSET
// =============================================================================

/// One entry of the PokeAPI `/pokemon/{id-or-name}` response, reduced to the
/// fields the catalog keeps.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub sprites: ApiSprites,
}

/// Sprite URLs for one entry. Every field is optional on the wire.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiSprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<ApiOtherSprites>,
}

/// Alternate artwork collections nested under `sprites.other`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiOtherSprites {
    #[serde(default)]
    pub dream_world: Option<ApiDreamWorld>,
}

/// The `dream_world` artwork set; its front image is the preferred portrait.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiDreamWorld {
    pub front_default: Option<String>,
}

/// The PokeAPI `/pokemon?limit=N` listing response.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiPokemonList {
    pub results: Vec<ApiNamedResource>,
}

/// A named resource reference in a PokeAPI listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiNamedResource {
    pub name: String,
    pub url: String,
}

// =============================================================================
// VIEW MODEL
// =============================================================================

/// A catalog entry as served to pages: identifier, display name, primary
/// artwork (fallback already applied at map time), and four sprite variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResult {
    pub id: u32,
    pub name: String,
    /// Primary artwork URL; [`NO_IMAGE_PATH`] when PokeAPI has none.
    pub image: String,
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
}

impl From<ApiPokemon> for PokemonResult {
    fn from(api: ApiPokemon) -> Self {
        let image = api
            .sprites
            .other
            .and_then(|other| other.dream_world)
            .and_then(|dream_world| dream_world.front_default)
            .unwrap_or_else(|| NO_IMAGE_PATH.to_owned());

        Self {
            id: api.id,
            name: api.name,
            image,
            front_default: api.sprites.front_default,
            back_default: api.sprites.back_default,
            front_shiny: api.sprites.front_shiny,
            back_shiny: api.sprites.back_shiny,
        }
    }
}

// =============================================================================
// DATASET
// =============================================================================

/// The prefetched catalog: every entry plus by-id and by-name lookup.
///
/// Built once from the dataset file the fetch step writes; read-only after
/// that, so the server shares it behind an `Arc` with no lock.
#[derive(Clone, Debug, Default)]
pub struct Pokedex {
    entries: Vec<PokemonResult>,
    by_id: HashMap<u32, usize>,
    by_name: HashMap<String, usize>,
}

impl Pokedex {
    /// Build a catalog from entries. A later duplicate (by id or name)
    /// shadows an earlier one in the lookup maps.
    #[must_use]
    pub fn from_entries(entries: Vec<PokemonResult>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            by_id.insert(entry.id, index);
            by_name.insert(entry.name.to_ascii_lowercase(), index);
        }
        Self { entries, by_id, by_name }
    }

    /// Parse a catalog from its JSON serialization (an array of entries).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when `raw` is not a JSON array of
    /// catalog entries.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<PokemonResult> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries))
    }

    /// Load the catalog from the dataset file written by the fetch step.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when the file cannot be read and
    /// [`CatalogError::Parse`] when its contents do not decode.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Entry with the given id, if present.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&PokemonResult> {
        self.by_id.get(&id).map(|index| &self.entries[*index])
    }

    /// Entry with the given display name, matched case-insensitively.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&PokemonResult> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|index| &self.entries[*index])
    }

    /// Every entry, in dataset order.
    #[must_use]
    pub fn all(&self) -> &[PokemonResult] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
