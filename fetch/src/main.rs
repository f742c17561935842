//! Build-time catalog fetcher.
//!
//! Downloads the fixed catalog from PokeAPI and writes the dataset file the
//! server loads at startup. This is the only code that ever talks to
//! PokeAPI; nothing at page-serving time does.

use std::path::{Path, PathBuf};

use clap::Parser;
use pokedex::{ApiPokemon, ApiPokemonList, PokemonResult};

#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Parser, Debug)]
#[command(name = "pokedex-fetch", about = "Prefetch the Pokemon catalog from PokeAPI")]
struct Cli {
    /// PokeAPI base URL.
    #[arg(long, env = "POKEAPI_BASE_URL", default_value = "https://pokeapi.co/api/v2")]
    base_url: String,

    /// Number of catalog entries to fetch.
    #[arg(long, default_value_t = pokedex::CATALOG_SIZE)]
    limit: u32,

    /// Output path for the dataset file.
    #[arg(long, default_value = "data/pokedex.json")]
    out: PathBuf,
}

fn list_endpoint(base_url: &str, limit: u32) -> String {
    format!("{}/pokemon?limit={limit}", base_url.trim_end_matches('/'))
}

fn pokemon_endpoint(base_url: &str, name: &str) -> String {
    format!("{}/pokemon/{name}", base_url.trim_end_matches('/'))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(count) => println!("wrote {count} entries to {}", cli.out.display()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<usize, FetchError> {
    let client = reqwest::Client::new();

    let listing: ApiPokemonList = client
        .get(list_endpoint(&cli.base_url, cli.limit))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let mut entries = Vec::with_capacity(listing.results.len());
    for resource in &listing.results {
        let api: ApiPokemon = client
            .get(pokemon_endpoint(&cli.base_url, &resource.name))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        entries.push(PokemonResult::from(api));
    }

    write_dataset(&cli.out, &entries)?;
    Ok(entries.len())
}

fn write_dataset(out: &Path, entries: &[PokemonResult]) -> Result<(), FetchError> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|source| FetchError::Write { path: out.to_path_buf(), source })?;
    }
    let raw = serde_json::to_string_pretty(entries)?;
    std::fs::write(out, raw).map_err(|source| FetchError::Write { path: out.to_path_buf(), source })
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
