use super::*;

#[test]
fn list_endpoint_formats_limit() {
    assert_eq!(
        list_endpoint("https://pokeapi.co/api/v2", 151),
        "https://pokeapi.co/api/v2/pokemon?limit=151"
    );
}

#[test]
fn list_endpoint_trims_trailing_slash() {
    assert_eq!(
        list_endpoint("https://pokeapi.co/api/v2/", 10),
        "https://pokeapi.co/api/v2/pokemon?limit=10"
    );
}

#[test]
fn pokemon_endpoint_formats_name() {
    assert_eq!(
        pokemon_endpoint("https://pokeapi.co/api/v2", "pikachu"),
        "https://pokeapi.co/api/v2/pokemon/pikachu"
    );
}

#[test]
fn cli_defaults_match_catalog_size_and_data_path() {
    let cli = Cli::parse_from(["pokedex-fetch"]);
    assert_eq!(cli.limit, pokedex::CATALOG_SIZE);
    assert_eq!(cli.out, PathBuf::from("data/pokedex.json"));
}

#[test]
fn cli_accepts_overrides() {
    let cli = Cli::parse_from(["pokedex-fetch", "--limit", "3", "--out", "/tmp/catalog.json"]);
    assert_eq!(cli.limit, 3);
    assert_eq!(cli.out, PathBuf::from("/tmp/catalog.json"));
}

#[test]
fn write_dataset_round_trips_through_catalog_load() {
    let dir = std::env::temp_dir().join("pokedex-fetch-test");
    let out = dir.join("pokedex.json");
    let entries = vec![PokemonResult {
        id: 25,
        name: "pikachu".to_owned(),
        image: "https://art.test/25.svg".to_owned(),
        front_default: None,
        back_default: None,
        front_shiny: None,
        back_shiny: None,
    }];

    write_dataset(&out, &entries).unwrap();
    let catalog = pokedex::Pokedex::load(&out).unwrap();
    assert_eq!(catalog.all(), entries.as_slice());

    let _ = std::fs::remove_file(&out);
    let _ = std::fs::remove_dir(&dir);
}
