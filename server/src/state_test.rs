use super::*;

#[test]
fn clones_share_one_catalog() {
    let state = AppState::new(Pokedex::default());
    let clone = state.clone();
    assert!(Arc::ptr_eq(&state.pokedex, &clone.pokedex));
}
