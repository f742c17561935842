//! Detail card for one catalog entry with the favorite toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Favorite status is seeded from browser storage after hydration and
//! flipped locally on toggle; the server never sees favorites.

use leptos::prelude::*;
use leptos_meta::Title;
use pokedex::PokemonResult;

use crate::state::favorites::Favorites;
use crate::util::confetti;
use crate::util::text::capitalize;

/// Detail layout: portrait card, name + favorite toggle header, sprite strip.
#[component]
pub fn PokemonDetail(pokemon: PokemonResult) -> impl IntoView {
    let id = pokemon.id;
    let is_favorite = RwSignal::new(false);

    // Seed from storage once the page runs in the browser; SSR output
    // always starts unfavorited.
    Effect::new(move || is_favorite.set(Favorites::browser().is_favorite(id)));

    let on_toggle = move |_| {
        Favorites::browser().toggle(id);
        let now_favorite = !is_favorite.get();
        is_favorite.set(now_favorite);
        if now_favorite {
            confetti::burst();
        }
    };

    let title = format!("{} Pokemon", capitalize(&pokemon.name));
    let display_name = capitalize(&pokemon.name);
    let portrait = pokemon.image.clone();
    let alt = pokemon.name.clone();
    let sprites = [
        pokemon.front_default,
        pokemon.back_default,
        pokemon.front_shiny,
        pokemon.back_shiny,
    ];

    view! {
        <Title text=title/>
        <div class="pokemon-detail">
            <div class="pokemon-detail__portrait">
                <img src=portrait alt=alt.clone()/>
            </div>
            <div class="pokemon-detail__card">
                <header class="pokemon-detail__header">
                    <h1>{display_name}</h1>
                    <button
                        class="btn btn--gradient"
                        class=("btn--ghost", move || !is_favorite.get())
                        on:click=on_toggle
                    >
                        {move || if is_favorite.get() { "In Favorites" } else { "Save in Favorites" }}
                    </button>
                </header>
                <div class="pokemon-detail__sprites">
                    <h2>"Sprites:"</h2>
                    <div class="pokemon-detail__sprite-row">
                        {sprites
                            .into_iter()
                            .map(|sprite| {
                                let src = sprite.unwrap_or_else(|| pokedex::NO_IMAGE_PATH.to_owned());
                                view! { <img class="pokemon-detail__sprite" src=src alt=alt.clone()/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}
