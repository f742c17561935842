//! Catalog grid card linking to a detail page.

use leptos::prelude::*;
use pokedex::PokemonResult;

use crate::util::text::capitalize;

/// A clickable card for one catalog entry.
#[component]
pub fn PokemonCard(pokemon: PokemonResult) -> impl IntoView {
    let href = format!("/pokemon/{}", pokemon.id);
    let name = capitalize(&pokemon.name);
    let number = format!("#{}", pokemon.id);

    view! {
        <a class="pokemon-card" href=href>
            <img class="pokemon-card__image" src=pokemon.image alt=pokemon.name/>
            <div class="pokemon-card__footer">
                <span class="pokemon-card__name">{name}</span>
                <span class="pokemon-card__id">{number}</span>
            </div>
        </a>
    }
}
