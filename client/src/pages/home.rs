//! Home page listing the full catalog.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::pokemon_card::PokemonCard;

/// Home page — the 151-entry catalog grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = LocalResource::new(|| crate::net::api::fetch_pokemon_list());

    view! {
        <Layout title="Pokedex">
            <Suspense fallback=move || view! { <p class="catalog__loading">"Loading catalog..."</p> }>
                {move || {
                    catalog.get().map(|list| {
                        view! {
                            <div class="catalog__grid">
                                {list
                                    .into_iter()
                                    .map(|pokemon| view! { <PokemonCard pokemon=pokemon/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
                }}
            </Suspense>
        </Layout>
    }
}
