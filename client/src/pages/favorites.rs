//! Favorites page — grid of entries the user has favorited.
//!
//! Favorite ids live only in browser storage, so the list is assembled
//! client-side: read the id set after hydration, then filter the catalog.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::pokemon_card::PokemonCard;
use crate::state::favorites::Favorites;

/// Favorites page — shows favorited entries, or an empty state.
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let catalog = LocalResource::new(|| crate::net::api::fetch_pokemon_list());
    let favorite_ids = RwSignal::new(Vec::<u32>::new());

    // Seed from storage once the page runs in the browser; SSR output
    // shows the empty state.
    Effect::new(move || favorite_ids.set(Favorites::browser().ids()));

    view! {
        <Layout title="Favorites">
            <Suspense fallback=move || view! { <p class="catalog__loading">"Loading catalog..."</p> }>
                {move || {
                    catalog.get().map(|list| {
                        let ids = favorite_ids.get();
                        let favorites: Vec<_> =
                            list.into_iter().filter(|pokemon| ids.contains(&pokemon.id)).collect();
                        if favorites.is_empty() {
                            view! { <p class="catalog__empty">"No favorites yet."</p> }.into_any()
                        } else {
                            view! {
                                <div class="catalog__grid">
                                    {favorites
                                        .into_iter()
                                        .map(|pokemon| view! { <PokemonCard pokemon=pokemon/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </Layout>
    }
}
