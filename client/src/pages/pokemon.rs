//! Detail page for one catalog entry, addressed by id.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::Layout;
use crate::components::pokemon_detail::PokemonDetail;

/// Detail page for `/pokemon/:id`. Reads the id from the route and loads
/// the entry from the catalog API.
#[component]
pub fn PokemonPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u32>().ok())
    };

    let entry = LocalResource::new(move || {
        let id = id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_pokemon(id).await,
                None => None,
            }
        }
    });

    view! {
        <Layout title="Pokedex">
            <Suspense fallback=move || view! { <p class="catalog__loading">"Loading..."</p> }>
                {move || {
                    entry.get().map(|found| match found {
                        Some(pokemon) => view! { <PokemonDetail pokemon=pokemon/> }.into_any(),
                        None => view! { <p class="catalog__missing">"No such Pokemon."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </Layout>
    }
}
