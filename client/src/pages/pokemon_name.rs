//! Detail page for one catalog entry, addressed by name.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::Layout;
use crate::components::pokemon_detail::PokemonDetail;

/// Detail page for `/name/:name`. Same layout as the by-id page; the
/// catalog API resolves the name case-insensitively.
#[component]
pub fn PokemonByNamePage() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.read().get("name");

    let entry = LocalResource::new(move || {
        let name = name();
        async move {
            match name {
                Some(name) => crate::net::api::fetch_pokemon_by_name(&name).await,
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
