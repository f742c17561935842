//! Top navigation bar.

use leptos::prelude::*;

/// App icon shown in the navbar (official PokeAPI sprite CDN).
const NAVBAR_ICON: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/dream-world/25.svg";

/// Dark navigation bar with the app brand and a favorites link.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <img class="navbar__icon" src=NAVBAR_ICON alt="Pokedex"/>
                <span class="navbar__title">"Pokedex"</span>
            </a>
            <a class="navbar__link" href="/favorites">"Favorites"</a>
        </nav>
    }
}
