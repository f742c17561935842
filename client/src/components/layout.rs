//! Shared page chrome: document title, navbar, and content container.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::navbar::Navbar;

/// Page wrapper applying the document title, navbar, and main container.
/// Detail pages override the title once their entry loads.
#[component]
pub fn Layout(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Title text=title/>
        <Navbar/>
        <main class="layout__main">{children()}</main>
    }
}
