//! Tienda Frontend App
//!
//! Root component: navigation context plus the active view.

use leptos::prelude::*;

use crate::components::{ItemForm, ItemList};
use crate::context::{initial_route, NavContext, Route};

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(initial_route());

    let nav = NavContext::new((route, set_route));
    provide_context(nav);

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <h1>"Stock Master"</h1>
                <nav>
                    <button on:click=move |_| nav.go_to_collection()>"Productos"</button>
                    <button on:click=move |_| nav.go_to_form(None)>"Crear producto"</button>
                </nav>
            </header>

            <main class="main-content">
                {move || match route.get() {
                    Route::Collection => view! { <ItemList/> }.into_any(),
                    Route::Form { .. } => view! { <ItemForm/> }.into_any(),
                }}
            </main>
        </div>
    }
}
