//! Item Collection View Component
//!
//! Loads the full product collection on mount and renders one card per
//! record, in response order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ItemCard;
use crate::models::Item;

/// Load lifecycle for the collection
#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Loading,
    Loaded,
    Failed(String),
}

/// Product listing; exactly one fetch per mount
#[component]
pub fn ItemList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Item>::new());
    let (state, set_state) = signal(ListState::Loading);

    // Reads no signals, so it runs once per mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_items().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[LIST] Loaded {} productos", loaded.len()).into(),
                    );
                    // try_set: the response is dropped if the view is gone
                    let _ = set_items.try_set(loaded);
                    let _ = set_state.try_set(ListState::Loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LIST] Error loading: {}", e).into());
                    let _ = set_state.try_set(ListState::Failed(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="item-list">
            <Show when=move || state.get() == ListState::Loading>
                <p class="loading">"Cargando productos..."</p>
            </Show>
            {move || match state.get() {
                ListState::Failed(msg) => Some(view! {
                    <p class="load-error">"No se pudieron cargar los productos: " {msg}</p>
                }),
                _ => None,
            }}
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| view! { <ItemCard item=item/> }
            />
        </div>
    }
}
