//! Item Summary Card Component
//!
//! Read-only card for one product.

use leptos::prelude::*;

use crate::models::Item;

/// Stateless summary of a single product
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let Item {
        codigo,
        nombre,
        descripcion,
        precio_compra,
        precio_venta,
        stock,
        ..
    } = item;

    view! {
        <div class="item-card">
            <h2>{nombre}</h2>
            <p>"Código: " {codigo}</p>
            <p>{descripcion.unwrap_or_default()}</p>
            <p>"Precio compra: " {precio_compra}</p>
            <p>"Precio venta: " {precio_venta}</p>
            <p>"Stock: " {stock}</p>
            <hr/>
        </div>
    }
}
