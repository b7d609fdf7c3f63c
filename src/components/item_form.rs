//! Item Form View Component
//!
//! Create form with per-field validation; when the navigation context
//! carries an id, also offers confirm-then-delete for that product.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{NavContext, Route};
use crate::form::{validate, DeleteFlow, FieldErrors, FormFields, SubmitState};

/// Value of the input or textarea that fired `ev`
fn field_value(ev: &web_sys::Event) -> String {
    let Some(target) = ev.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Create/delete form for a product
#[component]
pub fn ItemForm() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext should be provided");

    // Delete target, when the active route carries one
    let id = match nav.route.get_untracked() {
        Route::Form { id } => id,
        Route::Collection => None,
    };

    let (codigo, set_codigo) = signal(String::new());
    let (nombre, set_nombre) = signal(String::new());
    let (descripcion, set_descripcion) = signal(String::new());
    let (precio_compra, set_precio_compra) = signal(String::new());
    let (precio_venta, set_precio_venta) = signal(String::new());
    let (stock, set_stock) = signal(String::new());

    let (errors, set_errors) = signal(FieldErrors::default());
    let (submit_state, set_submit_state) = signal(SubmitState::Editing);
    let (delete_flow, set_delete_flow) = signal(DeleteFlow::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = FormFields {
            codigo: codigo.get(),
            nombre: nombre.get(),
            descripcion: descripcion.get(),
            precio_compra: precio_compra.get(),
            precio_venta: precio_venta.get(),
            stock: stock.get(),
        };
        // Validation settles before any request leaves the form
        match validate(&fields) {
            Err(errs) => {
                set_errors.set(errs);
                set_submit_state.set(SubmitState::Editing);
            }
            Ok(input) => {
                set_errors.set(FieldErrors::default());
                set_submit_state.set(SubmitState::Submitting);
                spawn_local(async move {
                    web_sys::console::log_1(
                        &format!("[FORM] Creando producto {}", input.nombre).into(),
                    );
                    match api::create_item(&input).await {
                        Ok(_) => nav.go_to_collection(),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[FORM] Error creating: {}", e).into(),
                            );
                            // Stay on the form with the fields intact
                            let _ = set_submit_state.try_set(SubmitState::Failed(e.to_string()));
                        }
                    }
                });
            }
        }
    };

    let delete_item = move |item_id: u32| {
        // Only an accepted confirmation gets here
        if !delete_flow.get().can_delete() {
            return;
        }
        set_delete_flow.set(DeleteFlow::Deleting);
        spawn_local(async move {
            match api::delete_item(item_id).await {
                Ok(()) => nav.go_to_collection(),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[FORM] Error deleting #{}: {}", item_id, e).into(),
                    );
                    let _ = set_delete_flow.try_set(DeleteFlow::Failed(e.to_string()));
                }
            }
        });
    };

    let submitting = move || submit_state.get() == SubmitState::Submitting;

    view! {
        <div class="item-form">
            <form on:submit=on_submit>
                <input
                    type="number"
                    placeholder="Código"
                    prop:value=move || codigo.get()
                    on:input=move |ev| set_codigo.set(field_value(&ev))
                />
                {move || errors.get().codigo.map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}

                <input
                    type="text"
                    placeholder="Nombre"
                    prop:value=move || nombre.get()
                    on:input=move |ev| set_nombre.set(field_value(&ev))
                />
                {move || errors.get().nombre.map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}

                <textarea
                    rows="3"
                    placeholder="Descripción"
                    prop:value=move || descripcion.get()
                    on:input=move |ev| set_descripcion.set(field_value(&ev))
                ></textarea>

                <input
                    type="number"
                    step="0.001"
                    placeholder="Precio de compra"
                    prop:value=move || precio_compra.get()
                    on:input=move |ev| set_precio_compra.set(field_value(&ev))
                />
                {move || errors.get().precio_compra.map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}

                <input
                    type="number"
                    step="0.001"
                    placeholder="Precio de venta"
                    prop:value=move || precio_venta.get()
                    on:input=move |ev| set_precio_venta.set(field_value(&ev))
                />
                {move || errors.get().precio_venta.map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}

                <input
                    type="number"
                    placeholder="Stock"
                    prop:value=move || stock.get()
                    on:input=move |ev| set_stock.set(field_value(&ev))
                />
                {move || errors.get().stock.map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}

                <button type="submit" disabled=submitting>
                    {move || if submitting() { "Guardando..." } else { "Guardar" }}
                </button>
                {move || match submit_state.get() {
                    SubmitState::Failed(msg) => Some(view! {
                        <p class="form-error">"No se pudo guardar: " {msg}</p>
                    }),
                    _ => None,
                }}
            </form>

            {id.map(|item_id| view! {
                <DeleteConfirmButton
                    flow=delete_flow
                    set_flow=set_delete_flow
                    on_confirm=move |_: ()| delete_item(item_id)
                />
            })}
        </div>
    }
}
