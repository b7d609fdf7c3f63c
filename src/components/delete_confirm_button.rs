//! Delete Confirm Button Component
//!
//! Inline delete confirmation driven by an explicit [`DeleteFlow`].
//!
//! Shows a "Borrar" button first. A click asks "¿Estás seguro?" with
//! accept/decline; declining returns to idle without touching anything else.
//! The owner handles the accepted confirmation through `on_confirm`.

use leptos::prelude::*;

use crate::form::DeleteFlow;

#[component]
pub fn DeleteConfirmButton(
    flow: ReadSignal<DeleteFlow>,
    set_flow: WriteSignal<DeleteFlow>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="delete-area">
            <Show when=move || matches!(flow.get(), DeleteFlow::Idle | DeleteFlow::Failed(_))>
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |_| set_flow.set(DeleteFlow::Confirming)
                >
                    "Borrar"
                </button>
            </Show>
            <Show when=move || flow.get() == DeleteFlow::Confirming>
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"¿Estás seguro?"</span>
                    <button
                        type="button"
                        class="confirm-btn"
                        on:click=move |_| on_confirm.run(())
                    >
                        "Sí"
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| set_flow.set(DeleteFlow::Idle)
                    >
                        "No"
                    </button>
                </span>
            </Show>
            <Show when=move || flow.get() == DeleteFlow::Deleting>
                <span class="delete-progress">"Eliminando..."</span>
            </Show>
            {move || match flow.get() {
                DeleteFlow::Failed(msg) => Some(view! {
                    <p class="form-error">"No se pudo borrar: " {msg}</p>
                }),
                _ => None,
            }}
        </div>
    }
}
