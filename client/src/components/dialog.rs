//! Modal frame shared by every dialog: backdrop, title bar, Escape to close.

use leptos::prelude::*;

#[component]
pub fn Dialog(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class=format!("dialog {class}")
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="dialog__header">
                    <h2>{move || title.get()}</h2>
                    <button class="btn dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <div class="dialog__body">{children()}</div>
            </div>
        </div>
    }
}

/// Yes/No confirmation rendered inside another dialog.
#[component]
pub fn Confirm(
    #[prop(into)] prompt: String,
    on_yes: Callback<()>,
    on_no: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog__confirm">
            <p class="dialog__danger">{prompt}</p>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_no.run(())>"No"</button>
                <button class="btn btn--danger" on:click=move |_| on_yes.run(())>"Yes"</button>
            </div>
        </div>
    }
}
