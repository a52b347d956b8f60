//! Toast notification tray.
//!
//! Renders the toasts from [`ToastState`] in a fixed top-right stack.
//! Auto-dismiss is handled by the state itself; this component only renders
//! and offers manual dismissal.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ToastKind;

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[component]
pub fn ToastTray() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = ctx.toasts;

    view! {
        <div class=css::tray>
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => format!("{} {}", css::toast, css::success),
                        ToastKind::Error => format!("{} {}", css::toast, css::error),
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <span class=css::message>{toast.message.clone()}</span>
                            <button
                                class=css::dismiss
                                on:click=move |_| toasts.dismiss(id)
                                aria-label="Dismiss notification"
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
