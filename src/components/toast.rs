//! Toast Host Component
//!
//! The single root-level renderer of the notification queue.

use leptos::prelude::*;

use crate::notify::{use_notifier, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2">
            <For each=move || notifier.snapshot() key=|toast| toast.id let:toast>
                <div
                    class=match toast.kind {
                        ToastKind::Success => {
                            "bg-green-600 text-white py-2 px-4 rounded-md shadow-lg cursor-pointer"
                        }
                        ToastKind::Error => {
                            "bg-red-600 text-white py-2 px-4 rounded-md shadow-lg cursor-pointer"
                        }
                    }
                    on:click=move |_| notifier.dismiss(toast.id)
                >
                    {toast.text.clone()}
                </div>
            </For>
        </div>
    }
}
