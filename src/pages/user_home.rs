//! User Home Page
//!
//! The attendee's own task list with proof submission. A confirmed upload
//! flips the task's status to submitted in place.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::FormData;

use crate::api;
use crate::components::FileSlot;
use crate::models;
use crate::notify::use_notifier;
use crate::remote::{use_remote, RemoteState};
use crate::session::use_session;
use crate::validate;

#[component]
pub fn UserHomePage() -> impl IntoView {
    let notifier = use_notifier();
    let session = use_session();
    let navigate = use_navigate();

    let tasks = use_remote(|| async { api::user::my_tasks().await });

    // Which task the submission form is open for, if any
    let (submitting_for, set_submitting_for) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);
    let proof = FileSlot::new();

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::user::logout().await {
                    Ok(_) => {
                        session.set_user(None);
                        notifier.success("Logged out successfully.");
                        navigate("/user-login", Default::default());
                    }
                    Err(err) => notifier.error(err.user_message("Logout failed.")),
                }
            });
        }
    };

    let delete_account = {
        let navigate = navigate.clone();
        move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::user::delete_account().await {
                    Ok(_) => {
                        session.set_user(None);
                        notifier.success("Account deleted.");
                        navigate("/user-login", Default::default());
                    }
                    Err(err) => notifier.error(err.user_message("Failed to delete account.")),
                }
            });
        }
    };

    let goto_profile = move |_| navigate("/update-profile", Default::default());

    let on_proof_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .unwrap()
            .dyn_ref::<web_sys::HtmlInputElement>()
            .unwrap()
            .clone();
        proof.set(input.files().and_then(|files| files.get(0)));
    };

    let submit_proof = move |task_id: String| {
        if let Err(msg) = validate::proof(proof.is_set()) {
            notifier.error(msg);
            return;
        }
        let Some(file) = proof.get() else { return };
        set_uploading.set(true);
        spawn_local(async move {
            let form = FormData::new().unwrap();
            form.append_with_str("taskid", &task_id).unwrap();
            form.append_with_blob("proof", &file).unwrap();

            match api::user::submit_proof(form).await {
                Ok(_) => {
                    notifier.success("Work submitted successfully!");
                    tasks.patch(|list| models::mark_submitted(list, &task_id));
                    proof.clear();
                    set_submitting_for.try_set(None);
                }
                Err(err) => notifier.error(err.user_message("Failed to submit work.")),
            }
            set_uploading.try_set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gray-100">
            <nav class="bg-white shadow px-6 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold text-gray-800">
                    {move || match session.user() {
                        Some(profile) => format!("Welcome, {}", profile.full_name),
                        None => "My Tasks".to_string(),
                    }}
                </h1>
                <div class="flex space-x-4">
                    <button
                        on:click=goto_profile
                        class="bg-indigo-600 text-white py-2 px-4 rounded hover:bg-indigo-700"
                    >
                        "Update Profile"
                    </button>
                    <button
                        on:click=delete_account
                        class="bg-red-600 text-white py-2 px-4 rounded hover:bg-red-700"
                    >
                        "Delete Account"
                    </button>
                    <button
                        on:click=logout
                        class="bg-gray-600 text-white py-2 px-4 rounded hover:bg-gray-700"
                    >
                        "Logout"
                    </button>
                </div>
            </nav>

            <div class="p-6">
                {move || tasks.with(|state| match state {
                    RemoteState::Loading => view! {
                        <div class="text-center text-xl font-bold text-gray-500">"Loading..."</div>
                    }
                    .into_any(),
                    RemoteState::Errored(msg) => view! {
                        <div class="text-center text-xl font-bold text-red-500">{msg.clone()}</div>
                    }
                    .into_any(),
                    RemoteState::Ready(list) if list.is_empty() => view! {
                        <p class="text-center text-gray-600">"No tasks assigned to you yet."</p>
                    }
                    .into_any(),
                    RemoteState::Ready(list) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {list.iter().map(|task| {
                                let task_id = task.task_id.clone();
                                let open_id = task.task_id.clone();
                                let submitted = task.is_submitted();
                                view! {
                                    <div class="bg-white p-6 rounded-lg shadow">
                                        <h2 class="text-xl font-semibold text-gray-800">
                                            {task.title.clone()}
                                        </h2>
                                        <p class="text-gray-600 mt-2">{task.description.clone()}</p>
                                        <p class="text-sm text-gray-500 mt-2">
                                            "Status: " {task.status.clone()}
                                        </p>

                                        {if submitted {
                                            view! {
                                                <p class="mt-4 text-green-600 font-semibold">
                                                    "Work submitted"
                                                </p>
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <button
                                                    on:click=move |_| {
                                                        set_submitting_for.set(Some(open_id.clone()))
                                                    }
                                                    class="mt-4 bg-indigo-600 text-white py-2 px-4 rounded hover:bg-indigo-700"
                                                >
                                                    "Submit Work"
                                                </button>
                                            }
                                            .into_any()
                                        }}

                                        <Show when={
                                            let task_id = task_id.clone();
                                            move || {
                                                submitting_for.get().as_deref()
                                                    == Some(task_id.as_str())
                                            }
                                        }>
                                            {
                                                let submit_id = task_id.clone();
                                                view! {
                                                    <div class="mt-4 border-t pt-4">
                                                        <input
                                                            type="file"
                                                            on:change=on_proof_change
                                                            class="block w-full text-sm text-gray-600"
                                                        />
                                                        <div class="mt-2 flex space-x-2">
                                                            <button
                                                                on:click=move |_| {
                                                                    submit_proof(submit_id.clone())
                                                                }
                                                                disabled=move || uploading.get()
                                                                class="bg-green-600 text-white py-1 px-3 rounded hover:bg-green-700 disabled:opacity-50"
                                                            >
                                                                {move || if uploading.get() {
                                                                    "Uploading..."
                                                                } else {
                                                                    "Upload"
                                                                }}
                                                            </button>
                                                            <button
                                                                on:click=move |_| {
                                                                    proof.clear();
                                                                    set_submitting_for.set(None);
                                                                }
                                                                class="bg-gray-500 text-white py-1 px-3 rounded hover:bg-gray-600"
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            }
                                        </Show>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                    .into_any(),
                })}
            </div>
        </div>
    }
}
