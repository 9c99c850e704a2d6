//! Image Picker Component
//!
//! File input with a local preview. The preview object URL is owned by an
//! `ImagePreview` handle and released on replace, remove, and unmount; the
//! selected file lands in a `FileSlot` the host form reads at submit time.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::File;

use crate::preview::ImagePreview;

/// Non-reactive slot for a locally-selected file. The handle is Copy; the
/// file itself stays on the UI thread.
#[derive(Clone, Copy)]
pub struct FileSlot {
    file: StoredValue<Option<File>, LocalStorage>,
}

impl FileSlot {
    pub fn new() -> Self {
        Self {
            file: StoredValue::new_local(None),
        }
    }

    pub fn set(&self, file: Option<File>) {
        self.file.set_value(file);
    }

    pub fn get(&self) -> Option<File> {
        self.file.get_value()
    }

    pub fn is_set(&self) -> bool {
        self.file.with_value(|file| file.is_some())
    }

    pub fn clear(&self) {
        self.file.set_value(None);
    }
}

#[component]
pub fn ImagePicker(#[prop(into)] label: String, slot: FileSlot) -> impl IntoView {
    let (preview, set_preview) = signal(None::<ImagePreview>);

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            // Replacing the signal value drops the old preview and revokes
            // its object URL
            set_preview.set(ImagePreview::from_file(&file));
            slot.set(Some(file));
        }
    };

    let remove = move |_| {
        set_preview.set(None);
        slot.clear();
    };

    view! {
        <div class="mb-2">
            <label class="block text-gray-700 font-medium mb-2">{label}</label>
            <Show when=move || preview.with(|p| p.is_some())>
                <div class="mb-2">
                    <div class="w-full p-4">
                        <img
                            src=move || {
                                preview
                                    .with(|p| p.as_ref().map(|p| p.url().to_string()))
                                    .unwrap_or_default()
                            }
                            alt="Preview"
                            class="w-[80%] mx-auto h-36 object-cover rounded-md"
                        />
                    </div>
                    <button
                        type="button"
                        on:click=remove
                        class="mt-2 bg-red-500 text-white py-1 px-3 rounded-md hover:bg-red-600"
                    >
                        "Remove"
                    </button>
                </div>
            </Show>
            <Show when=move || preview.with(|p| p.is_none())>
                <input
                    type="file"
                    accept="image/*"
                    on:change=on_change
                    class="w-full px-4 py-2 border border-gray-300 rounded-md"
                />
            </Show>
        </div>
    }
}
