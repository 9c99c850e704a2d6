//! Shared UI Components

mod assign_modal;
mod image_picker;
mod sidebar;
mod toast;

pub use assign_modal::AssignModal;
pub use image_picker::{FileSlot, ImagePicker};
pub use sidebar::Sidebar;
pub use toast::ToastHost;
