mod auth_dialog;
mod exercise;
mod gallery;
mod header;
mod home;
mod icon;
mod lesson;
mod profile;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth_dialog::AuthDialog;
pub use exercise::ExerciseView;
pub use gallery::GalleryTab;
pub use header::AppHeader;
pub use home::HomeView;
pub use icon::Icon;
pub use lesson::LessonView;
pub use profile::{ProfileState, use_profile_provider};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use toast::{ToastStack, Toasts, use_toasts_provider};
