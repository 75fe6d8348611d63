use artlearn_core::model::{UploadDraft, UploadError};
use dioxus::prelude::*;
use services::GalleryServiceError;

use crate::context::AppContext;
use crate::views::{Icon, ProfileState, Toasts, ViewError, ViewState, view_state_from_resource};
use crate::vm::{GalleryCardVm, map_gallery_cards};

const UPLOAD_FAILED: &str = "Couldn't upload your work. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UploadState {
    Idle,
    Uploading,
}

fn upload_error_message(err: &UploadError) -> &'static str {
    match err {
        UploadError::MissingTitle => "Give your work a title.",
        UploadError::MissingImage => "Choose an image file to upload.",
        _ => UPLOAD_FAILED,
    }
}

/// Image picked in the upload form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PickedImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[component]
pub fn GalleryTab() -> Element {
    let ctx = use_context::<AppContext>();
    let gallery = ctx.gallery();

    let resource = use_resource(move || {
        let gallery = gallery.clone();
        async move {
            let items = gallery.list_gallery().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_gallery_cards(&items))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        UploadForm {
            on_uploaded: move |_| {
                let mut resource = resource;
                resource.restart();
            },
        }
        match state {
            ViewState::Idle | ViewState::Loading => rsx! {
                p { class: "muted", "Loading gallery..." }
            },
            ViewState::Ready(cards) => rsx! {
                if cards.is_empty() {
                    p { class: "muted", "No works shared yet. Be the first!" }
                } else {
                    div { class: "grid grid-4",
                        for card in cards {
                            GalleryCard { key: "{card.id}", card }
                        }
                    }
                }
            },
            ViewState::Error(err) => rsx! {
                p { "{err.message()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut resource = resource;
                        resource.restart();
                    },
                    "Retry"
                }
            },
        }
    }
}

#[component]
fn GalleryCard(card: GalleryCardVm) -> Element {
    rsx! {
        article { class: "card gallery-card",
            div { class: "gallery-image",
                if let Some(url) = card.image_url.clone() {
                    img { src: "{url}", alt: "{card.title}" }
                } else {
                    Icon { name: "Image", class: "placeholder" }
                }
            }
            div { class: "gallery-body",
                h4 { "{card.title}" }
                if let Some(description) = card.description.clone() {
                    p { class: "muted", "{description}" }
                }
                div { class: "gallery-author",
                    span { class: "avatar small", "{card.author_initial}" }
                    div {
                        p { class: "author-name", "{card.author}" }
                        span { class: "badge badge-secondary", "{card.level}" }
                    }
                }
                div { class: "gallery-stats",
                    span { Icon { name: "Heart" } "{card.likes}" }
                    span { Icon { name: "MessageCircle" } "{card.comments}" }
                    if let Some(posted) = card.posted.clone() {
                        span { class: "muted", "{posted}" }
                    }
                }
            }
        }
    }
}

#[component]
fn UploadForm(on_uploaded: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let profile = use_context::<ProfileState>();
    let toasts = use_context::<Toasts>();
    let gallery = ctx.gallery();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(|| None::<PickedImage>);
    let mut upload_state = use_signal(|| UploadState::Idle);

    let on_submit = use_callback(move |()| {
        if upload_state() == UploadState::Uploading {
            return;
        }
        let gallery = gallery.clone();
        // No file picked leaves the image empty so validation reports it.
        let draft = UploadDraft {
            title: title(),
            description: description(),
            image: image().map(|picked| picked.bytes).unwrap_or_default(),
        };
        spawn(async move {
            upload_state.set(UploadState::Uploading);
            match gallery.upload(draft).await {
                Ok(_) => {
                    toasts.success("Work published!", "Your drawing is now in the gallery.");
                    title.set(String::new());
                    description.set(String::new());
                    image.set(None);
                    on_uploaded.call(());
                }
                Err(GalleryServiceError::Validation(err)) => {
                    toasts.error(upload_error_message(&err));
                }
                Err(GalleryServiceError::NotSignedIn) => {
                    toasts.error(ViewError::NotSignedIn.message());
                    profile.open_auth();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "gallery upload failed");
                    toasts.error(UPLOAD_FAILED);
                }
            }
            upload_state.set(UploadState::Idle);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<super::test_harness::ViewTestHandles>() {
                handles.register_upload(super::test_harness::UploadHandles {
                    title,
                    image,
                    submit: on_submit,
                });
            }
        }
    }

    if !profile.is_signed_in() {
        return rsx! {
            div { class: "card upload-card",
                p { class: "muted", "Share your drawings with the community." }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| profile.open_auth(),
                    "Sign in to share your work"
                }
            }
        };
    }

    let busy = upload_state() == UploadState::Uploading;

    rsx! {
        form {
            class: "card upload-card",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            h3 { "Share your work" }
            label { r#for: "upload-title", "Title" }
            input {
                id: "upload-title",
                value: "{title}",
                placeholder: "Sunset study",
                disabled: busy,
                oninput: move |evt| title.set(evt.value()),
            }
            label { r#for: "upload-description", "Description" }
            textarea {
                id: "upload-description",
                value: "{description}",
                disabled: busy,
                oninput: move |evt| description.set(evt.value()),
            }
            label { r#for: "upload-file", "Image file" }
            input {
                id: "upload-file",
                r#type: "file",
                accept: "image/*",
                disabled: busy,
                onchange: move |evt| {
                    let Some(file) = evt.files().into_iter().next() else {
                        image.set(None);
                        return;
                    };
                    spawn(async move {
                        match file.read_bytes().await {
                            Ok(bytes) => image.set(Some(PickedImage {
                                name: file.name(),
                                bytes: bytes.to_vec(),
                            })),
                            Err(err) => {
                                tracing::warn!(error = ?err, "image file could not be read");
                                toasts.error("Couldn't read the selected file.");
                            }
                        }
                    });
                },
            }
            if let Some(picked) = image() {
                p { class: "muted picked-file", "{picked.name}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy,
                if busy { "Uploading..." } else { "Publish" }
            }
        }
    }
}
