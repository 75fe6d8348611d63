use artlearn_core::model::ProfileDraft;
use dioxus::prelude::*;
use services::ProfileServiceError;

use crate::context::AppContext;
use crate::views::{ProfileState, Toasts};

const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
const CREATE_FAILED: &str = "Couldn't create your profile. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
}

/// Sign-up dialog. Profile creation is the only form of sign-in.
#[component]
pub fn AuthDialog() -> Element {
    let ctx = use_context::<AppContext>();
    let profile = use_context::<ProfileState>();
    let toasts = use_context::<Toasts>();
    let profiles = ctx.profiles();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let on_submit = use_callback(move |()| {
        if submit_state() == SubmitState::Submitting {
            return;
        }
        let draft = ProfileDraft::new(username(), email());
        let profiles = profiles.clone();
        spawn(async move {
            submit_state.set(SubmitState::Submitting);
            match profiles.create_profile(draft).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "profile created");
                    toasts.success("Welcome to ArtLearn!", "Your profile has been created.");
                    username.set(String::new());
                    email.set(String::new());
                    profile.signed_in(user);
                }
                Err(ProfileServiceError::Validation(_)) => toasts.error(FILL_ALL_FIELDS),
                Err(err) => {
                    tracing::warn!(error = %err, "profile creation failed");
                    toasts.error(CREATE_FAILED);
                }
            }
            submit_state.set(SubmitState::Idle);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<super::test_harness::ViewTestHandles>() {
                handles.register_auth(super::test_harness::AuthHandles {
                    username,
                    email,
                    submit: on_submit,
                });
            }
        }
    }

    if !profile.auth_open() {
        return rsx! {};
    }

    let busy = submit_state() == SubmitState::Submitting;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| profile.close_auth(),
            div {
                class: "modal auth-dialog",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "modal-title", "Welcome to ArtLearn!" }
                p { class: "modal-body",
                    "Create a profile to track your progress and share your work."
                }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        value: "{username}",
                        placeholder: "Your name",
                        disabled: busy,
                        oninput: move |evt| username.set(evt.value()),
                    }
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email}",
                        placeholder: "your@email.com",
                        disabled: busy,
                        oninput: move |evt| email.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Creating..." } else { "Create profile" }
                    }
                }
            }
        }
    }
}
