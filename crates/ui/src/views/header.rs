use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Icon, ProfileState, Toasts};

#[component]
pub fn AppHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let profile = use_context::<ProfileState>();
    let toasts = use_context::<Toasts>();
    let profiles = ctx.profiles();

    let on_logout = use_callback(move |()| {
        let profiles = profiles.clone();
        spawn(async move {
            match profiles.logout().await {
                Ok(()) => profile.signed_out(),
                Err(err) => {
                    tracing::warn!(error = %err, "logout failed");
                    toasts.error("Couldn't sign out. Please try again.");
                }
            }
        });
    });

    rsx! {
        header { class: "app-header",
            Link { class: "brand", to: Route::Home {},
                Icon { name: "Palette", class: "brand-icon" }
                h1 { "ArtLearn" }
            }
            div { class: "header-profile",
                match profile.user() {
                    Some(user) => rsx! {
                        span { class: "avatar", "{user.initial()}" }
                        div { class: "header-user",
                            span { class: "header-username", "{user.username}" }
                            span { class: "header-meta", "{user.level} · {user.total_xp} XP" }
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| on_logout.call(()),
                            "Log out"
                        }
                    },
                    None if profile.is_loaded() => rsx! {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| profile.open_auth(),
                            "Sign in"
                        }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
