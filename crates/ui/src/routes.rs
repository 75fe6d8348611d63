use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    AppHeader, AuthDialog, ExerciseView, HomeView, LessonView, ToastStack, use_profile_provider,
    use_toasts_provider,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lesson/:id", LessonView)] Lesson { id: u64 },
        #[route("/exercise/:id", ExerciseView)] Exercise { id: u64 },
}

/// Shell shared by every page. Owns the profile and notification state so both
/// survive navigation.
#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    use_toasts_provider();
    use_profile_provider(ctx.session());

    rsx! {
        div { class: "app",
            AppHeader {}
            main { class: "content",
                Outlet::<Route> {}
            }
            AuthDialog {}
            ToastStack {}
        }
    }
}
