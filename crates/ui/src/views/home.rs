use artlearn_core::model::{Lesson, LessonProgress, UserId};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{
    GalleryTab, Icon, ProfileState, ViewError, ViewState, view_state_from_resource,
};
use crate::vm::{
    ExerciseCardVm, LessonCardVm, ProgressVm, build_progress, map_achievement_badges,
    map_exercise_cards, map_lesson_cards,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HomeTab {
    Lessons,
    Exercises,
    Gallery,
}

impl HomeTab {
    const ALL: [Self; 3] = [Self::Lessons, Self::Exercises, Self::Gallery];

    fn label(self) -> &'static str {
        match self {
            Self::Lessons => "Lessons",
            Self::Exercises => "Exercises",
            Self::Gallery => "Gallery",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Lessons => "GraduationCap",
            Self::Exercises => "Dumbbell",
            Self::Gallery => "Images",
        }
    }
}

/// Home page data shared by the progress card and the lessons tab. The lesson
/// list does not depend on the profile; progress is keyed by the signed-in id.
#[derive(Clone, Copy)]
struct HomeData {
    catalogue: Resource<Result<Vec<Lesson>, ViewError>>,
    progress: Resource<Result<Vec<LessonProgress>, ViewError>>,
}

/// Id of the signed-in user. Changes to XP or level do not notify readers.
fn use_signed_in_id(profile: ProfileState) -> Memo<Option<UserId>> {
    use_memo(move || profile.user().map(|user| user.id))
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let profile = use_context::<ProfileState>();
    let mut tab = use_signal(|| HomeTab::Lessons);

    let lessons = ctx.lessons();
    let catalogue_service = ctx.lessons();
    let catalogue = use_resource(move || {
        let lessons = catalogue_service.clone();
        async move { lessons.list_lessons().await.map_err(ViewError::from) }
    });

    let user_id = use_signed_in_id(profile);
    let progress = use_resource(move || {
        let signed_in = user_id().is_some();
        let lessons = lessons.clone();
        async move {
            if !signed_in {
                return Ok(Vec::new());
            }
            lessons.list_progress().await.map_err(ViewError::from)
        }
    });
    use_context_provider(|| HomeData {
        catalogue,
        progress,
    });

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h2 { "Learn to draw, from the basics to mastery" }
                p { "Step-by-step lessons, timed exercises and a community of artists." }
            }

            ProgressCard {}

            div { class: "tabs", role: "tablist",
                for item in HomeTab::ALL {
                    button {
                        class: if tab() == item { "tab tab-active" } else { "tab" },
                        r#type: "button",
                        role: "tab",
                        onclick: move |_| tab.set(item),
                        Icon { name: item.icon() }
                        "{item.label()}"
                    }
                }
            }
            div { class: "tab-panel",
                match tab() {
                    HomeTab::Lessons => rsx! { LessonsTab {} },
                    HomeTab::Exercises => rsx! { ExercisesTab {} },
                    HomeTab::Gallery => rsx! { GalleryTab {} },
                }
            }

            TipCard {}
        }
    }
}

#[component]
fn RetryNotice(message: &'static str, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "retry-notice",
            p { "{message}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

#[component]
fn ProgressCard() -> Element {
    let ctx = use_context::<AppContext>();
    let profile = use_context::<ProfileState>();
    let data = use_context::<HomeData>();
    let achievements = ctx.achievements();

    let user_id = use_signed_in_id(profile);
    let achievement_badges = use_resource(move || {
        let signed_in = user_id().is_some();
        let achievements = achievements.clone();
        async move {
            if !signed_in {
                return Ok(Vec::new());
            }
            let list = achievements
                .list_achievements()
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_achievement_badges(&list))
        }
    });

    let catalogue = view_state_from_resource(&data.catalogue);
    let progress = view_state_from_resource(&data.progress);
    let badges_state = view_state_from_resource(&achievement_badges);
    let user = profile.user();
    let signed_in = user.is_some();

    rsx! {
        section { class: "card progress-card",
            match (catalogue, progress) {
                (ViewState::Error(err), _) => rsx! {
                    RetryNotice {
                        message: err.message(),
                        on_retry: move |_| {
                            let mut resource = data.catalogue;
                            resource.restart();
                        },
                    }
                },
                (_, ViewState::Error(err)) => rsx! {
                    RetryNotice {
                        message: err.message(),
                        on_retry: move |_| {
                            let mut resource = data.progress;
                            resource.restart();
                        },
                    }
                },
                (ViewState::Ready(list), ViewState::Ready(entries)) => rsx! {
                    ProgressSummary { vm: build_progress(user.as_ref(), list.len(), &entries) }
                },
                _ => rsx! {
                    p { class: "muted", "Loading progress..." }
                },
            }

            if !signed_in {
                p { class: "muted", "Sign in to unlock achievements." }
            } else {
                match badges_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "muted", "Loading achievements..." }
                    },
                    ViewState::Ready(badges) if badges.is_empty() => rsx! {
                        p { class: "muted", "No achievements yet." }
                    },
                    ViewState::Ready(badges) => rsx! {
                        ul { class: "achievements",
                            for badge in badges {
                                li {
                                    key: "{badge.id}",
                                    class: if badge.unlocked { "achievement unlocked" } else { "achievement locked" },
                                    title: badge.description.clone().unwrap_or_default(),
                                    Icon { name: badge.icon.clone() }
                                    span { "{badge.name}" }
                                }
                            }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        RetryNotice {
                            message: err.message(),
                            on_retry: move |_| {
                                let mut resource = achievement_badges;
                                resource.restart();
                            },
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ProgressSummary(vm: ProgressVm) -> Element {
    rsx! {
        div { class: "progress-head",
            div {
                h3 { "Your progress" }
                p { class: "muted", "{vm.summary()}" }
            }
            span { class: "progress-percent", "{vm.percent}%" }
        }
        div { class: "progress-bar",
            div { class: "progress-fill", style: "width: {vm.percent}%" }
        }
    }
}

#[component]
fn LessonsTab() -> Element {
    let data = use_context::<HomeData>();
    let catalogue = view_state_from_resource(&data.catalogue);
    // Progress failures are reported by the progress card.
    let progress = match view_state_from_resource(&data.progress) {
        ViewState::Ready(entries) => entries,
        _ => Vec::new(),
    };

    rsx! {
        match catalogue {
            ViewState::Idle | ViewState::Loading => rsx! {
                p { class: "muted", "Loading lessons..." }
            },
            ViewState::Ready(list) if list.is_empty() => rsx! {
                p { class: "muted", "No lessons yet." }
            },
            ViewState::Ready(list) => rsx! {
                div { class: "grid grid-2",
                    for card in map_lesson_cards(&list, &progress) {
                        LessonCard { key: "{card.id}", card }
                    }
                }
            },
            ViewState::Error(err) => rsx! {
                RetryNotice {
                    message: err.message(),
                    on_retry: move |_| {
                        let mut resource = data.catalogue;
                        resource.restart();
                    },
                }
            },
        }
    }
}

#[component]
fn LessonCard(card: LessonCardVm) -> Element {
    rsx! {
        article { class: "card lesson-card",
            div { class: "card-top",
                Icon { name: card.icon.clone(), class: "tile" }
                if card.completed {
                    span { class: "badge badge-success", "Completed" }
                }
            }
            h3 { "{card.title}" }
            p { class: "muted", "{card.description}" }
            div { class: "card-foot",
                span { class: "meta",
                    Icon { name: "Clock" }
                    "{card.duration_label}"
                }
                span { class: "badge badge-outline", "{card.difficulty}" }
                Link {
                    class: if card.completed { "btn btn-outline" } else { "btn btn-primary" },
                    to: Route::Lesson { id: card.id.value() },
                    "{card.cta()}"
                }
            }
        }
    }
}

#[component]
fn ExercisesTab() -> Element {
    let ctx = use_context::<AppContext>();
    let exercises = ctx.exercises();

    let resource = use_resource(move || {
        let exercises = exercises.clone();
        async move {
            let list = exercises.list_exercises().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_exercise_cards(&list))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        match state {
            ViewState::Idle | ViewState::Loading => rsx! {
                p { class: "muted", "Loading exercises..." }
            },
            ViewState::Ready(cards) => rsx! {
                if cards.is_empty() {
                    p { class: "muted", "No exercises yet." }
                } else {
                    div { class: "grid grid-3",
                        for card in cards {
                            ExerciseCard { key: "{card.id}", card }
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
fn ExerciseCard(card: ExerciseCardVm) -> Element {
    rsx! {
        article { class: "card exercise-card",
            Icon { name: card.icon.clone(), class: "tile round" }
            h3 { "{card.title}" }
            p { class: "points", "{card.points_label}" }
            p { class: "meta",
                Icon { name: "Timer" }
                "{card.time_label}"
            }
            Link {
                class: "btn btn-primary btn-block",
                to: Route::Exercise { id: card.id.value() },
                "Start exercise"
            }
        }
    }
}

#[component]
fn TipCard() -> Element {
    let ctx = use_context::<AppContext>();
    let tips = ctx.tips();
    let first = tips.first();
    let mut current = use_signal(move || first);

    let text = tips.tip(current()).unwrap_or_default().to_string();
    let can_rotate = tips.len() > 1;

    rsx! {
        section { class: "card tip-card",
            Icon { name: "Lightbulb" }
            h3 { "Tip of the day" }
            p { class: "muted", "{text}" }
            button {
                class: "btn btn-outline btn-block",
                r#type: "button",
                disabled: !can_rotate,
                onclick: move |_| {
                    let next = tips.another(*current.peek());
                    current.set(next);
                },
                "Another tip"
            }
        }
    }
}
