use std::time::Duration;

use artlearn_core::ReadingProgress;
use artlearn_core::model::{LessonCompletionResult, LessonId};
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::LessonServiceError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Icon, ProfileState, Toasts, ViewError, ViewState, view_state_from_resource};
use crate::vm::LessonDetailVm;

const RETURN_HOME_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CompleteState {
    Idle,
    Saving,
    Done,
}

fn announce_completion(toasts: Toasts, result: &LessonCompletionResult) {
    toasts.success(
        "Lesson completed!",
        format!("You earned {} XP", result.xp_earned),
    );
    for achievement in &result.new_achievements {
        toasts.success("New achievement!", achievement.name.clone());
    }
}

#[component]
pub fn LessonView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();
    let lesson_id = LessonId::new(id);

    let resource = use_resource(move || {
        let lessons = lessons.clone();
        async move {
            let lesson = lessons.get_lesson(lesson_id).await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(LessonDetailVm::from(&lesson))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page lesson",
            Link { class: "back-link", to: Route::Home {},
                Icon { name: "ArrowLeft" }
                "Back to lessons"
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading lesson..." }
                },
                ViewState::Ready(vm) => rsx! {
                    LessonBody { vm }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    div { class: "card empty-state",
                        h2 { "Lesson not found" }
                        Link { class: "btn btn-primary", to: Route::Home {}, "Back home" }
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
}

#[component]
fn LessonBody(vm: LessonDetailVm) -> Element {
    rsx! {
        header { class: "card lesson-head",
            Icon { name: vm.icon.clone(), class: "tile" }
            div {
                h2 { "{vm.title}" }
                p { class: "muted", "{vm.description}" }
                div { class: "lesson-meta",
                    span { class: "badge badge-outline", "{vm.difficulty}" }
                    span { class: "meta",
                        Icon { name: "Clock" }
                        "{vm.duration_label}"
                    }
                }
            }
        }
        ReadingMeter { duration_minutes: vm.duration_minutes }
        section { class: "card lesson-content",
            ol { class: "steps",
                for (index, paragraph) in vm.paragraphs.iter().enumerate() {
                    li { key: "{index}", class: "step",
                        span { class: "step-number", "{index + 1}" }
                        p { "{paragraph}" }
                    }
                }
            }
        }
        CompleteLessonButton { lesson_id: vm.id }
    }
}

/// Reading meter driven by a task owned by this component.
#[component]
fn ReadingMeter(duration_minutes: u32) -> Element {
    let mut reading = use_signal(ReadingProgress::new);

    use_future(move || async move {
        let interval = ReadingProgress::step_interval(duration_minutes);
        loop {
            tokio::time::sleep(interval).await;
            if !reading.write().step() {
                break;
            }
        }
    });

    let percent = reading().percent();

    rsx! {
        div { class: "card reading-progress",
            div { class: "progress-head",
                span { "Reading progress" }
                span { class: "progress-percent", "{percent}%" }
            }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
        }
    }
}

#[component]
fn CompleteLessonButton(lesson_id: LessonId) -> Element {
    let ctx = use_context::<AppContext>();
    let profile = use_context::<ProfileState>();
    let toasts = use_context::<Toasts>();
    let navigator = use_navigator();
    let lessons = ctx.lessons();
    let profiles = ctx.profiles();
    let mut complete_state = use_signal(|| CompleteState::Idle);

    let on_complete = use_callback(move |()| {
        if complete_state() != CompleteState::Idle {
            return;
        }
        let lessons = lessons.clone();
        let profiles = profiles.clone();
        spawn(async move {
            complete_state.set(CompleteState::Saving);
            match lessons.complete_lesson(lesson_id, None).await {
                Ok(result) => {
                    announce_completion(toasts, &result);
                    match profiles.refresh().await {
                        Ok(user) => profile.replace(user),
                        Err(err) => tracing::warn!(error = %err, "profile refresh after lesson failed"),
                    }
                    complete_state.set(CompleteState::Done);
                    tokio::time::sleep(RETURN_HOME_DELAY).await;
                    navigator.push(Route::Home {});
                }
                Err(LessonServiceError::NotSignedIn) => {
                    toasts.error(ViewError::NotSignedIn.message());
                    profile.open_auth();
                    complete_state.set(CompleteState::Idle);
                }
                Err(err) => {
                    tracing::warn!(error = %err, %lesson_id, "lesson completion failed");
                    toasts.error("Couldn't save your progress. Please try again.");
                    complete_state.set(CompleteState::Idle);
                }
            }
        });
    });

    let label = match complete_state() {
        CompleteState::Idle => "Complete lesson",
        CompleteState::Saving => "Saving...",
        CompleteState::Done => "Completed",
    };

    rsx! {
        button {
            class: "btn btn-primary btn-block",
            r#type: "button",
            disabled: complete_state() != CompleteState::Idle,
            onclick: move |_| on_complete.call(()),
            Icon { name: "CheckCircle" }
            "{label}"
        }
    }
}
