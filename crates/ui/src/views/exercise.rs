use std::time::Duration;

use artlearn_core::model::{Exercise, ExerciseCompletionResult, ExerciseId};
use artlearn_core::{CountdownTimer, ElapsedReport, TickOutcome};
use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::ExerciseServiceError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Icon, ProfileState, Toasts, ViewError, ViewState, view_state_from_resource};
use crate::vm::{ExerciseCardVm, TimerControl, TimerVm};

const TICK: Duration = Duration::from_secs(1);
const RETURN_HOME_DELAY: Duration = Duration::from_secs(2);

fn cancel_ticker(mut ticker: Signal<Option<Task>>) {
    if let Some(task) = ticker.write().take() {
        task.cancel();
    }
}

fn announce_completion(toasts: Toasts, result: &ExerciseCompletionResult) {
    toasts.success(
        format!("+{} XP", result.xp_earned),
        format!("Total: {} XP", result.total_xp),
    );
    for achievement in &result.new_achievements {
        toasts.success("New achievement!", achievement.name.clone());
    }
}

#[component]
pub fn ExerciseView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let exercises = ctx.exercises();
    let exercise_id = ExerciseId::new(id);

    let resource = use_resource(move || {
        let exercises = exercises.clone();
        async move {
            exercises
                .find_exercise(exercise_id)
                .await
                .map_err(ViewError::from)?
                .ok_or(ViewError::NotFound)
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page exercise",
            Link { class: "back-link", to: Route::Home {},
                Icon { name: "ArrowLeft" }
                "Back"
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading exercise..." }
                },
                ViewState::Ready(exercise) => rsx! {
                    ExerciseSession { key: "{exercise.id}", exercise }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    div { class: "card empty-state",
                        h2 { "Exercise not found" }
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
fn ExerciseSession(exercise: Exercise) -> Element {
    let ctx = use_context::<AppContext>();
    let profile = use_context::<ProfileState>();
    let toasts = use_context::<Toasts>();
    let navigator = use_navigator();
    let exercises = ctx.exercises();
    let session = ctx.session();

    let exercise_id = exercise.id;
    let total_secs = exercise.total_seconds();
    let card = ExerciseCardVm::from(&exercise);

    let mut timer = use_signal(move || CountdownTimer::new(total_secs).ok());
    let mut ticker = use_signal(|| None::<Task>);
    let mut submitting = use_signal(|| false);
    let mut completed = use_signal(|| false);

    let on_finish = use_callback(move |report: ElapsedReport| {
        if *submitting.peek() || *completed.peek() {
            return;
        }
        let exercises = exercises.clone();
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            match exercises.complete_exercise(exercise_id, report).await {
                Ok(result) => {
                    completed.set(true);
                    announce_completion(toasts, &result);
                    profile.replace(session.get().await);
                    tokio::time::sleep(RETURN_HOME_DELAY).await;
                    navigator.push(Route::Home {});
                }
                Err(ExerciseServiceError::NotSignedIn) => {
                    toasts.error(ViewError::NotSignedIn.message());
                    profile.open_auth();
                }
                Err(err) => {
                    tracing::warn!(error = %err, %exercise_id, "exercise completion failed");
                    toasts.error("Couldn't save your result. Please try again.");
                }
            }
            submitting.set(false);
        });
    });

    let on_control = use_callback(move |control: TimerControl| match control {
        TimerControl::Start | TimerControl::Resume => {
            let started = timer.write().as_mut().is_some_and(CountdownTimer::start);
            if !started {
                return;
            }
            cancel_ticker(ticker);
            let task = spawn(async move {
                loop {
                    tokio::time::sleep(TICK).await;
                    let outcome = match timer.write().as_mut() {
                        Some(timer) => timer.tick(),
                        None => break,
                    };
                    match outcome {
                        TickOutcome::Counting { .. } => {}
                        TickOutcome::Ignored => break,
                        TickOutcome::Expired(report) => {
                            ticker.set(None);
                            on_finish.call(report);
                            break;
                        }
                    }
                }
            });
            ticker.set(Some(task));
        }
        TimerControl::Pause => {
            if let Some(timer) = timer.write().as_mut() {
                timer.pause();
            }
            cancel_ticker(ticker);
        }
        TimerControl::Reset => {
            if let Some(timer) = timer.write().as_mut() {
                timer.reset();
            }
            cancel_ticker(ticker);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<super::test_harness::ViewTestHandles>() {
                handles.register_timer(super::test_harness::TimerHandles {
                    control: on_control,
                    timer,
                    ticker,
                });
            }
        }
    }

    let Some(vm) = timer().as_ref().map(TimerVm::from) else {
        return rsx! {
            div { class: "card empty-state",
                h2 { "{card.title}" }
                p { class: "muted", "This exercise has no time limit set." }
            }
        };
    };

    rsx! {
        section { class: "card exercise-head",
            Icon { name: card.icon.clone(), class: "tile round" }
            h2 { "{card.title}" }
            p { class: "muted", "{card.description}" }
            div { class: "exercise-meta",
                span { class: "points", "{card.points_label}" }
                span { class: "badge badge-outline", "{card.difficulty}" }
            }
        }
        section { class: "card timer-card",
            p { class: "timer-clock", "{vm.clock}" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {vm.percent:.0}%" }
            }
            div { class: "timer-controls",
                for control in vm.controls.iter().copied() {
                    button {
                        key: "{control.label()}",
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_control.call(control),
                        "{control.label()}"
                    }
                }
            }
            if vm.is_expired() {
                p { class: "timer-expired", "Time's up!" }
            }
            if vm.is_expired() && !completed() {
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "button",
                    disabled: submitting(),
                    onclick: move |_| {
                        let report = timer.peek().as_ref().map(CountdownTimer::report);
                        if let Some(report) = report {
                            on_finish.call(report);
                        }
                    },
                    if submitting() { "Saving..." } else { "Finish exercise" }
                }
            }
        }
    }
}
