use std::sync::Arc;
use std::time::Duration;
use dioxus::prelude::{ReadableExt, WritableExt};

use artlearn_core::model::{Exercise, ExerciseId, LessonId};
use artlearn_core::TimerState;
use async_trait::async_trait;
use services::{GatewayOp, SESSION_STORAGE_KEY};
use storage::repository::{KeyValueRepository, Storage, StorageError};

use super::gallery::PickedImage;
use super::test_harness::{
    ViewHarness, ViewKind, seeded_gateway, setup_view_harness, setup_view_harness_with,
};
use crate::vm::TimerControl;

struct UnavailableRepo;

#[async_trait]
impl KeyValueRepository for UnavailableRepo {
    async fn get_value(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn put_value(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn delete_value(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_without_session_opens_auth_dialog() {
    let mut harness = setup_view_harness(ViewKind::Home, false).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("auth-dialog"), "missing auth dialog in {html}");
    assert!(html.contains("Create profile"), "missing submit in {html}");
    assert!(html.contains("Sign in to unlock achievements."), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_with_session_shows_profile() {
    let mut harness = setup_view_harness(ViewKind::Home, true).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Ana"), "missing username in {html}");
    assert!(html.contains("Log out"), "missing logout in {html}");
    assert!(!html.contains("auth-dialog"), "unexpected auth dialog in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_lists_lessons_and_progress() {
    let mut harness = setup_view_harness(ViewKind::Home, true).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Drawing basics"), "missing lesson in {html}");
    assert!(html.contains("15 min"), "missing duration in {html}");
    assert!(html.contains("0 of 1 lessons completed"), "missing summary in {html}");
    assert!(html.contains("First steps"), "missing achievement in {html}");
    assert!(html.contains("Tip of the day"), "missing tip card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_lessons_offer_repeat() {
    let mut harness = setup_view_harness(ViewKind::Home, true).await;
    harness
        .services
        .lessons()
        .complete_lesson(LessonId::new(1), None)
        .await
        .expect("complete lesson");
    harness
        .services
        .profiles()
        .refresh()
        .await
        .expect("refresh profile");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Completed"), "missing badge in {html}");
    assert!(html.contains("Repeat"), "missing repeat cta in {html}");
    assert!(html.contains("1 of 1 lessons completed"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_renders_numbered_paragraphs() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1), true).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Drawing basics"), "missing title in {html}");
    assert!(html.contains("Hold the pencil loosely."), "missing paragraph in {html}");
    assert!(html.contains("Build forms from simple shapes."), "{html}");
    assert!(html.contains("Reading progress"), "missing meter in {html}");
    assert!(html.contains("Complete lesson"), "missing action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_lesson_shows_not_found() {
    let mut harness = setup_view_harness(ViewKind::Lesson(99), true).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exercise_view_shows_idle_timer() {
    let mut harness = setup_view_harness(ViewKind::Exercise(1), true).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Quick portrait"), "missing title in {html}");
    assert!(html.contains("05:00"), "missing clock in {html}");
    assert!(html.contains("Start"), "missing start in {html}");
    assert!(!html.contains("Finish exercise"), "finish offered before expiry in {html}");
    assert!(!html.contains("Time&#39;s up!") && !html.contains("Time's up!"));
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_exercise_shows_not_found() {
    let mut harness = setup_view_harness(ViewKind::Exercise(42), true).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Exercise not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_list_failure_offers_retry() {
    let gateway = seeded_gateway();
    gateway.fail_on(GatewayOp::ListLessons);
    let mut harness =
        setup_view_harness_with(ViewKind::Home, true, gateway, Storage::in_memory()).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong. Please try again."), "{html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unreadable_session_counts_as_signed_out() {
    let storage = Storage {
        local: Arc::new(UnavailableRepo),
    };
    let mut harness =
        setup_view_harness_with(ViewKind::Home, false, seeded_gateway(), storage).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("auth-dialog"), "missing auth dialog in {html}");
    assert!(!html.contains("Log out"), "unexpected session in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn malformed_session_counts_as_signed_out() {
    let storage = Storage::in_memory();
    storage
        .local
        .put_value(SESSION_STORAGE_KEY, "{not json")
        .await
        .expect("seed slot");
    let mut harness =
        setup_view_harness_with(ViewKind::Home, false, seeded_gateway(), storage).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("auth-dialog"), "missing auth dialog in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_fetches_lesson_list_once_per_mount() {
    let mut harness = setup_view_harness(ViewKind::Home, true).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Drawing basics"), "missing lesson in {html}");
    assert!(html.contains("0 of 1 lessons completed"), "{html}");
    assert_eq!(harness.gateway.call_count(GatewayOp::ListLessons), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn achievement_failure_offers_retry() {
    let gateway = seeded_gateway();
    gateway.fail_on(GatewayOp::ListAchievements);
    let mut harness =
        setup_view_harness_with(ViewKind::Home, true, gateway, Storage::in_memory()).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Drawing basics"), "lessons should still load in {html}");
    assert!(html.contains("Something went wrong. Please try again."), "{html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!html.contains("No achievements yet."), "failure shown as empty in {html}");
    assert!(!html.contains("First steps"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_failure_is_visible() {
    let gateway = seeded_gateway();
    gateway.fail_on(GatewayOp::ListProgress);
    let mut harness =
        setup_view_harness_with(ViewKind::Home, true, gateway, Storage::in_memory()).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Drawing basics"), "lessons should still load in {html}");
    assert!(html.contains("Something went wrong. Please try again."), "{html}");
    assert!(!html.contains("0 of 1 lessons completed"), "failure shown as zero in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_submit_closes_dialog() {
    let mut harness = setup_view_harness(ViewKind::Home, false).await;
    harness.settle().await;
    assert!(harness.render().contains("auth-dialog"));

    let auth = harness.handles.auth();
    let mut username = auth.username;
    let mut email = auth.email;
    username.set("Ana".to_string());
    email.set("ana@x.com".to_string());
    auth.submit.call(());
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(!html.contains("auth-dialog"), "dialog still open in {html}");
    assert!(html.contains("Log out"), "missing session in {html}");
    let user = harness.services.session().get().await.expect("stored session");
    assert_eq!(user.username, "Ana");
    assert_eq!(user.email, "ana@x.com");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_upload_keeps_gallery_unchanged() {
    let gateway = seeded_gateway();
    gateway.fail_on(GatewayOp::UploadGalleryItem);
    let mut harness =
        setup_view_harness_with(ViewKind::Gallery, true, gateway, Storage::in_memory()).await;
    harness.settle().await;
    let before = harness.render();
    assert!(before.contains("Portrait study"), "missing seeded work in {before}");

    let upload = harness.handles.upload();
    let mut title = upload.title;
    let mut image = upload.image;
    title.set("Sunset".to_string());
    image.set(Some(PickedImage {
        name: "sunset.png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }));
    upload.submit.call(());
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("upload your work. Please try again."), "missing toast in {html}");
    assert!(html.contains("Portrait study"), "grid lost items in {html}");
    assert!(!html.contains("<h4>Sunset</h4>"), "failed upload listed in {html}");
    assert_eq!(harness.gateway.call_count(GatewayOp::ListGallery), 1);

    harness.gateway.recover(GatewayOp::UploadGalleryItem);
    upload.submit.call(());
    for _ in 0..4 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("<h4>Sunset</h4>"), "missing published work in {html}");
    assert_eq!(harness.gateway.call_count(GatewayOp::ListGallery), 2);
}

async fn one_minute_exercise_harness() -> ViewHarness {
    let gateway = seeded_gateway();
    gateway.seed_exercises(vec![Exercise {
        id: ExerciseId::new(2),
        title: "Gesture sprint".into(),
        description: "Loose gestures against the clock".into(),
        time_minutes: 1,
        points: 20,
        icon: "Zap".into(),
        difficulty: "easy".into(),
    }]);
    let mut harness =
        setup_view_harness_with(ViewKind::Exercise(2), true, gateway, Storage::in_memory()).await;
    harness.settle().await;
    harness
}

async fn run_for(harness: &mut ViewHarness, seconds: u64) {
    for _ in 0..seconds {
        tokio::time::advance(Duration::from_secs(1)).await;
        harness.drive_async().await;
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn pause_stops_the_ticker() {
    let mut harness = one_minute_exercise_harness().await;
    let handles = harness.handles.timer();

    handles.control.call(TimerControl::Start);
    run_for(&mut harness, 5).await;
    assert!(handles.ticker.peek().is_some());
    let remaining = handles.timer.peek().as_ref().map(|timer| timer.remaining_secs());
    assert!(remaining.is_some_and(|secs| secs < 60));

    handles.control.call(TimerControl::Pause);
    harness.drive_async().await;
    assert!(handles.ticker.peek().is_none());
    let paused_at = handles.timer.peek().as_ref().map(|timer| timer.remaining_secs());

    run_for(&mut harness, 10).await;
    let after = handles.timer.peek().as_ref().map(|timer| timer.remaining_secs());
    assert_eq!(after, paused_at);
    assert!(harness.render().contains("Resume"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn reset_stops_the_ticker() {
    let mut harness = one_minute_exercise_harness().await;
    let handles = harness.handles.timer();

    handles.control.call(TimerControl::Start);
    run_for(&mut harness, 3).await;
    assert!(harness.render().contains("Reset"), "running timer offers reset");

    handles.control.call(TimerControl::Reset);
    harness.drive_async().await;
    assert!(handles.ticker.peek().is_none());

    run_for(&mut harness, 10).await;
    let timer = *handles.timer.peek();
    let timer = timer.expect("timer");
    assert_eq!(timer.state(), TimerState::Idle);
    assert_eq!(timer.remaining_secs(), 60);
    assert!(harness.render().contains("01:00"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn expiry_completes_the_exercise_once() {
    let mut harness = one_minute_exercise_harness().await;
    let handles = harness.handles.timer();

    handles.control.call(TimerControl::Start);
    for _ in 0..120 {
        if harness.gateway.call_count(GatewayOp::CompleteExercise) > 0 {
            break;
        }
        run_for(&mut harness, 1).await;
    }
    assert_eq!(harness.gateway.call_count(GatewayOp::CompleteExercise), 1);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Time&#39;s up!") || html.contains("Time's up!"), "{html}");
    assert!(!html.contains("Finish exercise"), "manual finish after completion in {html}");

    run_for(&mut harness, 10).await;
    assert_eq!(harness.gateway.call_count(GatewayOp::CompleteExercise), 1);
}
