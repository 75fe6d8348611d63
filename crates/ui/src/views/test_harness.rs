use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use artlearn_core::model::{
    Achievement, AchievementId, Exercise, ExerciseId, GalleryItem, GalleryItemId, Lesson,
    LessonId, ProfileDraft,
};
use artlearn_core::CountdownTimer;
use dioxus::core::{NoOpMutations, Task};
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, InMemoryGateway};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::gallery::PickedImage;
use crate::views::{
    AppHeader, AuthDialog, ExerciseView, GalleryTab, HomeView, LessonView, ToastStack,
    use_profile_provider, use_toasts_provider,
};
use crate::vm::TimerControl;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lesson(u64),
    Exercise(u64),
    Gallery,
}

#[derive(Clone, Copy)]
pub struct AuthHandles {
    pub username: Signal<String>,
    pub email: Signal<String>,
    pub submit: Callback<()>,
}

#[derive(Clone, Copy)]
pub struct UploadHandles {
    pub title: Signal<String>,
    pub image: Signal<Option<PickedImage>>,
    pub submit: Callback<()>,
}

#[derive(Clone, Copy)]
pub struct TimerHandles {
    pub control: Callback<TimerControl>,
    pub timer: Signal<Option<CountdownTimer>>,
    pub ticker: Signal<Option<Task>>,
}

/// Form state and callbacks registered by mounted views.
#[derive(Clone, Default)]
pub struct ViewTestHandles {
    auth: Rc<RefCell<Option<AuthHandles>>>,
    upload: Rc<RefCell<Option<UploadHandles>>>,
    timer: Rc<RefCell<Option<TimerHandles>>>,
}

impl ViewTestHandles {
    pub fn register_auth(&self, handles: AuthHandles) {
        *self.auth.borrow_mut() = Some(handles);
    }

    pub fn register_upload(&self, handles: UploadHandles) {
        *self.upload.borrow_mut() = Some(handles);
    }

    pub fn register_timer(&self, handles: TimerHandles) {
        *self.timer.borrow_mut() = Some(handles);
    }

    pub fn auth(&self) -> AuthHandles {
        (*self.auth.borrow()).expect("auth dialog registered")
    }

    pub fn upload(&self) -> UploadHandles {
        (*self.upload.borrow()).expect("upload form registered")
    }

    pub fn timer(&self) -> TimerHandles {
        (*self.timer.borrow()).expect("exercise timer registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    handles: ViewTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let ctx = use_context::<crate::context::AppContext>();
    use_toasts_provider();
    use_profile_provider(ctx.session());
    let view = use_context::<ViewKind>();
    rsx! {
        AppHeader {}
        match view {
            ViewKind::Home => rsx! { HomeView {} },
            ViewKind::Lesson(id) => rsx! { LessonView { id } },
            ViewKind::Exercise(id) => rsx! { ExerciseView { id } },
            ViewKind::Gallery => rsx! { GalleryTab {} },
        }
        AuthDialog {}
        ToastStack {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
    pub gateway: InMemoryGateway,
    pub handles: ViewTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let resources and the session restore finish.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..8 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn seeded_gateway() -> InMemoryGateway {
    let gateway = InMemoryGateway::new();
    gateway.seed_lessons(vec![Lesson {
        id: LessonId::new(1),
        title: "Drawing basics".into(),
        description: "Lines, shapes and shading".into(),
        content: "Hold the pencil loosely. Warm up with long lines. Build forms from simple shapes"
            .into(),
        duration: 15,
        difficulty: "Beginner".into(),
        icon: "Pencil".into(),
        order_index: 1,
    }]);
    gateway.seed_exercises(vec![Exercise {
        id: ExerciseId::new(1),
        title: "Quick portrait".into(),
        description: "Capture a face in five minutes".into(),
        time_minutes: 5,
        points: 50,
        icon: "Zap".into(),
        difficulty: "easy".into(),
    }]);
    gateway.seed_achievements(vec![Achievement {
        id: AchievementId::new(1),
        name: "First steps".into(),
        icon: "Award".into(),
        unlocked: false,
        description: Some("Finish your first lesson".into()),
        requirement_type: Some("lessons_completed".into()),
        requirement_value: Some(1),
        unlocked_at: None,
    }]);
    gateway.seed_gallery(vec![GalleryItem {
        id: GalleryItemId::new(1),
        user_id: None,
        author: "Maria".into(),
        level: "Advanced".into(),
        title: Some("Portrait study".into()),
        description: None,
        image_url: None,
        likes: 312,
        comments: 24,
        created_at: None,
    }]);
    gateway
}

pub async fn setup_view_harness(view: ViewKind, signed_in: bool) -> ViewHarness {
    setup_view_harness_with(view, signed_in, seeded_gateway(), Storage::in_memory()).await
}

pub async fn setup_view_harness_with(
    view: ViewKind,
    signed_in: bool,
    gateway: InMemoryGateway,
    storage: Storage,
) -> ViewHarness {
    let services = Arc::new(AppServices::new(&storage, Arc::new(gateway.clone())));
    if signed_in {
        services
            .profiles()
            .create_profile(ProfileDraft::new("Ana", "ana@x.com"))
            .await
            .expect("create profile");
    }

    let handles = ViewTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&services),
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        services,
        gateway,
        handles,
    }
}
