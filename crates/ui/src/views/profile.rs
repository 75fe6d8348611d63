use artlearn_core::model::User;
use dioxus::prelude::*;
use services::SessionStore;

/// Reactive view of the active profile, shared by every page.
///
/// The durable copy lives in the session store; this mirrors it for rendering
/// and is only written after the store has been updated.
#[derive(Clone, Copy)]
pub struct ProfileState {
    user: Signal<Option<User>>,
    auth_open: Signal<bool>,
    loaded: Signal<bool>,
}

impl ProfileState {
    #[must_use]
    pub fn new(user: Signal<Option<User>>, auth_open: Signal<bool>, loaded: Signal<bool>) -> Self {
        Self {
            user,
            auth_open,
            loaded,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        (self.user)()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }

    #[must_use]
    pub fn auth_open(&self) -> bool {
        (self.auth_open)()
    }

    /// Initial read from the session store. Opens the sign-in dialog when empty.
    pub fn restore(mut self, user: Option<User>) {
        let missing = user.is_none();
        self.user.set(user);
        self.loaded.set(true);
        if missing {
            self.auth_open.set(true);
        }
    }

    pub fn signed_in(mut self, user: User) {
        self.user.set(Some(user));
        self.auth_open.set(false);
    }

    pub fn replace(mut self, user: Option<User>) {
        self.user.set(user);
    }

    pub fn signed_out(mut self) {
        self.user.set(None);
    }

    pub fn open_auth(mut self) {
        self.auth_open.set(true);
    }

    pub fn close_auth(mut self) {
        self.auth_open.set(false);
    }
}

/// Install `ProfileState` for the subtree and load the stored profile once.
pub fn use_profile_provider(session: SessionStore) -> ProfileState {
    let user = use_signal(|| None::<User>);
    let auth_open = use_signal(|| false);
    let loaded = use_signal(|| false);
    let state = use_context_provider(|| ProfileState::new(user, auth_open, loaded));
    use_hook(move || {
        spawn(async move {
            state.restore(session.get().await);
        })
    });
    state
}
