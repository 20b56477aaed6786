use dioxus::prelude::*;
use shared_types::{select_view, Identity, LoginFlow, Role, SessionStore, ViewKind};

/// The signed-in identity, shared with every view through context.
///
/// Views only read it; the login dialog and the logout button are the
/// only writers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_identity: Signal<Option<Identity>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_identity: Signal::new(None),
        }
    }
}

impl SessionStore for SessionState {
    fn login(&mut self, identity: Identity) {
        tracing::info!(role = %identity.role(), email = %identity.email(), "session started");
        self.current_identity.set(Some(identity));
    }

    fn logout(&mut self) {
        if self.current_identity.peek().is_some() {
            tracing::info!("session ended");
        }
        self.current_identity.set(None);
    }

    fn current(&self) -> Option<Identity> {
        self.current_identity.read().clone()
    }
}

/// Login dialog state shared by the header, hero and dialog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoginState {
    pub flow: Signal<LoginFlow>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            flow: Signal::new(LoginFlow::new()),
        }
    }

    /// Open the dialog for `role` unless it is already open.
    pub fn open(&mut self, role: Role) {
        if self.flow.write().open(role) {
            tracing::debug!(%role, "login dialog opened");
        }
    }

    pub fn close(&mut self) {
        if !self.flow.write().close() {
            tracing::debug!("login dialog close ignored while submitting");
        }
    }

    /// Sign out and return to the landing page.
    pub fn sign_out(&mut self, session: &mut SessionState) {
        self.flow.write().sign_out(session);
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Hook to access the login dialog state.
pub fn use_login() -> LoginState {
    use_context::<LoginState>()
}

/// The screen to render for the current session.
pub fn use_view() -> ViewKind {
    let session = use_session();
    let guard = session.current_identity.read();
    select_view(guard.as_ref())
}
