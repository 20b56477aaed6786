use crate::{Identity, Role};

/// The top-level screen rendered for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Landing,
    AthleteDashboard,
    CoachDashboard,
    AdminDashboard,
}

impl ViewKind {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Athlete => ViewKind::AthleteDashboard,
            Role::Coach => ViewKind::CoachDashboard,
            Role::Admin => ViewKind::AdminDashboard,
        }
    }

    pub fn is_dashboard(&self) -> bool {
        !matches!(self, ViewKind::Landing)
    }
}

/// Pick the screen for the current session: the landing page when signed
/// out, otherwise the dashboard of the identity's role.
pub fn select_view(session: Option<&Identity>) -> ViewKind {
    match session {
        None => ViewKind::Landing,
        Some(identity) => ViewKind::for_role(identity.role()),
    }
}
