use crate::{AppError, Credential, Identity, Notice, Role, SessionStore};

/// Where the login dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Dialog closed, nobody signed in through it.
    #[default]
    Idle,
    /// Dialog open for a role, waiting for input.
    RoleSelected(Role),
    /// Credentials handed to the authenticator, waiting for it to finish.
    Submitting(Role),
    /// Session populated, dialog closed.
    Authenticated(Role),
}

/// Outcome of pressing the submit button.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Fields were filled; the flow is now submitting these credentials.
    Accepted { role: Role, credential: Credential },
    /// A field was empty; the dialog stays open for correction.
    Rejected(AppError),
    /// A submission is already in flight.
    Busy,
    /// The dialog is not open.
    Ignored,
}

/// State machine driving the login dialog.
///
/// The role is bound when the dialog opens and cannot change until it
/// closes or the user logs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginFlow {
    phase: LoginPhase,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn selected_role(&self) -> Option<Role> {
        match self.phase {
            LoginPhase::Idle => None,
            LoginPhase::RoleSelected(role)
            | LoginPhase::Submitting(role)
            | LoginPhase::Authenticated(role) => Some(role),
        }
    }

    /// Whether the dialog is on screen.
    pub fn is_open(&self) -> bool {
        matches!(
            self.phase,
            LoginPhase::RoleSelected(_) | LoginPhase::Submitting(_)
        )
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, LoginPhase::Submitting(_))
    }

    /// Open the dialog for `role`. Only valid from `Idle`; returns whether
    /// the dialog opened.
    pub fn open(&mut self, role: Role) -> bool {
        match self.phase {
            LoginPhase::Idle => {
                self.phase = LoginPhase::RoleSelected(role);
                true
            }
            _ => false,
        }
    }

    /// Dismiss the dialog. A submission in flight cannot be cancelled, so
    /// this does nothing while submitting.
    pub fn close(&mut self) -> bool {
        match self.phase {
            LoginPhase::RoleSelected(_) => {
                self.phase = LoginPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Submit the form contents.
    pub fn submit(&mut self, email: &str, password: &str) -> Submission {
        match self.phase {
            LoginPhase::RoleSelected(role) => {
                if let Err(err) = AppError::check_credential_fields(email, password) {
                    return Submission::Rejected(err);
                }
                self.phase = LoginPhase::Submitting(role);
                Submission::Accepted {
                    role,
                    credential: Credential::new(email, password),
                }
            }
            LoginPhase::Submitting(_) => Submission::Busy,
            LoginPhase::Idle | LoginPhase::Authenticated(_) => Submission::Ignored,
        }
    }

    /// Finish the in-flight submission with the resolved identity.
    ///
    /// Returns the success notice, or `None` when nothing was submitting or
    /// the identity belongs to a different role than the one bound.
    pub fn complete(&mut self, identity: &Identity) -> Option<Notice> {
        match self.phase {
            LoginPhase::Submitting(role) if identity.role() == role => {
                self.phase = LoginPhase::Authenticated(role);
                Some(Notice::login_succeeded(role))
            }
            _ => None,
        }
    }

    /// Complete the submission and store the identity in `session`.
    ///
    /// The session is only written when the flow accepts the identity, so
    /// a stray completion can never sign someone in.
    pub fn finish(
        &mut self,
        session: &mut impl SessionStore,
        identity: Identity,
    ) -> Option<Notice> {
        let notice = self.complete(&identity)?;
        session.login(identity);
        Some(notice)
    }

    /// Abandon the in-flight submission after the authenticator reported
    /// an error, reopening the form for the same role.
    pub fn fail(&mut self) -> bool {
        match self.phase {
            LoginPhase::Submitting(role) => {
                self.phase = LoginPhase::RoleSelected(role);
                true
            }
            _ => false,
        }
    }

    /// Return to `Idle` and forget the selected role.
    pub fn logout(&mut self) {
        self.phase = LoginPhase::Idle;
    }

    /// Clear `session` and reset the flow.
    pub fn sign_out(&mut self, session: &mut impl SessionStore) {
        session.logout();
        self.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate, AppErrorKind, Session};
    use pretty_assertions::assert_eq;

    #[test]
    fn open_binds_role() {
        let mut flow = LoginFlow::new();
        assert!(flow.open(Role::Coach));
        assert_eq!(flow.phase(), LoginPhase::RoleSelected(Role::Coach));
        assert!(flow.is_open());
        assert!(!flow.is_busy());
    }

    #[test]
    fn open_again_keeps_first_role() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Coach);
        assert!(!flow.open(Role::Admin));
        assert_eq!(flow.selected_role(), Some(Role::Coach));
    }

    #[test]
    fn close_returns_to_idle() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Athlete);
        assert!(flow.close());
        assert_eq!(flow.phase(), LoginPhase::Idle);
        assert_eq!(flow.selected_role(), None);
    }

    #[test]
    fn empty_field_is_rejected_and_dialog_stays_open() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Coach);
        match flow.submit("coach1@sai.in", "") {
            Submission::Rejected(err) => {
                assert_eq!(err.kind, AppErrorKind::IncompleteCredential)
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(flow.phase(), LoginPhase::RoleSelected(Role::Coach));
    }

    #[test]
    fn filled_fields_start_submitting() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Coach);
        let submission = flow.submit("coach1@sai.in", "pw");
        assert_eq!(
            submission,
            Submission::Accepted {
                role: Role::Coach,
                credential: Credential::new("coach1@sai.in", "pw"),
            }
        );
        assert!(flow.is_busy());
        assert!(flow.is_open());
    }

    #[test]
    fn resubmitting_while_busy_is_refused() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Athlete);
        flow.submit("a@x.in", "pw");
        assert_eq!(flow.submit("a@x.in", "pw"), Submission::Busy);
        assert!(!flow.close());
        assert_eq!(flow.phase(), LoginPhase::Submitting(Role::Athlete));
    }

    #[test]
    fn submit_without_dialog_is_ignored() {
        let mut flow = LoginFlow::new();
        assert_eq!(flow.submit("a@x.in", "pw"), Submission::Ignored);
    }

    #[test]
    fn complete_authenticates_and_closes() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Admin);
        let Submission::Accepted { role, credential } = flow.submit("admin@sai.in", "x") else {
            panic!("submission should be accepted");
        };
        let identity = validate(role, &credential);
        let notice = flow.complete(&identity).unwrap();
        assert_eq!(notice, Notice::login_succeeded(Role::Admin));
        assert_eq!(flow.phase(), LoginPhase::Authenticated(Role::Admin));
        assert!(!flow.is_open());
    }

    #[test]
    fn complete_with_other_role_is_refused() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Coach);
        flow.submit("c@x.in", "pw");
        let wrong = Identity::new(Role::Athlete, "A", "a@x.in", None);
        assert_eq!(flow.complete(&wrong), None);
        assert!(flow.is_busy());
    }

    #[test]
    fn complete_when_idle_does_nothing() {
        let mut flow = LoginFlow::new();
        let identity = Identity::new(Role::Coach, "C", "c@x.in", None);
        assert_eq!(flow.complete(&identity), None);
        assert_eq!(flow.phase(), LoginPhase::Idle);
    }

    #[test]
    fn finish_writes_session_only_when_accepted() {
        let mut flow = LoginFlow::new();
        let mut session = Session::new();

        let stray = Identity::new(Role::Coach, "C", "c@x.in", None);
        assert_eq!(flow.finish(&mut session, stray), None);
        assert!(!session.is_authenticated());

        flow.open(Role::Coach);
        flow.submit("c@x.in", "pw");
        let identity = Identity::new(Role::Coach, "C", "c@x.in", None);
        assert!(flow.finish(&mut session, identity.clone()).is_some());
        assert_eq!(session.current(), Some(identity));
    }

    #[test]
    fn fail_reopens_form_for_same_role() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Admin);
        flow.submit("a@x.in", "pw");
        assert!(flow.fail());
        assert_eq!(flow.phase(), LoginPhase::RoleSelected(Role::Admin));
        assert!(!flow.fail());
    }

    #[test]
    fn sign_out_clears_session_and_flow() {
        let mut flow = LoginFlow::new();
        let mut session = Session::new();
        flow.open(Role::Athlete);
        flow.submit("a@x.in", "pw");
        flow.finish(&mut session, Identity::new(Role::Athlete, "A", "a@x.in", None));

        flow.sign_out(&mut session);
        assert_eq!(session.current(), None);
        assert_eq!(flow.phase(), LoginPhase::Idle);

        flow.sign_out(&mut session);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn logout_resets_selected_role() {
        let mut flow = LoginFlow::new();
        flow.open(Role::Coach);
        flow.submit("c@x.in", "pw");
        flow.complete(&Identity::new(Role::Coach, "C", "c@x.in", None));
        flow.logout();
        assert_eq!(flow.phase(), LoginPhase::Idle);
        assert_eq!(flow.selected_role(), None);
        assert!(flow.open(Role::Athlete));
    }
}
