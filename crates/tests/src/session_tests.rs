use pretty_assertions::assert_eq;
use shared_types::{demo_account, Identity, Role, Session, SessionStore};

#[test]
fn login_replaces_previous_identity() {
    let mut session = Session::new();
    session.login(demo_account(Role::Athlete).identity());
    session.login(demo_account(Role::Coach).identity());
    assert_eq!(session.current().unwrap().role(), Role::Coach);
}

#[test]
fn logout_is_idempotent() {
    let mut session = Session::new();
    session.login(Identity::new(Role::Admin, "A", "a@sai.in", None));
    session.logout();
    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.current(), None);
}
