use std::time::Duration;

use gateway::{Authenticator, DemoAuthenticator};
use pretty_assertions::assert_eq;
use shared_types::{
    select_view, AppErrorKind, Credential, LoginPhase, Notice, NoticeKind, Role, SessionStore,
    Submission, ViewKind,
};

use crate::common::{authenticate, fresh, sign_in};

#[tokio::test]
async fn coach_login_end_to_end() {
    let (mut flow, mut session) = fresh();

    assert!(flow.open(Role::Coach));
    assert!(matches!(
        flow.submit("coach1@sai.in", ""),
        Submission::Rejected(_)
    ));
    assert!(flow.is_open());
    assert!(session.current().is_none());

    let Submission::Accepted { role, credential } = flow.submit("coach1@sai.in", "Pass@123") else {
        panic!("filled form should be accepted");
    };
    assert!(flow.is_busy());
    assert!(session.current().is_none(), "session must stay empty until the delay elapses");

    let identity = authenticate(role, credential).await;
    let notice = flow.finish(&mut session, identity).unwrap();

    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, "Login Successful");
    assert_eq!(notice.description, "Welcome to your coach login dashboard");

    let current = session.identity().unwrap();
    assert_eq!(current.role(), Role::Coach);
    assert_eq!(current.name(), "Priya Patel");
    assert_eq!(current.location(), Some("Bangalore, Karnataka"));
    assert_eq!(select_view(Some(current)), ViewKind::CoachDashboard);
    assert_eq!(flow.phase(), LoginPhase::Authenticated(Role::Coach));
}

#[tokio::test]
async fn missing_password_keeps_dialog_open_and_session_empty() {
    let (mut flow, session) = fresh();
    flow.open(Role::Athlete);

    let Submission::Rejected(err) = flow.submit("athlete1@sai.in", "") else {
        panic!("empty password should be rejected");
    };
    assert_eq!(err.kind, AppErrorKind::IncompleteCredential);
    assert!(err.field_errors.contains_key("password"));
    assert!(!err.field_errors.contains_key("email"));

    let notice = Notice::from(&err);
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.title, "Missing Information");
    assert_eq!(notice.description, "Please enter both email and password");

    assert!(flow.is_open());
    assert_eq!(flow.selected_role(), Some(Role::Athlete));
    assert!(session.current().is_none());
}

#[tokio::test]
async fn unknown_email_gets_fallback_identity_with_selected_role() {
    let (mut flow, mut session) = fresh();
    sign_in(&mut flow, &mut session, Role::Admin, "someone@else.in", "x")
        .await
        .unwrap();

    let current = session.identity().unwrap();
    assert_eq!(current.role(), Role::Admin);
    assert_eq!(current.name(), "Demo User");
    assert_eq!(current.email(), "someone@else.in");
    assert_eq!(select_view(Some(current)), ViewKind::AdminDashboard);
}

#[tokio::test]
async fn logout_returns_to_landing_and_allows_new_role() {
    let (mut flow, mut session) = fresh();
    sign_in(&mut flow, &mut session, Role::Athlete, "athlete1@sai.in", "Pass@123")
        .await
        .unwrap();
    assert_eq!(select_view(session.identity()), ViewKind::AthleteDashboard);

    flow.sign_out(&mut session);
    assert_eq!(select_view(session.identity()), ViewKind::Landing);
    assert_eq!(flow.selected_role(), None);

    sign_in(&mut flow, &mut session, Role::Coach, "coach1@sai.in", "Pass@123")
        .await
        .unwrap();
    assert_eq!(select_view(session.identity()), ViewKind::CoachDashboard);
}

#[tokio::test]
async fn double_submit_is_refused_while_in_flight() {
    let (mut flow, _session) = fresh();
    flow.open(Role::Coach);
    assert!(matches!(
        flow.submit("coach1@sai.in", "pw"),
        Submission::Accepted { .. }
    ));
    assert_eq!(flow.submit("coach1@sai.in", "pw"), Submission::Busy);
    assert!(!flow.close(), "dialog cannot be dismissed mid-submit");
}

#[tokio::test(start_paused = true)]
async fn session_is_written_only_after_configured_delay() {
    let (mut flow, mut session) = fresh();
    let auth = DemoAuthenticator::new(Duration::from_millis(1000));
    flow.open(Role::Athlete);
    let Submission::Accepted { role, credential } = flow.submit("athlete1@sai.in", "pw") else {
        panic!("filled form should be accepted");
    };

    let pending = tokio::spawn(async move { auth.authenticate(role, credential).await });
    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(!pending.is_finished());
    assert!(session.current().is_none());

    let identity = pending.await.unwrap().unwrap();
    flow.finish(&mut session, identity).unwrap();
    assert_eq!(session.current().unwrap().name(), "Rahul Sharma");
}

#[tokio::test]
async fn closing_before_submit_binds_no_role() {
    let (mut flow, session) = fresh();
    flow.open(Role::Admin);
    assert!(flow.close());
    assert_eq!(flow.submit("admin@sai.in", "x"), Submission::Ignored);
    assert!(session.current().is_none());

    let stray = authenticate(Role::Admin, Credential::new("admin@sai.in", "x")).await;
    assert_eq!(flow.complete(&stray), None);
}
