use std::time::Duration;

use gateway::{Authenticator, DemoAuthenticator};
use shared_types::{Credential, Identity, LoginFlow, Notice, Role, Session, Submission};

/// Authenticator that answers without waiting.
pub fn instant_authenticator() -> DemoAuthenticator {
    DemoAuthenticator::new(Duration::ZERO)
}

/// Fresh login flow and empty session.
pub fn fresh() -> (LoginFlow, Session) {
    (LoginFlow::new(), Session::new())
}

/// Drive the whole login dialog for `role`: open, submit, authenticate
/// and finish. Returns the success notice, or `None` if any step refused.
pub async fn sign_in(
    flow: &mut LoginFlow,
    session: &mut Session,
    role: Role,
    email: &str,
    password: &str,
) -> Option<Notice> {
    flow.open(role);
    let Submission::Accepted { role, credential } = flow.submit(email, password) else {
        return None;
    };
    let identity = authenticate(role, credential).await;
    flow.finish(session, identity)
}

pub async fn authenticate(role: Role, credential: Credential) -> Identity {
    instant_authenticator()
        .authenticate(role, credential)
        .await
        .expect("demo authenticator never fails")
}
