use std::future::Future;
use std::time::Duration;

use shared_types::{demo_account, validate, AppError, Credential, Identity, LoginSettings, Role};

use crate::delay;

/// Resolves submitted credentials into an identity.
///
/// The login dialog only talks to this trait, so a networked implementation
/// can stand in for [`DemoAuthenticator`] without touching the flow.
pub trait Authenticator {
    fn authenticate(
        &self,
        role: Role,
        credential: Credential,
    ) -> impl Future<Output = Result<Identity, AppError>>;
}

/// Authenticator backed by the demo account table.
///
/// Waits `latency` before answering to mimic a round trip, then always
/// succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAuthenticator {
    latency: Duration,
}

impl DemoAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_settings(settings: &LoginSettings) -> Self {
        Self::new(Duration::from_millis(settings.submit_delay_ms))
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::from_settings(&LoginSettings::default())
    }
}

impl Authenticator for DemoAuthenticator {
    #[tracing::instrument(skip(self, credential), fields(email = %credential.email))]
    async fn authenticate(&self, role: Role, credential: Credential) -> Result<Identity, AppError> {
        delay::sleep(self.latency).await;

        if !demo_account(role).matches(&credential.email) {
            tracing::debug!("no demo account for email, using fallback identity");
        }
        let identity = validate(role, &credential);
        tracing::info!(name = %identity.name(), "demo login resolved");
        Ok(identity)
    }
}
