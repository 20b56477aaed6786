use crate::{AthleteProfile, Credential, Identity, Role, StaffProfile};

/// Name given to any login that does not hit a demo account.
pub const FALLBACK_NAME: &str = "Demo User";

/// Location given to any login that does not hit a demo account.
pub const FALLBACK_LOCATION: &str = "India";

/// One row of the demo account table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub role: Role,
    pub email: &'static str,
    /// Shown in the login dialog as a hint. Never checked on login.
    pub sample_password: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub sports: &'static [&'static str],
}

/// The fixed demo accounts, one per role.
pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        role: Role::Athlete,
        email: "athlete1@sai.in",
        sample_password: "Pass@123",
        name: "Rahul Sharma",
        location: "Mumbai, Maharashtra",
        sports: &["Sprint", "Long Jump"],
    },
    DemoAccount {
        role: Role::Coach,
        email: "coach1@sai.in",
        sample_password: "Pass@123",
        name: "Priya Patel",
        location: "Bangalore, Karnataka",
        sports: &[],
    },
    DemoAccount {
        role: Role::Admin,
        email: "admin@sai.in",
        sample_password: "Admin@123",
        name: "Dr. Suresh Kumar",
        location: "New Delhi",
        sports: &[],
    },
];

impl DemoAccount {
    /// Exact, case-sensitive email comparison.
    pub fn matches(&self, email: &str) -> bool {
        self.email == email
    }

    /// Credentials that log into this account, for the sample-fill button.
    pub fn sample_credential(&self) -> Credential {
        Credential::new(self.email, self.sample_password)
    }

    pub fn identity(&self) -> Identity {
        let name = self.name.to_string();
        let email = self.email.to_string();
        let location = Some(self.location.to_string());
        match self.role {
            Role::Athlete => Identity::Athlete(AthleteProfile {
                name,
                email,
                location,
                sports: self.sports.iter().map(|s| s.to_string()).collect(),
            }),
            Role::Coach => Identity::Coach(StaffProfile {
                name,
                email,
                location,
            }),
            Role::Admin => Identity::Admin(StaffProfile {
                name,
                email,
                location,
            }),
        }
    }
}

/// The demo account registered for `role`.
pub fn demo_account(role: Role) -> &'static DemoAccount {
    match role {
        Role::Athlete => &DEMO_ACCOUNTS[0],
        Role::Coach => &DEMO_ACCOUNTS[1],
        Role::Admin => &DEMO_ACCOUNTS[2],
    }
}

/// Resolve the identity for a login attempt.
///
/// Both credential fields must already be non-empty. If the email is the
/// role's demo email, the demo identity is returned whatever the password;
/// otherwise a "Demo User" identity is synthesized for the typed email.
/// Never fails.
pub fn validate(role: Role, credential: &Credential) -> Identity {
    let account = demo_account(role);
    if account.matches(&credential.email) {
        return account.identity();
    }
    Identity::new(
        role,
        FALLBACK_NAME,
        credential.email.clone(),
        Some(FALLBACK_LOCATION.to_string()),
    )
}
