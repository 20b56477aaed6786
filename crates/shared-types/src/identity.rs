use crate::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile of a signed-in athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sports: Vec<String>,
}

/// Profile shared by coach and admin accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The authenticated user, tagged by role.
///
/// The role is the variant itself, so it is fixed when the identity is
/// built and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Identity {
    Athlete(AthleteProfile),
    Coach(StaffProfile),
    Admin(StaffProfile),
}

impl Identity {
    /// Build an identity for `role` with no sports listed.
    pub fn new(
        role: Role,
        name: impl Into<String>,
        email: impl Into<String>,
        location: Option<String>,
    ) -> Self {
        let name = name.into();
        let email = email.into();
        match role {
            Role::Athlete => Identity::Athlete(AthleteProfile {
                name,
                email,
                location,
                sports: Vec::new(),
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

    pub fn role(&self) -> Role {
        match self {
            Identity::Athlete(_) => Role::Athlete,
            Identity::Coach(_) => Role::Coach,
            Identity::Admin(_) => Role::Admin,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Identity::Athlete(p) => &p.name,
            Identity::Coach(p) | Identity::Admin(p) => &p.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Identity::Athlete(p) => &p.email,
            Identity::Coach(p) | Identity::Admin(p) => &p.email,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Identity::Athlete(p) => p.location.as_deref(),
            Identity::Coach(p) | Identity::Admin(p) => p.location.as_deref(),
        }
    }

    /// Sports the athlete competes in. Empty for staff accounts.
    pub fn sports(&self) -> &[String] {
        match self {
            Identity::Athlete(p) => &p.sports,
            Identity::Coach(_) | Identity::Admin(_) => &[],
        }
    }
}

/// Credentials typed into the login form. Only lives for one submission.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}
