use serde::{Deserialize, Serialize};
use std::fmt;

/// Account roles that can sign in. The set is closed: every match over
/// `Role` is exhaustive and there is no fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Athlete,
    Coach,
    Admin,
}

/// All roles in header display order.
pub const ALL_ROLES: [Role; 3] = [Role::Athlete, Role::Coach, Role::Admin];

impl Role {
    /// Lowercase key used in serialized identities and element ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Athlete => "athlete",
            Role::Coach => "coach",
            Role::Admin => "admin",
        }
    }

    /// Parse a lowercase role key. Unknown keys are rejected rather than
    /// mapped to a default role.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "athlete" => Some(Role::Athlete),
            "coach" => Some(Role::Coach),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Title shown at the top of the login dialog.
    pub fn login_title(&self) -> &'static str {
        match self {
            Role::Athlete => "Athlete Login",
            Role::Coach => "Coach Login",
            Role::Admin => "SAI Admin Login",
        }
    }

    pub fn login_description(&self) -> &'static str {
        match self {
            Role::Athlete => "Access your performance dashboard and track your progress",
            Role::Coach => "Manage your athletes and provide guidance",
            Role::Admin => "Full system access and analytics",
        }
    }

    /// Label on the header login button.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Role::Athlete => "Athlete Login",
            Role::Coach => "Coach Login",
            Role::Admin => "SAI Admin",
        }
    }

    /// Secondary line shown under the label in the mobile menu.
    pub fn nav_description(&self) -> &'static str {
        match self {
            Role::Athlete => "Track your performance",
            Role::Coach => "Manage athletes",
            Role::Admin => "Full access",
        }
    }

    pub fn dashboard_title(&self) -> &'static str {
        match self {
            Role::Athlete => "Athlete Dashboard",
            Role::Coach => "Coach Dashboard",
            Role::Admin => "SAI Admin Dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
