use pretty_assertions::assert_eq;
use shared_types::{validate, Credential, Identity, Role, ALL_ROLES, DEMO_ACCOUNTS};

#[test]
fn every_demo_email_resolves_to_its_profile_for_its_role() {
    for account in DEMO_ACCOUNTS.iter() {
        let identity = validate(account.role, &Credential::new(account.email, "ignored"));
        assert_eq!(identity, account.identity());
    }
}

#[test]
fn selected_role_wins_over_demo_email() {
    let identity = validate(Role::Admin, &Credential::new("athlete1@sai.in", "Pass@123"));
    assert_eq!(identity.role(), Role::Admin);
    assert_eq!(identity.name(), "Demo User");
    assert_eq!(identity.email(), "athlete1@sai.in");
}

#[test]
fn role_is_preserved_for_any_email() {
    for role in ALL_ROLES {
        for email in ["x@y.z", "coach1@sai.in", "  spaced@sai.in  "] {
            let identity = validate(role, &Credential::new(email, "pw"));
            assert_eq!(identity.role(), role, "role lost for {email}");
        }
    }
}

#[test]
fn identity_serializes_with_role_tag() {
    let identity = validate(Role::Athlete, &Credential::new("athlete1@sai.in", "Pass@123"));
    let json = serde_json::to_value(&identity).unwrap();
    assert_eq!(json["role"], "athlete");
    assert_eq!(json["name"], "Rahul Sharma");
    assert_eq!(json["sports"][0], "Sprint");

    let back: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(back, identity);
}
