use pretty_assertions::assert_eq;
use shared_types::{demo_account, select_view, ViewKind, ALL_ROLES};

#[test]
fn exactly_one_view_per_session_state() {
    assert_eq!(select_view(None), ViewKind::Landing);
    for role in ALL_ROLES {
        let identity = demo_account(role).identity();
        let view = select_view(Some(&identity));
        assert!(view.is_dashboard());
        assert_eq!(view, ViewKind::for_role(role));
    }
}
