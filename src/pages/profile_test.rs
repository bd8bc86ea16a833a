use super::*;
use crate::net::types::Role;

fn ada() -> SessionUser {
    SessionUser { id: 7, role: Role::User, username: "ada".to_owned() }
}

#[test]
fn no_param_targets_own_profile() {
    assert_eq!(profile_target(None, Some(&ada())), ProfileTarget::Own);
    assert_eq!(profile_target(Some("  "), None), ProfileTarget::Own);
}

#[test]
fn own_id_param_targets_own_profile() {
    assert_eq!(profile_target(Some("7"), Some(&ada())), ProfileTarget::Own);
}

#[test]
fn other_id_param_targets_other_profile() {
    assert_eq!(profile_target(Some("8"), Some(&ada())), ProfileTarget::Other("8".to_owned()));
    assert_eq!(profile_target(Some("7"), None), ProfileTarget::Other("7".to_owned()));
}
