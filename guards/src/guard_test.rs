use super::*;
use crate::role::{RoleTag, resolve};
use crate::session::{Identity, MemorySlot, SESSION_SLOT_KEY, SessionRecord};
use serde_json::json;

fn active(role: RoleTag) -> SessionState {
    SessionState::Active(SessionRecord::new(Identity::Handle("user@example.com".to_owned()), role))
}

fn guard_with(raw: Option<&str>) -> Guard<MemorySlot> {
    guard_over(slot_with(raw))
}

fn slot_with(raw: Option<&str>) -> MemorySlot {
    let slot = MemorySlot::new();
    if let Some(raw) = raw {
        slot.set(SESSION_SLOT_KEY, raw).unwrap();
    }
    slot
}

fn guard_over(slot: MemorySlot) -> Guard<MemorySlot> {
    Guard::new(SessionStore::new(slot))
}

const PROTECTED: [&str; 5] = [
    "/admin-portal/dashboard",
    "/alliance-portal/dashboard",
    "/trader-portal/dashboard",
    "/farmer-portal/claims/12",
    "/settings",
];

const AUTH: [&str; 4] = ["/auth", "/auth/login", "/auth/register", "/auth/forgot-password?x=1"];

// =============================================================
// Scenarios
// =============================================================

#[test]
fn admin_at_root_redirects_to_admin_dashboard() {
    assert_eq!(
        evaluate("/", &active(RoleTag::Admin)),
        GuardDecision::Redirect("/admin-portal/dashboard")
    );
}

#[test]
fn no_session_on_trader_portal_redirects_to_login() {
    assert_eq!(
        evaluate("/trader-portal/dashboard", &SessionState::Absent),
        GuardDecision::Redirect("/auth/login")
    );
}

#[test]
fn unknown_role_on_login_redirects_without_looping() {
    let session = SessionState::Unrecognized("unknown_role".to_owned());
    let decision = evaluate("/auth/login", &session);
    assert!(!decision.is_allowed());
    assert_eq!(decision, GuardDecision::Redirect("/auth/login"));
    assert_eq!(decision.navigation_from("/auth/login"), None);
}

#[test]
fn cooperative_member_on_alliance_portal_is_allowed() {
    assert_eq!(
        evaluate("/alliance-portal/dashboard", &active(RoleTag::CooperativeMember)),
        GuardDecision::Allow
    );
}

#[test]
fn stored_unknown_role_on_login_is_not_allowed() {
    let guard = guard_with(Some(r#"{"role":"unknown_role"}"#));
    let decision = guard.check("/auth/login");
    assert_eq!(decision, GuardDecision::Redirect(SIGN_IN_PATH));
    assert_eq!(decision.navigation_from("/auth/login"), None);
}

#[test]
fn stored_admin_role_at_root_goes_to_admin_dashboard() {
    let guard = guard_with(Some(r#"{"role":"admin"}"#));
    assert_eq!(guard.check("/"), GuardDecision::Redirect("/admin-portal/dashboard"));
}

#[test]
fn stored_cooperative_role_on_alliance_portal_is_allowed() {
    let guard = guard_with(Some(r#"{"role":"cooperative_member"}"#));
    assert_eq!(guard.check("/alliance-portal/dashboard"), GuardDecision::Allow);
}

#[test]
fn stored_record_without_role_redirects_to_sign_in() {
    let guard = guard_with(Some(r#"{"identity":"ada"}"#));
    assert_eq!(guard.check("/admin-portal/dashboard"), GuardDecision::Redirect(SIGN_IN_PATH));
    assert_eq!(guard.check("/auth/login"), GuardDecision::Redirect(SIGN_IN_PATH));
}

// =============================================================
// Rule coverage
// =============================================================

#[test]
fn no_session_redirects_every_non_auth_path_once() {
    for path in PROTECTED.into_iter().chain(["/", ""]) {
        let decision = evaluate(path, &SessionState::Absent);
        assert_eq!(decision, GuardDecision::Redirect(SIGN_IN_PATH), "{path:?}");
        assert_eq!(decision.navigation_from(path), Some(SIGN_IN_PATH), "{path:?}");
    }
}

#[test]
fn no_session_allows_auth_pages() {
    for path in AUTH {
        assert_eq!(evaluate(path, &SessionState::Absent), GuardDecision::Allow, "{path:?}");
    }
}

#[test]
fn unrecognized_role_never_allows() {
    let session = SessionState::Unrecognized(String::new());
    for path in PROTECTED.into_iter().chain(AUTH).chain(["/"]) {
        assert_eq!(evaluate(path, &session), GuardDecision::Redirect(SIGN_IN_PATH), "{path:?}");
    }
}

#[test]
fn valid_role_on_root_or_auth_redirects_to_landing() {
    for role in RoleTag::ALL {
        for path in AUTH.into_iter().chain(["/", ""]) {
            let decision = evaluate(path, &active(role));
            assert_eq!(decision, GuardDecision::Redirect(resolve(role.as_str())), "{role} {path:?}");
            assert_eq!(decision.navigation_from(path), Some(role.landing_path()));
        }
    }
}

#[test]
fn valid_role_on_protected_path_is_allowed() {
    for role in RoleTag::ALL {
        for path in PROTECTED {
            assert_eq!(evaluate(path, &active(role)), GuardDecision::Allow, "{role} {path:?}");
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let sessions = [
        SessionState::Absent,
        SessionState::Unrecognized("pilot".to_owned()),
        active(RoleTag::RetailClient),
    ];
    for session in &sessions {
        for path in PROTECTED.into_iter().chain(AUTH).chain(["/"]) {
            assert_eq!(evaluate(path, session), evaluate(path, session));
        }
    }
}

// =============================================================
// Failure semantics
// =============================================================

#[test]
fn load_error_off_auth_path_redirects_to_sign_in() {
    let err = SessionError::Storage("denied".to_owned());
    assert_eq!(
        evaluate_loaded("/admin-portal/dashboard", Err(err)),
        GuardDecision::Redirect(SIGN_IN_PATH)
    );
}

#[test]
fn load_error_on_auth_path_allows() {
    let err = SessionError::Storage("denied".to_owned());
    assert_eq!(evaluate_loaded("/auth/login", Err(err)), GuardDecision::Allow);
}

// =============================================================
// Guard over a store
// =============================================================

#[test]
fn check_with_empty_slot_redirects() {
    let guard = guard_with(None);
    assert_eq!(guard.check("/farmer-portal/dashboard"), GuardDecision::Redirect(SIGN_IN_PATH));
}

#[test]
fn check_with_malformed_slot_behaves_like_no_session() {
    let guard = guard_with(Some("{not json"));
    assert_eq!(guard.check("/retail-portal/dashboard"), GuardDecision::Redirect(SIGN_IN_PATH));
    assert_eq!(guard.check("/auth/login"), GuardDecision::Allow);
}

#[test]
fn check_reloads_slot_between_navigations() {
    let slot = MemorySlot::new();
    let store = SessionStore::new(slot.clone());
    let guard = guard_over(slot);
    assert_eq!(guard.check("/"), GuardDecision::Redirect(SIGN_IN_PATH));

    let record = SessionRecord::new(Identity::Handle("tess".to_owned()), RoleTag::WholesaleTrader);
    store.write(&record).unwrap();
    assert_eq!(guard.check("/"), GuardDecision::Redirect("/trader-portal/dashboard"));

    store.clear().unwrap();
    assert_eq!(guard.check("/trader-portal/dashboard"), GuardDecision::Redirect(SIGN_IN_PATH));
}

#[test]
fn check_reads_mixed_case_role() {
    let raw = json!({ "identity": "root", "role": " ADMIN " }).to_string();
    let guard = guard_with(Some(&raw));
    assert_eq!(guard.check("/auth/login"), GuardDecision::Redirect("/admin-portal/dashboard"));
}

// =============================================================
// GuardPhase / navigation_from
// =============================================================

#[test]
fn only_settled_allow_renders_children() {
    assert!(!GuardPhase::Checking.renders_children());
    assert!(!GuardPhase::Settled(GuardDecision::Redirect(SIGN_IN_PATH)).renders_children());
    assert!(GuardPhase::Settled(GuardDecision::Allow).renders_children());
    assert_eq!(GuardPhase::default(), GuardPhase::Checking);
}

#[test]
fn allow_issues_no_navigation() {
    assert_eq!(GuardDecision::Allow.navigation_from("/admin-portal/dashboard"), None);
}

#[test]
fn redirect_to_same_location_with_trailing_slash_is_noop() {
    assert_eq!(GuardDecision::Redirect(SIGN_IN_PATH).navigation_from("/auth/login/"), None);
}
