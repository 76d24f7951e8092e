use super::*;

#[test]
fn root_variants_classify_as_root() {
    for path in ["", "/", "//", "/?next=x", "/#top"] {
        assert_eq!(classify(path), PathClass::Root, "{path:?}");
    }
}

#[test]
fn auth_paths_classify_as_auth() {
    for path in ["/auth", "/auth/", "/auth/login", "/auth/register?ref=1", "/auth/login#form"] {
        assert_eq!(classify(path), PathClass::Auth, "{path:?}");
    }
}

#[test]
fn auth_lookalikes_are_protected() {
    assert_eq!(classify("/authority"), PathClass::Protected);
    assert_eq!(classify("/author/auth/login"), PathClass::Protected);
}

#[test]
fn portal_paths_are_protected() {
    assert_eq!(classify("/admin-portal/dashboard"), PathClass::Protected);
    assert_eq!(classify("/trader-portal/orders/42"), PathClass::Protected);
    assert_eq!(classify("/unknown"), PathClass::Protected);
}

#[test]
fn same_location_ignores_trailing_slash_and_query() {
    assert!(same_location("/auth/login", "/auth/login/"));
    assert!(same_location("/auth/login?x=1", "/auth/login"));
    assert!(!same_location("/auth/login", "/auth/register"));
}
