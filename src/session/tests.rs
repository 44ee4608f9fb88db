use tempfile::TempDir;

use super::{SessionContext, SessionStore, User};

#[test]
fn missing_session_file_is_anonymous() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::at(dir.path().join("session.json"));

    let session = store.load().unwrap();
    assert_eq!(session, SessionContext::anonymous());
    assert!(!session.is_authenticated());
}

#[test]
fn sign_in_then_sign_out() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::at(dir.path().join("nested/session.json"));

    let user = User::new("ada@example.com").with_full_name("Ada Lovelace");
    store.sign_in(&user).unwrap();

    let session = store.load().unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.user.as_ref().unwrap().display_name(), "Ada Lovelace");

    assert!(store.sign_out().unwrap());
    assert!(!store.load().unwrap().is_authenticated());
    assert!(!store.sign_out().unwrap());
}

#[test]
fn sign_in_rejects_invalid_email() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::at(dir.path().join("session.json"));

    let err = store.sign_in(&User::new("not-an-email")).unwrap_err();
    assert!(err.to_string().contains("not a valid email"));
    assert!(!store.path().exists());
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User::new("dev@example.com");
    assert_eq!(user.display_name(), "dev@example.com");

    let blank = User::new("dev@example.com").with_full_name("  ");
    assert_eq!(blank.display_name(), "dev@example.com");
}

#[test]
fn loading_session_is_not_authenticated() {
    let session = SessionContext {
        user: Some(User::new("dev@example.com")),
        loading: true,
    };
    assert!(!session.is_authenticated());
}
