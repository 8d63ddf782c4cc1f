use krb_client_core::{
    wait_for, CorruptIdentityPolicy, FileStore, IdentityStore, MemoryStore, Session,
    SessionState,
};
use krb_shared::uac::{Identity, Role};
use serde_json::json;

use crate::helpers::{alice_login_args, fixtures, logged_in_session, no_cb, spawn_app};

#[tokio::test]
async fn login_persists_and_authenticates() {
    // Arrange
    let app = spawn_app().await;
    let alice = fixtures::identity_json(1, "alice", "EMPLOYEE");
    app.backend.mock_json("POST", "/auth/login", 200, alice.clone());
    let store = MemoryStore::default();
    let mut session =
        Session::bootstrap(Box::new(store.clone()), CorruptIdentityPolicy::default()).unwrap();

    // Act
    let identity = session
        .login(&app.core_client, alice_login_args())
        .await
        .unwrap()
        .clone();

    // Assert
    let expected: Identity = serde_json::from_value(alice).unwrap();
    assert_eq!(identity, expected);
    assert_eq!(session.state(), &SessionState::Authenticated(expected.clone().into()));
    let stored: Identity = serde_json::from_str(&store.load().unwrap().unwrap()).unwrap();
    assert_eq!(stored, expected);
}

#[tokio::test]
async fn login_sends_credentials_as_json() {
    // Arrange
    let app = spawn_app().await;
    app.backend.mock_json(
        "POST",
        "/auth/login",
        200,
        fixtures::identity_json(1, "alice", "EMPLOYEE"),
    );

    // Act
    wait_for(app.core_client.login(alice_login_args(), no_cb))
        .await
        .unwrap();

    // Assert
    let received = app.backend.received_for("POST", "/auth/login");
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].json_body(),
        json!({"username": "alice", "password": "pw"})
    );
}

#[tokio::test]
async fn failed_login_leaves_session_unchanged() {
    // Arrange
    let app = spawn_app().await;
    app.backend
        .mock_text("POST", "/auth/login", 401, "Invalid username or password");
    let store = MemoryStore::default();
    let mut session = Session::bootstrap(Box::new(store.clone()), Default::default()).unwrap();

    // Act
    let actual = session.login(&app.core_client, alice_login_args()).await;

    // Assert
    assert_eq!(
        actual.unwrap_err().to_string(),
        "Invalid username or password"
    );
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn login_survives_restart() {
    // Arrange
    let app = spawn_app().await;
    app.backend.mock_json(
        "POST",
        "/auth/login",
        200,
        fixtures::identity_json(1, "alice", "ADMIN"),
    );
    let dir = tempfile::tempdir().unwrap();
    let mut session =
        Session::bootstrap(Box::new(FileStore::new(dir.path())), Default::default()).unwrap();
    let logged_in = session
        .login(&app.core_client, alice_login_args())
        .await
        .unwrap()
        .clone();
    drop(session);

    // Act
    let restarted =
        Session::bootstrap(Box::new(FileStore::new(dir.path())), Default::default()).unwrap();

    // Assert
    assert_eq!(restarted.identity(), Some(&logged_in));
    assert_eq!(restarted.identity().unwrap().role, Role::Admin);
}

#[tokio::test]
async fn logout_clears_store_and_notifies_server() {
    // Arrange
    let app = spawn_app().await;
    app.backend.mock_text("POST", "/auth/logout", 200, "");
    let store = MemoryStore::default();
    let mut session = logged_in_session(&store, "bob", "EMPLOYEE");
    assert!(session.identity().is_some());

    // Act
    session.logout(&app.core_client).await.unwrap();

    // Assert
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(app.backend.received_for("POST", "/auth/logout").len(), 1);
    let restarted = Session::bootstrap(Box::new(store), Default::default()).unwrap();
    assert_eq!(restarted.identity(), None);
}

#[tokio::test]
async fn logout_completes_locally_when_server_fails() {
    // Arrange
    let app = spawn_app().await;
    app.backend.mock_text("POST", "/auth/logout", 500, "");
    let store = MemoryStore::default();
    let mut session = logged_in_session(&store, "bob", "EMPLOYEE");

    // Act
    let actual = session.logout(&app.core_client).await;

    // Assert
    actual.unwrap();
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(store.load().unwrap(), None);
}
