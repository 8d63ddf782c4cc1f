use krb_client_core::{Client, MemoryStore, Session};
use krb_shared::req_args::LoginReqArgs;

pub use krb_test_helper::{fixtures, no_cb, unreachable_address, TestApp};

pub async fn spawn_app() -> TestApp<Client> {
    krb_test_helper::spawn_app(|address| Client::new(address).expect("failed to build client"))
        .await
}

pub fn alice_login_args() -> LoginReqArgs {
    LoginReqArgs::new("alice".to_string(), "pw".to_string().into())
}

/// Session that is logged in as `username` without going to the server
pub fn logged_in_session(store: &MemoryStore, username: &str, role: &str) -> Session {
    let identity = fixtures::identity_json(7, username, role);
    krb_client_core::IdentityStore::save(store, &identity.to_string()).unwrap();
    Session::bootstrap(Box::new(store.clone()), Default::default()).unwrap()
}
