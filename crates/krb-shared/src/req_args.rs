//! This module stores the expected format of the arguments for the requests
//! The structure of the module is supposed to match the path of the endpoints.
//! For example `/accounts` would map to [`accounts::CreateAccountReqArgs`].
//! Some structs are not serializable because they carry secrets but are still
//! included here to know what needs to be sent

use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

pub mod accounts;
pub mod customers;
pub mod employees;

/// Credentials for `/auth/login`, the password is only exposed when the body is
/// built
#[derive(Clone)]
pub struct LoginReqArgs {
    pub username: String,
    pub password: SecretString,
}

impl LoginReqArgs {
    pub fn new<S: Into<String>>(username: S, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("username", &self.username)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}
