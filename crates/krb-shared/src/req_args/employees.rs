use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

use crate::uac::{Role, Username};

#[derive(serde::Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployeeReqArgs {
    pub username: Username,
    pub password: SecretString,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

/// Fields an administrator may change on an existing employee
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdateReqArgs {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl Debug for NewEmployeeReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewEmployeeReqArgs")
            .field("username", &self.username)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}
