use std::io::{self, Write};

use krb_client_core::Session;
use krb_shared::{
    errors::PermissionError,
    uac::{Identity, Role},
};

pub mod accounts;
pub mod customers;
pub mod dashboard;
pub mod data_state;
pub mod employees;
pub mod relationships;

/// Tells the caller what to do after a create, update or delete
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub enum OpResult {
    NoAction,
    /// The data shown is out of date and should be fetched again
    Reload,
}

/// Outcome of the last operation shown above the page content
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Notice {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Notice {
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Notice::None => Ok(()),
            Notice::Success(msg) => writeln!(out, "{msg}"),
            Notice::Error(msg) => writeln!(out, "Error: {msg}"),
        }
    }
}

/// Trait for types that can be treated as pages to display
pub trait DisplayablePage {
    /// Base of the page's title
    fn title_base() -> &'static str;

    /// Writes the current state of the page
    fn show(&self, out: &mut dyn Write) -> io::Result<()>;

    fn notice(&self) -> &Notice;

    /// Role needed to open the page, `None` means any logged in employee
    fn required_role() -> Option<Role> {
        None
    }

    /// Returns the message of the first failure on the page if any
    fn failure(&self) -> Option<&str>;

    /// Checks that the page may be opened with the current session
    fn authorize(session: &Session) -> anyhow::Result<&Identity> {
        let identity = session.require_identity()?;
        if let Some(required) = Self::required_role() {
            if identity.role != required {
                return Err(PermissionError {
                    required,
                    actual: identity.role,
                }
                .into());
            }
        }
        Ok(identity)
    }
}

fn notice_failure(notice: &Notice) -> Option<&str> {
    match notice {
        Notice::Error(msg) => Some(msg),
        _ => None,
    }
}
