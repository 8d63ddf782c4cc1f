use thiserror::Error;

use crate::uac::Role;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
    #[error("Maximum length exceeded. {max} allowed but found {actual}")]
    MaxExceeded { max: usize, actual: usize },
    #[error("Whitespace is not allowed")]
    ContainsWhitespace,
}

#[derive(Debug, Error)]
#[error("The user has not logged in")]
pub struct NotLoggedInError;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("This screen requires the {required} role but you are logged in as {actual}")]
pub struct PermissionError {
    pub required: Role,
    pub actual: Role,
}

/// Problems found with a form before anything is sent to the server
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a customer")]
    CustomerNotSelected,
}
