//! Shared items related to the employees that use the admin client

mod role;
mod user;

pub use role::Role;
pub use user::{Employee, Identity, Username};
