//! Code shared between the admin clients and their test support

#![warn(unused_crate_dependencies)]


pub mod account;
pub mod const_config;
pub mod customer;
pub mod errors;
pub mod id;
mod macros;
pub mod req_args;
pub mod uac;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
