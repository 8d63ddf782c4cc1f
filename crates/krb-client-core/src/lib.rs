//! Request client and session handling shared by the KRB admin front ends
//! NB: The assumption is made that the async runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]


mod client;
mod session;

pub use client::{wait_for, Client, RequestBody, RequestConfig, UiCallBack};
#[cfg(not(target_arch = "wasm32"))]
pub use session::store::FileStore;
pub use session::{
    store::{IdentityStore, MemoryStore},
    CorruptIdentityPolicy, Session, SessionState,
};
