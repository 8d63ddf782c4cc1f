#![warn(unused_crate_dependencies)]


mod app;
pub mod cli;
mod confirm;
pub mod configuration;
mod pages;
pub mod tracing;
mod ui_helpers;

pub use app::{execute, run, AppContext, CommandFailed};
pub use confirm::{AssumeYes, Confirm, StdinConfirm};
pub use pages::{
    accounts::UiAccounts, customers::UiCustomers, dashboard::UiDashboard,
    data_state::DataState, employees::UiEmployees, relationships::UiRelationships,
    DisplayablePage, Notice, OpResult,
};

/// Creates the runtime the requests are spawned onto
pub fn create_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    use anyhow::Context as _;
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("unable to create runtime")
}
