//! Tracks who is logged in and keeps that identity across restarts
//!
//! The stored identity is trusted as is. It is not checked against the server
//! on startup, the first request that needs a live server session will fail
//! instead if it has expired.

use std::sync::Arc;

use anyhow::Context as _;
use krb_shared::{errors::NotLoggedInError, log_err_as_warn, req_args::LoginReqArgs, uac::Identity};
use tracing::{info, warn};

use crate::{client::wait_for, Client};

use self::store::IdentityStore;

pub mod store;

/// What to do when the stored identity can not be read back
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptIdentityPolicy {
    /// Log a warning, remove the stored value and start logged out
    #[default]
    TreatAsAnonymous,
    /// Refuse to start
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(Arc<Identity>),
}

#[derive(Debug)]
pub struct Session {
    store: Box<dyn IdentityStore>,
    state: SessionState,
}

impl Session {
    /// Reads the stored identity (once) and decides the starting state
    #[tracing::instrument(skip(store), err(Debug))]
    pub fn bootstrap(
        store: Box<dyn IdentityStore>,
        policy: CorruptIdentityPolicy,
    ) -> anyhow::Result<Self> {
        let state = match store.load().context("failed to read stored identity")? {
            None => SessionState::Anonymous,
            Some(raw) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    info!(username = %identity.username, "restored stored identity");
                    SessionState::Authenticated(Arc::new(identity))
                }
                Err(e) => match policy {
                    CorruptIdentityPolicy::TreatAsAnonymous => {
                        warn!(?e, "stored identity is corrupt, discarding it");
                        store
                            .clear()
                            .context("failed to remove corrupt stored identity")?;
                        SessionState::Anonymous
                    }
                    CorruptIdentityPolicy::Fail => {
                        return Err(anyhow::Error::new(e).context("stored identity is corrupt"))
                    }
                },
            },
        };
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Anonymous => None,
            SessionState::Authenticated(identity) => Some(identity),
        }
    }

    pub fn require_identity(&self) -> Result<&Identity, NotLoggedInError> {
        self.identity().ok_or(NotLoggedInError)
    }

    /// On success the identity is stored before the state changes. On failure
    /// nothing changes.
    #[tracing::instrument(skip(self, client))]
    pub async fn login(&mut self, client: &Client, args: LoginReqArgs) -> anyhow::Result<&Identity> {
        let identity = wait_for(client.login(args, || {})).await?;
        let serialized =
            serde_json::to_string(&identity).context("failed to serialize identity")?;
        self.store
            .save(&serialized)
            .context("failed to store identity")?;
        info!(username = %identity.username, "logged in");
        self.state = SessionState::Authenticated(Arc::new(identity));
        self.require_identity().map_err(Into::into)
    }

    /// Always ends up logged out locally, a failure to tell the server is only
    /// logged
    #[tracing::instrument(skip(self, client))]
    pub async fn logout(&mut self, client: &Client) -> anyhow::Result<()> {
        self.state = SessionState::Anonymous;
        let cleared = self.store.clear().context("failed to remove stored identity");
        log_err_as_warn!(
            wait_for(client.logout(|| {})).await,
            "server did not accept the logout"
        );
        cleared
    }
}
