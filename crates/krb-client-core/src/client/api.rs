use futures::channel::oneshot;
use krb_shared::const_config::path::PATH_AUTH_LOGOUT;

use crate::{client::UiCallBack, Client, RequestConfig};

pub mod accounts;
pub mod customers;
pub mod employees;

impl Client {
    /// Tells the server the session is over. The reply body is not JSON so
    /// it is ignored.
    #[tracing::instrument(skip(ui_notify))]
    pub fn logout<F: UiCallBack>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_AUTH_LOGOUT.resolve(),
            RequestConfig::default(),
            ui_notify,
        )
    }
}
