use anyhow::{anyhow, Context};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use krb_shared::{
    const_config::path::{ResolvedPath, PATH_AUTH_LOGIN},
    req_args::LoginReqArgs,
    uac::Identity,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method, StatusCode,
};
use secrecy::ExposeSecret as _;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub mod api;

/// The single access point used for all calls to the backend
#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    base_url: String,
}

/// Body to send with a request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent as is, for bodies that are already encoded
    Text(String),
    Json(serde_json::Value),
}

/// Settings for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub method: Method,
    pub body: Option<RequestBody>,
    /// Replaces the default headers with the same name (including
    /// `Content-Type`)
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
}

impl RequestBody {
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<Self> {
        Ok(Self::Json(
            serde_json::to_value(value).context("failed to serialize request body")?,
        ))
    }
}

impl From<String> for RequestBody {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl RequestConfig {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_body<B: Into<RequestBody>>(mut self, body: B) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_query<V: ToString>(mut self, key: &str, value: V) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE", skip(base_url))]
    pub fn new<S: Into<String>>(base_url: S) -> anyhow::Result<Self> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        info!(?base_url, "creating client");
        let api_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("unable to create reqwest client")?;
        Ok(Self {
            api_client,
            inner: Arc::new(ClientInner { base_url }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Sends a request to `path` (relative to the base url) and decodes the
    /// JSON response as `U`.
    ///
    /// Any status outside of the success range is turned into an error
    /// carrying the response body as text (or a generic message if the body
    /// is empty). Failures are logged before being passed on and are never
    /// retried.
    #[tracing::instrument(skip(self, config, ui_notify), fields(method = %config.method))]
    // WARNING: Must skip config as the body may contain sensitive info
    pub fn request<F, U>(
        &self,
        path: &str,
        config: RequestConfig,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_json_body(resp).await;
            deliver(tx, msg);
            ui_notify();
        };
        self.initiate_request(path, config, on_done);
        rx
    }

    /// Same as [`Self::request`] but for endpoints that do not return a JSON
    /// body. Any body on a successful response is ignored.
    #[tracing::instrument(skip(self, config, ui_notify), fields(method = %config.method))]
    pub fn request_expect_empty<F>(
        &self,
        path: &str,
        config: RequestConfig,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_empty(resp).await;
            deliver(tx, msg);
            ui_notify();
        };
        self.initiate_request(path, config, on_done);
        rx
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn login<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Identity>> {
        let args = serde_json::json!({
            "username": args.username,
            "password": args.password.expose_secret(),
        });
        self.send_request_expect_json(
            PATH_AUTH_LOGIN.resolve(),
            RequestConfig::default().with_body(args),
            ui_notify,
        )
    }

    fn initiate_request<F, O>(&self, path: &str, config: RequestConfig, on_done: F)
    where
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let request = self.build_request(path, config);
        reqwest_cross::fetch(request, on_done)
    }

    fn build_request(&self, path: &str, config: RequestConfig) -> reqwest::RequestBuilder {
        let RequestConfig {
            method,
            body,
            headers: extra_headers,
            query,
        } = config;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for name in extra_headers.keys() {
            headers.remove(name);
        }
        for (name, value) in &extra_headers {
            headers.append(name.clone(), value.clone());
        }

        let mut request = self
            .api_client
            .request(method, self.path_to_url(path))
            .headers(headers);
        if !query.is_empty() {
            request = request.query(&query);
        }
        match body {
            Some(RequestBody::Text(text)) => request.body(text),
            Some(RequestBody::Json(value)) => request.body(value.to_string()),
            None => request,
        }
    }

    fn send_request_expect_json<F, U>(
        &self,
        target: ResolvedPath,
        config: RequestConfig,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        self.request(&target.path, config.with_method(target.method), ui_notify)
    }

    fn send_request_expect_empty<F>(
        &self,
        target: ResolvedPath,
        config: RequestConfig,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.request_expect_empty(&target.path, config.with_method(target.method), ui_notify)
    }

    /// Serializes `args` as the JSON body, if that fails the request is not
    /// sent and the error is returned through the receiver
    fn send_body_expect_json<T, F, U>(
        &self,
        target: ResolvedPath,
        args: &T,
        config: RequestConfig,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        T: serde::Serialize + Debug,
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        match RequestBody::json(args) {
            Ok(body) => self.send_request_expect_json(target, config.with_body(body), ui_notify),
            Err(e) => fail_without_sending(e, ui_notify),
        }
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }
}

/// Waits for the outcome of a request started by the [`Client`]
pub async fn wait_for<T>(rx: oneshot::Receiver<anyhow::Result<T>>) -> anyhow::Result<T> {
    rx.await
        .context("response channel closed before a result was sent")?
}

/// Passes the result on unless the receiver was dropped (the caller no longer
/// cares, for example the page was closed) in which case it is discarded
fn deliver<T: Debug>(tx: oneshot::Sender<anyhow::Result<T>>, msg: anyhow::Result<T>) {
    if let Err(unwanted) = tx.send(msg) {
        debug!(?unwanted, "receiver dropped before the response arrived");
    }
}

fn fail_without_sending<F, U>(
    err: anyhow::Error,
    ui_notify: F,
) -> oneshot::Receiver<anyhow::Result<U>>
where
    F: UiCallBack,
{
    error!(?err, "request not sent");
    let (tx, rx) = oneshot::channel();
    // Receiver is still held here so sending cannot fail
    let _ = tx.send(Err(err));
    ui_notify();
    rx
}

#[tracing::instrument(ret, err(Debug))]
async fn process_empty(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<()> {
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(())
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_json_body<T>(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<T>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(response
            .json()
            .await
            .context("failed to parse result as json")?)
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(?e, "failed to get response body");
            String::new()
        }
    };
    if body.is_empty() {
        anyhow!("HTTP error! status: {}", status.as_u16())
    } else {
        anyhow!("{body}")
    }
}

/// Transport failures keep the message from the transport
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> anyhow::Result<(reqwest::Response, StatusCode)> {
    if let Err(e) = &response {
        info!("Response is err: {e:#?}");
    }
    let response = response?;
    let status = response.status();
    Ok((response, status))
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}
