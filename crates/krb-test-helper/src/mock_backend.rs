use std::{
    net::TcpListener,
    sync::{Arc, Mutex},
};

use actix_web::{
    http::{header::ContentType, StatusCode},
    web, App, HttpRequest, HttpResponse, HttpServer,
};
use anyhow::Context;

/// Prefix every route of the real backend lives under
const API_PREFIX: &str = "/api";

/// A scripted stand in for the REST backend
///
/// Responses are registered per method and path (relative to `/api`). When
/// the same route is registered more than once the latest registration wins.
/// Requests with no registered response get a 404 with an explanatory body.
/// Every request is recorded, matched or not.
#[derive(Debug, Clone)]
pub struct MockBackend {
    address: String,
    state: Arc<MockState>,
}

#[derive(Debug, Default)]
struct MockState {
    routes: Mutex<Vec<MockRoute>>,
    received: Mutex<Vec<ReceivedRequest>>,
}

#[derive(Debug, Clone)]
struct MockRoute {
    method: String,
    path: String,
    status: StatusCode,
    body: String,
    is_json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedRequest {
    pub method: String,
    /// Relative to `/api`
    pub path: String,
    /// Decoded query pairs in the order they were sent
    pub query: Vec<(String, String)>,
    /// Names are lower case
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ReceivedRequest {
    /// All values for the header `name` (case insensitive)
    pub fn header(&self, name: &str) -> Vec<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .filter(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not valid json")
    }
}

impl MockBackend {
    /// Binds to a random port and runs the server in the background
    pub fn start() -> anyhow::Result<Self> {
        let listener =
            TcpListener::bind("127.0.0.1:0").context("failed to bind to random port")?;
        let port = listener
            .local_addr()
            .context("failed to get local address of listener")?
            .port();
        let state = Arc::new(MockState::default());
        let app_state = web::Data::from(Arc::clone(&state));
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .default_service(web::route().to(respond))
        })
        .workers(1)
        .listen(listener)
        .context("failed to bind mock backend to listener")?
        .run();
        // Dropped with the test runtime
        tokio::spawn(server);
        Ok(Self {
            address: crate::port_to_test_address(port),
            state,
        })
    }

    /// Base url to give to the client under test
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn mock_json(&self, method: &str, path: &str, status: u16, body: serde_json::Value) {
        self.add_route(method, path, status, body.to_string(), true);
    }

    pub fn mock_text(&self, method: &str, path: &str, status: u16, body: &str) {
        self.add_route(method, path, status, body.to_string(), false);
    }

    /// Every request seen so far, oldest first
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state
            .received
            .lock()
            .expect("mock backend lock poisoned")
            .clone()
    }

    pub fn received_for(&self, method: &str, path: &str) -> Vec<ReceivedRequest> {
        self.received()
            .into_iter()
            .filter(|r| r.method.eq_ignore_ascii_case(method) && r.path == path)
            .collect()
    }

    fn add_route(&self, method: &str, path: &str, status: u16, body: String, is_json: bool) {
        let status = StatusCode::from_u16(status).expect("invalid status code");
        self.state
            .routes
            .lock()
            .expect("mock backend lock poisoned")
            .push(MockRoute {
                method: method.to_ascii_uppercase(),
                path: path.to_string(),
                status,
                body,
                is_json,
            });
    }
}

async fn respond(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    let path = req
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(req.path())
        .to_string();
    let method = req.method().as_str().to_string();
    let query = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();
    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_ascii_lowercase(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let route = state
        .routes
        .lock()
        .expect("mock backend lock poisoned")
        .iter()
        .rev()
        .find(|r| r.method == method && r.path == path)
        .cloned();

    state
        .received
        .lock()
        .expect("mock backend lock poisoned")
        .push(ReceivedRequest {
            method: method.clone(),
            path: path.clone(),
            query,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        });

    match route {
        Some(route) => {
            let mut response = HttpResponse::build(route.status);
            if route.is_json {
                response.content_type(ContentType::json());
            }
            if route.body.is_empty() {
                response.finish()
            } else {
                response.body(route.body)
            }
        }
        None => HttpResponse::NotFound().body(format!("no mock response for {method} {path}")),
    }
}
