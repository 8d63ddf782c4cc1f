#![warn(unused_crate_dependencies)]

use std::fmt::Debug;
use std::ops::Deref;
use std::path::Path;
use std::sync::LazyLock;

use krb_shared::telemetry::{self, TraceSettings, TRACE_FOLDER};
use uuid::Uuid;

pub mod fixtures;
mod mock_backend;

pub use mock_backend::{MockBackend, ReceivedRequest};

// Ensure that the `tracing` stack is only initialised once
pub static TRACING: LazyLock<String> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let settings = TraceSettings::new(format!("client_tests{}", Uuid::new_v4()), "info");
        let (file, path) = settings
            .create_trace_file(Path::new(TRACE_FOLDER))
            .expect("failed to create trace file");
        telemetry::install(settings.subscriber(file)).expect("failed to install subscriber");
        format!("Traces for tests being written to: {path:?}")
    } else {
        let settings = TraceSettings::new("test", "info");
        telemetry::install(settings.subscriber(std::io::sink))
            .expect("failed to install subscriber");
        "Traces set to std::io::sink".to_string()
    }
});

pub struct TestApp<C> {
    pub address: String,
    pub backend: MockBackend,
    pub core_client: C,
}

impl<C> Debug for TestApp<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestApp")
            .field("address", &self.address)
            .finish()
    }
}

/// Empty function for use when a call back isn't needed
pub fn no_cb() {}

/// Starts a fresh mock backend and builds the client under test pointed at it
///
/// Must be called from inside a tokio runtime
pub async fn spawn_app<C, F>(build_client: F) -> TestApp<C>
where
    F: FnOnce(String) -> C,
{
    start_tracing();
    let backend = MockBackend::start().expect("failed to start mock backend");
    let address = backend.address().to_string();
    let core_client = build_client(address.clone());
    TestApp {
        address,
        backend,
        core_client,
    }
}

/// Base url of a port nothing is listening on, for transport failures
pub fn unreachable_address() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind to random port");
    let port = listener
        .local_addr()
        .expect("failed to get local address")
        .port();
    drop(listener);
    port_to_test_address(port)
}

pub fn port_to_test_address(port: u16) -> String {
    format!("http://127.0.0.1:{port}/api")
}

fn start_tracing() {
    // Accessing TRACING also forces the LazyLock to initialize
    let logging_msg = TRACING.deref();
    println!("{logging_msg}");
}
