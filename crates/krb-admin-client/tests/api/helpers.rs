use krb_admin_client::{
    configuration::{ApiSettings, Configuration, SessionSettings},
    AppContext, Confirm,
};
use krb_client_core::{IdentityStore as _, MemoryStore};

pub use krb_test_helper::{fixtures, TestApp};

/// Id of the employee the logged in helpers use
pub const EMPLOYEE_ID: u64 = 7;

pub async fn spawn_app() -> TestApp<AppContext> {
    krb_test_helper::spawn_app(|address| build_context(address, MemoryStore::default())).await
}

/// Starts with `username` already logged in
pub async fn spawn_logged_in(username: &str, role: &str) -> TestApp<AppContext> {
    let store = MemoryStore::default();
    store
        .save(&fixtures::identity_json(EMPLOYEE_ID, username, role).to_string())
        .unwrap();
    krb_test_helper::spawn_app(|address| build_context(address, store)).await
}

pub fn build_context(address: String, store: MemoryStore) -> AppContext {
    let configuration = Configuration {
        api: ApiSettings { base_url: address },
        session: SessionSettings {
            storage_dir: None,
            on_corrupt_identity: Default::default(),
        },
    };
    AppContext::with_store(&configuration, Box::new(store)).expect("failed to build context")
}

/// Records the prompts and answers with a fixed value
#[derive(Debug)]
pub struct ScriptedConfirm {
    pub answer: bool,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            prompts: Vec::new(),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            prompts: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answer)
    }
}

pub fn output_text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("output is not utf8")
}
