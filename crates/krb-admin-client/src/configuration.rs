use std::path::{Path, PathBuf};

use anyhow::Context as _;
use krb_client_core::CorruptIdentityPolicy;
use krb_shared::const_config::{client::CLIENT_DEFAULT_API_BASE_URL, session::SESSION_APP_DIR_NAME};

/// Name of the optional settings file inside the configuration directory
pub const CONFIGURATION_FILE_NAME: &str = "krb-admin.toml";

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub api: ApiSettings,
    pub session: SessionSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SessionSettings {
    /// Where the logged in employee is remembered, defaults to the user's
    /// local data directory
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    #[serde(default)]
    pub on_corrupt_identity: CorruptIdentityPolicy,
}

impl SessionSettings {
    pub fn resolved_storage_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_local_dir()
                .context("unable to determine the local data directory, set session.storage_dir")?
                .join(SESSION_APP_DIR_NAME)),
        }
    }
}

/// Loads the settings from the `configuration` folder of the current directory
pub fn get_configuration(api_url_override: Option<&str>) -> anyhow::Result<Configuration> {
    let base_path = std::env::current_dir().context("failed to determine the current directory")?;
    get_configuration_from(&base_path.join("configuration"), api_url_override)
}

/// Sources in increasing priority: built in defaults, the optional settings
/// file, environment variables then the override from the command line
pub fn get_configuration_from(
    configuration_directory: &Path,
    api_url_override: Option<&str>,
) -> anyhow::Result<Configuration> {
    let settings = config::Config::builder()
        .set_default("api.base_url", CLIENT_DEFAULT_API_BASE_URL)?
        .add_source(
            config::File::from(configuration_directory.join(CONFIGURATION_FILE_NAME))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of KRB and '__' as separator)
        // E.g. `KRB_API__BASE_URL=http://bank:8080/api` would set `Configuration.api.base_url`
        .add_source(
            config::Environment::with_prefix("KRB")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("api.base_url", api_url_override)?
        .set_default("session.on_corrupt_identity", "treat_as_anonymous")?
        .build()
        .context("failed to load configuration")?;

    settings
        .try_deserialize::<Configuration>()
        .context("failed to parse configuration")
}
