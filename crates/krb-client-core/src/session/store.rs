use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};

use anyhow::anyhow;

/// Durable storage for the serialized identity of the logged in user
pub trait IdentityStore: Debug + Send + Sync {
    /// Returns `None` if nothing has been stored
    fn load(&self) -> anyhow::Result<Option<String>>;
    fn save(&self, value: &str) -> anyhow::Result<()>;
    /// Removing a value that is not there is not an error
    fn clear(&self) -> anyhow::Result<()>;
}

/// Keeps the value in memory only. Clones share the same value.
#[derive(Default, Clone)]
pub struct MemoryStore {
    value: Arc<Mutex<Option<String>>>,
}

/// Only reports whether a value is held, the identity itself is personal data
impl Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let has_value = self.with_value(|value| value.is_some()).ok();
        f.debug_struct("MemoryStore")
            .field("has_value", &has_value)
            .finish()
    }
}

impl MemoryStore {
    fn with_value<T>(&self, f: impl FnOnce(&mut Option<String>) -> T) -> anyhow::Result<T> {
        let mut guard = self
            .value
            .lock()
            .map_err(|e| anyhow!("identity store lock poisoned: {e}"))?;
        Ok(f(&mut guard))
    }
}

impl IdentityStore for MemoryStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        self.with_value(|value| value.clone())
    }

    fn save(&self, value: &str) -> anyhow::Result<()> {
        self.with_value(|stored| *stored = Some(value.to_string()))
    }

    fn clear(&self) -> anyhow::Result<()> {
        self.with_value(|stored| *stored = None)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::{
        io::ErrorKind,
        path::{Path, PathBuf},
    };

    use anyhow::Context as _;
    use krb_shared::const_config::session::SESSION_IDENTITY_KEY;
    use tracing::debug;

    use super::IdentityStore;

    /// Stores the value in `<dir>/currentUser.json`
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new<P: AsRef<Path>>(dir: P) -> Self {
            Self {
                path: dir.as_ref().join(format!("{SESSION_IDENTITY_KEY}.json")),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl IdentityStore for FileStore {
        fn load(&self) -> anyhow::Result<Option<String>> {
            match std::fs::read_to_string(&self.path) {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = ?self.path, "no stored identity");
                    Ok(None)
                }
                Err(e) => {
                    Err(e).with_context(|| format!("failed to read {}", self.path.display()))
                }
            }
        }

        fn save(&self, value: &str) -> anyhow::Result<()> {
            if let Some(dir) = self.path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            std::fs::write(&self.path, value)
                .with_context(|| format!("failed to write {}", self.path.display()))
        }

        fn clear(&self) -> anyhow::Result<()> {
            match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => {
                    Err(e).with_context(|| format!("failed to remove {}", self.path.display()))
                }
            }
        }
    }
}
