use crate::domain::model::Settings;
use crate::domain::ports::KeyValueStore;
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;

pub const NUMBER_FORMAT_KEY: &str = "numberFormat";
pub const CODE_FORMAT_KEY: &str = "codeFormat";

pub const DEFAULT_NUMBER_FORMAT: &str = "*182*1*1*{number}*{amount}#";
pub const DEFAULT_CODE_FORMAT: &str = "*182*8*1*{code}*{amount}#";

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_format: DEFAULT_NUMBER_FORMAT.to_string(),
            code_format: DEFAULT_CODE_FORMAT.to_string(),
        }
    }
}

/// Single source of truth for the two USSD format templates.
///
/// The store is constructed once at startup and passed explicitly to whoever
/// needs it; there is no ambient global instance. It is usable immediately
/// with the hard-coded defaults, `load` swaps in persisted values as they
/// arrive, and the setters update memory synchronously before persisting in
/// the background. Persistence is best-effort: a failed write is logged and
/// the in-memory value stands.
pub struct SettingsStore<S> {
    store: Arc<S>,
    state: Arc<RwLock<Settings>>,
}

impl<S> Clone for SettingsStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: KeyValueStore + 'static> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            state: Arc::new(RwLock::new(Settings::default())),
        }
    }

    /// Loads both templates from persistent storage. Each key falls back to
    /// its default independently: one unreadable key does not block the
    /// other. Read errors are logged and swallowed.
    pub async fn load(&self) {
        match self.store.get(NUMBER_FORMAT_KEY).await {
            Ok(Some(value)) => {
                self.state.write().expect("settings lock poisoned").number_format = value;
            }
            Ok(None) => {
                tracing::debug!("No saved {}, keeping default", NUMBER_FORMAT_KEY);
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", NUMBER_FORMAT_KEY, e);
            }
        }

        match self.store.get(CODE_FORMAT_KEY).await {
            Ok(Some(value)) => {
                self.state.write().expect("settings lock poisoned").code_format = value;
            }
            Ok(None) => {
                tracing::debug!("No saved {}, keeping default", CODE_FORMAT_KEY);
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", CODE_FORMAT_KEY, e);
            }
        }
    }

    pub fn number_format(&self) -> String {
        self.state
            .read()
            .expect("settings lock poisoned")
            .number_format
            .clone()
    }

    pub fn code_format(&self) -> String {
        self.state
            .read()
            .expect("settings lock poisoned")
            .code_format
            .clone()
    }

    pub fn snapshot(&self) -> Settings {
        self.state.read().expect("settings lock poisoned").clone()
    }

    /// Updates the pay-to-number template. The new value is visible to
    /// readers before this returns; the returned handle completes once the
    /// background persistence attempt has finished, and may be ignored.
    pub fn set_number_format(&self, value: impl Into<String>) -> JoinHandle<()> {
        let value = value.into();
        self.state
            .write()
            .expect("settings lock poisoned")
            .number_format = value.clone();
        self.persist(NUMBER_FORMAT_KEY, value)
    }

    /// Updates the pay-to-code template; same semantics as
    /// [`set_number_format`](Self::set_number_format).
    pub fn set_code_format(&self, value: impl Into<String>) -> JoinHandle<()> {
        let value = value.into();
        self.state
            .write()
            .expect("settings lock poisoned")
            .code_format = value.clone();
        self.persist(CODE_FORMAT_KEY, value)
    }

    /// Puts both templates back to the hard-coded defaults, persisting each
    /// through the same path as the setters.
    pub fn reset_to_defaults(&self) -> (JoinHandle<()>, JoinHandle<()>) {
        (
            self.set_number_format(DEFAULT_NUMBER_FORMAT),
            self.set_code_format(DEFAULT_CODE_FORMAT),
        )
    }

    fn persist(&self, key: &'static str, value: String) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(e) = store.set(key, &value).await {
                // No rollback and no retry: memory stays ahead of disk.
                tracing::warn!("Failed to persist {}: {}", key, e);
            }
        })
    }
}
