pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod settings;
pub mod utils;

pub use adapters::{JsonAddressBook, JsonFileStore, SystemDialer};
pub use config::RuntimeConfig;
#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, SettingsAction};
pub use crate::core::session::{filter_contacts, PaySession};
pub use domain::model::{Contact, PermissionStatus, Platform, Settings};
pub use settings::{SettingsStore, DEFAULT_CODE_FORMAT, DEFAULT_NUMBER_FORMAT};
pub use utils::error::{PaydialError, Result};
