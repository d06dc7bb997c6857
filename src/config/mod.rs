pub mod file;

use crate::core::phone::DEFAULT_COUNTRY_CODE_DIGITS;
use crate::domain::model::Platform;
use crate::domain::ports::DialConfig;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use crate::utils::error::Result;
use std::path::PathBuf;

pub use file::FileConfig;

/// Fully resolved runtime configuration: defaults, overridden by the TOML
/// config file, overridden by CLI flags.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub platform: Platform,
    pub country_code_digits: usize,
    /// Directory holding the persisted settings file.
    pub storage_path: PathBuf,
    /// JSON address book standing in for the device contact list.
    pub contacts_file: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Android,
            country_code_digits: DEFAULT_COUNTRY_CODE_DIGITS,
            storage_path: PathBuf::from("./paydial"),
            contacts_file: PathBuf::from("./contacts.json"),
        }
    }
}

impl RuntimeConfig {
    pub fn settings_file(&self) -> PathBuf {
        self.storage_path.join("settings.json")
    }
}

impl DialConfig for RuntimeConfig {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn country_code_digits(&self) -> usize {
        self.country_code_digits
    }
}

impl Validate for RuntimeConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("country_code_digits", self.country_code_digits, 1)?;
        validate_path("storage_path", &self.storage_path.to_string_lossy())?;
        validate_path("contacts_file", &self.contacts_file.to_string_lossy())?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "paydial")]
    #[command(about = "Build and dial USSD mobile-money payment codes")]
    pub struct CliConfig {
        /// Optional TOML config file
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Dialer platform: android or ios
        #[arg(long)]
        pub platform: Option<Platform>,

        /// Digits assumed for a `+`-prefixed country code
        #[arg(long)]
        pub country_code_digits: Option<usize>,

        /// Directory for persisted settings
        #[arg(long)]
        pub storage_path: Option<PathBuf>,

        /// JSON contacts file
        #[arg(long)]
        pub contacts_file: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Dial a "pay to number" code for a phone number
        PayNumber {
            /// Phone number, in local or international format
            #[arg(long)]
            to: String,
            #[arg(long)]
            amount: String,
        },
        /// Dial a "pay to code" code for a merchant code
        PayCode {
            #[arg(long)]
            code: String,
            #[arg(long)]
            amount: String,
        },
        /// List contacts that have phone numbers
        Contacts {
            /// Filter by name or phone number substring
            #[arg(long)]
            search: Option<String>,
        },
        /// Show or change the USSD format templates
        Settings {
            #[command(subcommand)]
            action: SettingsAction,
        },
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum SettingsAction {
        /// Print the current templates
        Show,
        /// Set the pay-to-number template
        SetNumberFormat { format: String },
        /// Set the pay-to-code template
        SetCodeFormat { format: String },
        /// Restore both templates to the built-in defaults
        Reset,
    }

    impl CliConfig {
        /// Resolves the layered configuration: defaults, then the config
        /// file if given, then explicit CLI flags on top.
        pub fn runtime_config(&self) -> Result<RuntimeConfig> {
            let base = match &self.config {
                Some(path) => FileConfig::from_path(path)?.into_runtime(),
                None => RuntimeConfig::default(),
            };

            let config = RuntimeConfig {
                platform: self.platform.unwrap_or(base.platform),
                country_code_digits: self
                    .country_code_digits
                    .unwrap_or(base.country_code_digits),
                storage_path: self.storage_path.clone().unwrap_or(base.storage_path),
                contacts_file: self.contacts_file.clone().unwrap_or(base.contacts_file),
            };
            config.validate()?;
            Ok(config)
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, SettingsAction};
