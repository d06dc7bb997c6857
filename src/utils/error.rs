use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaydialError {
    #[error("Contacts permission denied")]
    PermissionDenied,

    #[error("Contacts permission permanently denied")]
    PermissionDeniedPermanently,

    #[error("No contacts with phone numbers found")]
    NoContacts,

    #[error("Cannot open dialer for {url}")]
    DialerUnavailable { url: String },

    #[error("Operation already in progress: {operation}")]
    OperationInFlight { operation: &'static str },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid dial URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl PaydialError {
    /// Short message shown to the user when a flow stops. The Display impl
    /// carries the technical detail for logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::PermissionDenied => {
                "Please grant contacts permission to select a contact.".to_string()
            }
            Self::PermissionDeniedPermanently => {
                "Contacts permission is required to select contacts. Please enable it in Settings."
                    .to_string()
            }
            Self::NoContacts => "No contacts with phone numbers found.".to_string(),
            Self::DialerUnavailable { .. } => {
                "Cannot open dialer on this device/emulator.".to_string()
            }
            Self::OperationInFlight { operation } => {
                format!("A {} request is already running, please wait.", operation)
            }
            Self::ValidationError { message } => message.clone(),
            other => format!("{}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "Retry and accept the permission prompt",
            Self::PermissionDeniedPermanently => "Open the OS settings and enable contacts access",
            Self::NoContacts => "Add contacts with phone numbers, or type the number directly",
            Self::DialerUnavailable { .. } => "Dial the code manually from the phone app",
            Self::OperationInFlight { .. } => "Wait for the current operation to finish",
            Self::ValidationError { .. } => "Fill in both the number/code and the amount",
            Self::ConfigError { .. } => "Check the CLI flags and the config file",
            Self::IoError(_) | Self::SerializationError(_) => {
                "Check file paths and permissions for the storage directory"
            }
            Self::UrlError(_) => "Check the configured format template for invalid characters",
        }
    }
}

pub type Result<T> = std::result::Result<T, PaydialError>;
